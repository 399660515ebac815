pub mod analysis;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;

pub use analysis::{AnalysisResult, Intersection, SegmentLineAnalyzer};
pub use error::{Result, SeglineError};
