pub mod line;
pub mod segment;

pub use line::{ImplicitLine, LineSide};
pub use segment::Segment;
