//! Classification of a segment against the fixed line `-3x + 5y - 2 = 0`.
//!
//! [`SegmentLineAnalyzer`] exposes the individual predicates in two forms:
//! coordinate-taking methods (`is_point_on_line`, `get_intersection_point`, ...)
//! and [`Segment`]-taking methods that the composite [`analyze`](SegmentLineAnalyzer::analyze)
//! is built from. All comparisons use the absolute [`TOLERANCE`].

mod result;

pub use result::{AnalysisResult, Intersection};

use tracing::{debug, trace};

use crate::geometry::{ImplicitLine, LineSide, Segment};
use crate::math::{near_zero, Point2, TOLERANCE};

/// Stateless analyzer bound to [`ImplicitLine::FIXED`].
#[derive(Debug, Clone, Copy)]
pub struct SegmentLineAnalyzer {
    line: ImplicitLine,
}

impl Default for SegmentLineAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentLineAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: ImplicitLine::FIXED,
        }
    }

    /// The line every query is evaluated against.
    #[must_use]
    pub fn line(&self) -> &ImplicitLine {
        &self.line
    }

    /// Returns `true` if `|A·x + B·y + C| < TOLERANCE`.
    #[must_use]
    pub fn is_point_on_line(&self, x: f64, y: f64) -> bool {
        self.line.contains(x, y)
    }

    /// Signed implicit value `A·x + B·y + C`.
    #[must_use]
    pub fn line_value(&self, x: f64, y: f64) -> f64 {
        self.line.value_at(x, y)
    }

    /// Half-plane of `(x, y)` relative to the line.
    #[must_use]
    pub fn side_of(&self, x: f64, y: f64) -> LineSide {
        self.line.side_of(x, y)
    }

    #[must_use]
    pub fn does_line_intersect_segment(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        self.intersects(&Segment::from_coords(x1, y1, x2, y2))
    }

    #[must_use]
    pub fn get_intersection_point(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Point2> {
        self.intersection_point(&Segment::from_coords(x1, y1, x2, y2))
    }

    #[must_use]
    pub fn are_perpendicular(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        self.is_perpendicular(&Segment::from_coords(x1, y1, x2, y2))
    }

    /// Returns `true` if `(px, py)` matches either endpoint componentwise within tolerance.
    #[must_use]
    pub fn is_end_point(&self, px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        Segment::from_coords(x1, y1, x2, y2).has_endpoint(&Point2::new(px, py))
    }

    /// Classifies the segment and renders the outcome as text.
    #[must_use]
    pub fn analyze_position(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        self.analyze(&Segment::from_coords(x1, y1, x2, y2)).to_string()
    }

    /// Returns `true` unless both endpoints are strictly on the same side.
    ///
    /// Uses the raw sign of the product of the endpoint values, so an endpoint
    /// exactly on the line counts as touching.
    #[must_use]
    pub fn intersects(&self, segment: &Segment) -> bool {
        let v1 = self.line.value_at(segment.start().x, segment.start().y);
        let v2 = self.line.value_at(segment.end().x, segment.end().y);
        v1 * v2 <= 0.0
    }

    /// Computes the point where the segment meets the line.
    ///
    /// Solves `A·(x1 + t·dx) + B·(y1 + t·dy) + C = 0` for `t`. A segment
    /// parallel to the line yields its start point when it lies on the line,
    /// so a fully coincident segment reports only `start`, not the overlap.
    #[must_use]
    pub fn intersection_point(&self, segment: &Segment) -> Option<Point2> {
        if !self.intersects(segment) {
            return None;
        }

        let start = segment.start();
        let denominator = self.line.normal().dot(&segment.delta());

        if near_zero(denominator) {
            trace!(
                ?start,
                degenerate = segment.is_degenerate(),
                "segment parallel to line"
            );
            return self.line.contains_point(start).then_some(*start);
        }

        let t = -self.line.value_at(start.x, start.y) / denominator;
        trace!(t, "segment parameter at line crossing");

        // Only reachable near the parallel boundary; the sign test already
        // bounds `t` otherwise.
        if !(-TOLERANCE..=1.0 + TOLERANCE).contains(&t) {
            return None;
        }

        Some(segment.point_at(t))
    }

    /// Returns `true` if the segment vector is orthogonal to the line direction `(B, -A)`.
    ///
    /// Zero-length segments are perpendicular to everything.
    #[must_use]
    pub fn is_perpendicular(&self, segment: &Segment) -> bool {
        near_zero(self.line.direction().dot(&segment.delta()))
    }

    /// Classifies the segment against the line.
    #[must_use]
    pub fn analyze(&self, segment: &Segment) -> AnalysisResult {
        let result = if self.line.contains_point(segment.start())
            && self.line.contains_point(segment.end())
        {
            AnalysisResult::OnLine
        } else {
            match self.intersection_point(segment) {
                None => AnalysisResult::NoIntersection,
                Some(point) => AnalysisResult::Intersects(Intersection {
                    point,
                    perpendicular: self.is_perpendicular(segment),
                    is_endpoint: segment.has_endpoint(&point),
                }),
            }
        };
        debug!(?segment, ?result, "analyzed segment");
        result
    }
}
