use crate::error::{GeometryError, Result};
use crate::math::{points_coincide, Point2, Vector2};

/// A straight segment between two points.
///
/// Parametrized as `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
/// `start == end` is allowed and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Creates a segment from raw coordinates, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] naming the first offending coordinate.
    pub fn try_from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        for (coordinate, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { coordinate, value }.into());
            }
        }
        Ok(Self::from_coords(x1, y1, x2, y2))
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// Point at parameter `t`. Not clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }

    /// Returns `true` if both endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_coincide(&self.start, &self.end)
    }

    /// Returns `true` if `p` coincides with either endpoint within tolerance.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        points_coincide(p, &self.start) || points_coincide(p, &self.end)
    }
}
