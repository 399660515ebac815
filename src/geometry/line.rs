use std::fmt;

use crate::math::{near_zero, Point2, Vector2};

/// Which half-plane of an [`ImplicitLine`] a point occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// `A·x + B·y + C > 0` beyond tolerance.
    Positive,
    /// `A·x + B·y + C < 0` beyond tolerance.
    Negative,
    /// Within tolerance of the line.
    OnLine,
}

/// An infinite straight line in implicit form: `A·x + B·y + C = 0`.
///
/// `A` and `B` are never both zero, so the normal `(A, B)` and the
/// direction `(B, -A)` are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitLine {
    a: f64,
    b: f64,
    c: f64,
}

impl ImplicitLine {
    /// The line `-3x + 5y - 2 = 0`, the only line the analyzer works against.
    pub const FIXED: Self = Self {
        a: -3.0,
        b: 5.0,
        c: -2.0,
    };

    /// Signed implicit value `A·x + B·y + C` at `(x, y)`.
    ///
    /// Zero on the line; the sign tells which half-plane the point is in.
    #[must_use]
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// Returns `true` if `(x, y)` lies on the line within tolerance.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        near_zero(self.value_at(x, y))
    }

    /// Same as [`contains`](Self::contains) for a point.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        self.contains(p.x, p.y)
    }

    /// Normal vector `(A, B)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// Direction vector `(B, -A)`, perpendicular to the normal.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(self.b, -self.a)
    }

    /// Classifies `(x, y)` against the line.
    #[must_use]
    pub fn side_of(&self, x: f64, y: f64) -> LineSide {
        let v = self.value_at(x, y);
        if near_zero(v) {
            LineSide::OnLine
        } else if v > 0.0 {
            LineSide::Positive
        } else {
            LineSide::Negative
        }
    }
}

impl fmt::Display for ImplicitLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: f64| if v < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{}x {} {}y {} {} = 0",
            self.a,
            sign(self.b),
            self.b.abs(),
            sign(self.c),
            self.c.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const LINE: ImplicitLine = ImplicitLine::FIXED;

    #[test]
    fn fixed_coefficients() {
        assert_abs_diff_eq!(LINE.normal(), Vector2::new(-3.0, 5.0));
        assert_abs_diff_eq!(LINE.value_at(0.0, 0.0), -2.0);
    }

    #[test]
    fn value_at_origin() {
        assert_abs_diff_eq!(LINE.value_at(0.0, 0.0), -2.0);
        assert_abs_diff_eq!(LINE.value_at(1.0, 1.0), 0.0);
    }

    #[test]
    fn contains_known_points() {
        assert!(LINE.contains(1.0, 1.0));
        assert!(LINE.contains(4.0, 2.8));
        assert!(LINE.contains(-1.0, -0.2));
        assert!(!LINE.contains(0.0, 0.0));
        assert!(!LINE.contains(5.0, 5.0));
    }

    #[test]
    fn direction_is_orthogonal_to_normal() {
        assert_abs_diff_eq!(LINE.normal().dot(&LINE.direction()), 0.0);
        assert_abs_diff_eq!(LINE.direction(), Vector2::new(5.0, 3.0));
    }

    #[test]
    fn side_classification() {
        assert_eq!(LINE.side_of(0.0, 0.0), LineSide::Negative);
        assert_eq!(LINE.side_of(0.0, 2.0), LineSide::Positive);
        assert_eq!(LINE.side_of(1.0, 1.0), LineSide::OnLine);
    }

    #[test]
    fn display_equation() {
        assert_eq!(LINE.to_string(), "-3x + 5y - 2 = 0");
    }
}
