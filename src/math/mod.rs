/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Absolute tolerance for every floating-point equality or zero test.
pub const TOLERANCE: f64 = 1e-4;

/// Returns `true` if `value` is within [`TOLERANCE`] of zero.
#[must_use]
pub fn near_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// Returns `true` if both coordinates of `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    near_zero(a.x - b.x) && near_zero(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_is_strict() {
        assert!(near_zero(0.0));
        assert!(near_zero(-0.000_09));
        assert!(!near_zero(TOLERANCE));
        assert!(!near_zero(-0.001));
    }

    #[test]
    fn near_zero_rejects_nan() {
        assert!(!near_zero(f64::NAN));
    }

    #[test]
    fn coincide_is_componentwise() {
        let a = Point2::new(1.0, 1.0);
        assert!(points_coincide(&a, &Point2::new(1.000_05, 0.999_95)));
        // Diagonal offset below tolerance on each axis still counts.
        assert!(points_coincide(&a, &Point2::new(1.000_09, 1.000_09)));
        assert!(!points_coincide(&a, &Point2::new(1.0, 1.001)));
    }
}
