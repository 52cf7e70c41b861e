pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-7;

/// Returns `true` if two points are equal within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm_squared() <= TOLERANCE * TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincide_within_tolerance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + TOLERANCE * 0.5, 2.0);
        assert!(points_coincide(&a, &b));
    }

    #[test]
    fn distinct_points_do_not_coincide() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + TOLERANCE * 2.0, 2.0);
        assert!(!points_coincide(&a, &b));
    }
}
