use crate::error::Result;
use crate::geometry::Contour;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;
use super::TraceParams;

/// Computes the boolean intersection of two closed polylines.
pub struct Intersect<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    params: TraceParams,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation with default trace parameters.
    #[must_use]
    pub fn new(a: &'a [Point2], b: &'a [Point2]) -> Self {
        Self {
            a,
            b,
            params: TraceParams::default(),
        }
    }

    /// Creates the intersection of two contours, rejecting open ones.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ContourNotClosed` if either contour is open.
    pub fn from_contours(a: &'a Contour, b: &'a Contour) -> Result<Self> {
        a.ensure_closed()?;
        b.ensure_closed()?;
        Ok(Self::new(&a.points, &b.points))
    }

    /// Sets custom trace parameters.
    #[must_use]
    pub fn with_params(mut self, params: TraceParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the intersection.
    ///
    /// Touching inputs produce no polyline: the zero-area overlap is dropped
    /// while tracing.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec<Point2>> {
        boolean_execute(self.a, self.b, BooleanOp::Intersect, &self.params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn intersection_of_triangle_and_square() {
        let square = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let triangle = vec![p(1.0, -1.0), p(4.0, 1.0), p(1.0, 3.0)];
        let result = Intersect::new(&square, &triangle).execute();
        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(signed_area(&result[0]), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn intersection_is_symmetric_in_area() {
        let a = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 2.0), p(0.0, 2.0)];
        let b = vec![p(2.0, 1.0), p(5.0, 1.0), p(5.0, 4.0), p(2.0, 4.0)];
        let ab = Intersect::new(&a, &b).execute();
        let ba = Intersect::new(&b, &a).execute();
        assert_eq!(ab.len(), 1);
        assert_eq!(ba.len(), 1);
        assert_abs_diff_eq!(signed_area(&ab[0]), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(signed_area(&ba[0]), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn touching_corner_gives_nothing() {
        let a = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let b = vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)];
        assert!(Intersect::new(&a, &b).execute().is_empty());
    }

    #[test]
    fn intersection_of_closed_contours() {
        let a = Contour::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)], true);
        let b = Contour::new(vec![p(1.0, 1.0), p(3.0, 1.0), p(3.0, 3.0), p(1.0, 3.0)], true);
        let result = Intersect::from_contours(&a, &b).unwrap().execute();
        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(signed_area(&result[0]), 1.0, epsilon = 1e-9);
        assert!(Intersect::from_contours(&a, &Contour::new(b.points.clone(), false)).is_err());
    }
}
