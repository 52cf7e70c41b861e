use crate::error::Result;
use crate::geometry::Contour;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;
use super::TraceParams;

/// Computes the symmetric difference of two closed polylines.
///
/// The result is `(A - B) ∪ (B - A)`; identical inputs give nothing.
pub struct Xor<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    params: TraceParams,
}

impl<'a> Xor<'a> {
    /// Creates a new `Xor` operation with default trace parameters.
    #[must_use]
    pub fn new(a: &'a [Point2], b: &'a [Point2]) -> Self {
        Self {
            a,
            b,
            params: TraceParams::default(),
        }
    }

    /// Creates the symmetric difference of two contours, rejecting open ones.
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

    /// Executes the symmetric difference.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec<Point2>> {
        boolean_execute(self.a, self.b, BooleanOp::Xor, &self.params)
    }
}
