use crate::error::Result;
use crate::geometry::Contour;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;
use super::TraceParams;

/// Computes the boolean union of two closed polylines.
pub struct Union<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    params: TraceParams,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation with default trace parameters.
    #[must_use]
    pub fn new(a: &'a [Point2], b: &'a [Point2]) -> Self {
        Self {
            a,
            b,
            params: TraceParams::default(),
        }
    }

    /// Creates the union of two contours, rejecting open ones.
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

    /// Executes the union.
    ///
    /// Returns one polyline when the inputs overlap, both when they are
    /// disjoint, and nothing when both are degenerate.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec<Point2>> {
        boolean_execute(self.a, self.b, BooleanOp::Union, &self.params)
    }
}
