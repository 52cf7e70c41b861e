use crate::error::Result;
use crate::geometry::Contour;
use crate::math::Point2;
use crate::operations::query::FindHoles;

use super::bridge::bridge_holes;
use super::engine::boolean_execute;
use super::select::BooleanOp;
use super::TraceParams;

/// Computes the boolean subtraction of one closed polyline from another.
///
/// By default a polyline nested entirely inside A comes back as a separate
/// clockwise hole, which [`FindHoles`] pairs with the outer one.
/// With bridged holes enabled, every outer contour and its holes are merged
/// into a single ring-shaped path.
pub struct Subtract<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    params: TraceParams,
    bridged_holes: bool,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(a: &'a [Point2], b: &'a [Point2]) -> Self {
        Self {
            a,
            b,
            params: TraceParams::default(),
            bridged_holes: false,
        }
    }

    /// Creates the subtraction of two contours, rejecting open ones.
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

    /// Selects whether holes are spliced into their outer contour.
    #[must_use]
    pub fn with_bridged_holes(mut self, bridged: bool) -> Self {
        self.bridged_holes = bridged;
        self
    }

    /// Executes the subtraction.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec<Point2>> {
        let paths = boolean_execute(self.a, self.b, BooleanOp::Subtract, &self.params);
        if self.bridged_holes {
            bridge_results(paths)
        } else {
            paths
        }
    }
}

fn bridge_results(paths: Vec<Vec<Point2>>) -> Vec<Vec<Point2>> {
    let contours: Vec<Contour> = paths
        .into_iter()
        .map(|points| Contour::new(points, true))
        .collect();

    FindHoles::new(&contours)
        .execute()
        .into_iter()
        .map(|(outer, holes)| {
            let outer = &contours[outer].points;
            if holes.is_empty() {
                return outer.clone();
            }
            let holes: Vec<Vec<Point2>> = holes
                .iter()
                .map(|&h| contours[h].points.clone())
                .collect();
            bridge_holes(outer, &holes)
        })
        .collect()
}
