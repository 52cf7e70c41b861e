use crate::math::polygon_2d::Winding;

use super::classify::{Crossing, EdgeStatus};
use super::graph::ContourSource;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
    /// Symmetric difference, derived as `(A - B) ∪ (B - A)`.
    Xor,
}

impl BooleanOp {
    /// Windings the two inputs are normalized to before tracing.
    ///
    /// Subtraction runs B against A's orientation so the traced path turns
    /// into B's interior where it leaves A.
    #[must_use]
    pub fn required_windings(self) -> (Winding, Winding) {
        match self {
            Self::Subtract => (Winding::CounterClockwise, Winding::Clockwise),
            Self::Union | Self::Intersect | Self::Xor => {
                (Winding::CounterClockwise, Winding::CounterClockwise)
            }
        }
    }

    /// List a trace continues on after a labelled crossing.
    ///
    /// Union and subtraction follow the boundary that leaves the other
    /// polygon, intersection the one that enters it. Union therefore returns
    /// to A at exiting nodes, subtraction only leaves A where A enters B, and
    /// intersection switches lists at every crossing.
    #[must_use]
    pub fn continues_on(self, crossing: Crossing) -> ContourSource {
        match (self, crossing) {
            (Self::Union | Self::Subtract | Self::Xor, Crossing::Exiting)
            | (Self::Intersect, Crossing::Entering) => ContourSource::A,
            (Self::Union | Self::Subtract | Self::Xor, Crossing::Entering)
            | (Self::Intersect, Crossing::Exiting) => ContourSource::B,
        }
    }
}

/// Determines whether the edge leaving a node belongs to the result boundary.
///
/// | Edge        | vs other polygon | Union | Subtract(A-B) | Intersect |
/// |-------------|------------------|-------|---------------|-----------|
/// | from A      | OUTSIDE          | keep  | keep          | discard   |
/// | from A      | INSIDE           | discard | discard     | keep      |
/// | from A      | SHARED, same dir | keep  | keep          | keep      |
/// | from A      | SHARED, opposite | discard | discard     | discard   |
/// | from B      | OUTSIDE          | keep  | discard       | discard   |
/// | from B      | INSIDE           | discard | keep        | keep      |
/// | from B      | SHARED           | discard | discard     | discard   |
///
/// Shared runs are emitted once, from A. Under subtraction B is reversed, so
/// "same direction" means the two inputs touch from opposite sides.
/// Symmetric difference is never traced directly and keeps nothing.
#[allow(clippy::match_same_arms)]
#[must_use]
pub fn keeps_edge(source: ContourSource, status: EdgeStatus, op: BooleanOp) -> bool {
    match (source, status, op) {
        (_, _, BooleanOp::Xor) => false,

        (ContourSource::A, EdgeStatus::Outside, BooleanOp::Union | BooleanOp::Subtract) => true,
        (ContourSource::A, EdgeStatus::Outside, BooleanOp::Intersect) => false,
        (ContourSource::A, EdgeStatus::Inside, BooleanOp::Intersect) => true,
        (ContourSource::A, EdgeStatus::Inside, BooleanOp::Union | BooleanOp::Subtract) => false,
        (ContourSource::A, EdgeStatus::SharedSame, _) => true,
        (ContourSource::A, EdgeStatus::SharedOpposite, _) => false,

        (ContourSource::B, EdgeStatus::Outside, BooleanOp::Union) => true,
        (ContourSource::B, EdgeStatus::Outside, BooleanOp::Subtract | BooleanOp::Intersect) => {
            false
        }
        (ContourSource::B, EdgeStatus::Inside, BooleanOp::Subtract | BooleanOp::Intersect) => true,
        (ContourSource::B, EdgeStatus::Inside, BooleanOp::Union) => false,
        (ContourSource::B, EdgeStatus::SharedSame | EdgeStatus::SharedOpposite, _) => false,
    }
}
