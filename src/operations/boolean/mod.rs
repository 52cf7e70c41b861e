mod bridge;
mod classify;
mod engine;
mod graph;
mod intersect_op;
mod select;
mod subtract;
mod trace;
mod union;
mod xor;

pub use bridge::bridge_holes;
pub use classify::{Crossing, EdgeStatus};
pub use engine::boolean_execute;
pub use graph::{AugmentedGraph, AugmentedNode, ContourSource, NodeId};
pub use intersect_op::Intersect;
pub use select::{keeps_edge, BooleanOp};
pub use subtract::Subtract;
pub use union::Union;
pub use xor::Xor;

use crate::math::TOLERANCE;

/// Parameters controlling result tracing.
#[derive(Debug, Clone, Copy)]
pub struct TraceParams {
    /// Multiplier on the node count giving the per-path iteration cap.
    pub iteration_factor: usize,
    /// Traced paths whose absolute area does not exceed this are discarded.
    pub min_area: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            iteration_factor: 2,
            min_area: TOLERANCE,
        }
    }
}
