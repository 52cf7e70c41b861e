use tracing::{debug, warn};

use crate::math::polygon_2d::{dedup_ring, signed_area};
use crate::math::{points_coincide, Point2};

use super::classify::Crossing;
use super::graph::{AugmentedGraph, ContourSource, NodeId};
use super::select::{keeps_edge, BooleanOp};
use super::TraceParams;

/// Walks the classified graph and collects every closed result path.
///
/// Each unvisited node whose outgoing edge is kept by `op` can start a path.
/// At a labelled crossing the walk continues on the list named by
/// [`BooleanOp::continues_on`]; at a touch point it takes the open edge that
/// turns furthest left. Only edges kept by `op` are ever followed. Paths that
/// hit the iteration cap or run into an already emitted edge are discarded;
/// tracing then continues from the next start node.
pub fn trace_paths(
    graph: &mut AugmentedGraph,
    op: BooleanOp,
    params: &TraceParams,
) -> Vec<Vec<Point2>> {
    let cap = params.iteration_factor.max(1) * graph.len();
    let mut paths = Vec::new();

    for start in start_candidates(graph, op) {
        if !is_open(graph, start, op) {
            continue;
        }
        let Some(raw) = trace_one(graph, start, op, cap) else {
            continue;
        };
        if let Some(path) = finalize_path(&raw, params) {
            paths.push(path);
        }
    }

    paths
}

/// Orders start nodes according to the operation.
///
/// Union may start anywhere outside the other polygon. Subtraction prefers
/// vertices of A and intersection prefers entering nodes of A. Remaining
/// nodes follow so that loops made only of B edges are still found.
fn start_candidates(graph: &AugmentedGraph, op: BooleanOp) -> Vec<NodeId> {
    let list_a = graph.list(ContourSource::A);
    let list_b = graph.list(ContourSource::B);

    let preferred: Vec<NodeId> = match op {
        BooleanOp::Subtract => list_a
            .iter()
            .copied()
            .filter(|&id| graph.node(id).is_some_and(|n| n.is_vertex))
            .collect(),
        BooleanOp::Intersect => list_a
            .iter()
            .copied()
            .filter(|&id| {
                graph
                    .node(id)
                    .is_some_and(|n| n.crossing == Some(Crossing::Entering))
            })
            .collect(),
        BooleanOp::Union | BooleanOp::Xor => Vec::new(),
    };

    preferred.into_iter().chain(list_a).chain(list_b).collect()
}

fn is_open(graph: &AugmentedGraph, id: NodeId, op: BooleanOp) -> bool {
    graph
        .node(id)
        .is_some_and(|n| !n.visited && keeps_edge(n.source, n.edge, op))
}

/// Picks the node whose outgoing edge continues the path from `current`.
fn choose_outgoing(graph: &AugmentedGraph, current: NodeId, op: BooleanOp) -> Option<NodeId> {
    let node = graph.node(current)?;
    let Some(partner) = node.partner else {
        return is_open(graph, current, op).then_some(current);
    };
    let (on_a, on_b) = match node.source {
        ContourSource::A => (current, partner),
        ContourSource::B => (partner, current),
    };
    let Some(crossing) = graph.node(on_a)?.crossing else {
        return sharpest_left(graph, current, partner, op);
    };

    let (preferred, other) = match op.continues_on(crossing) {
        ContourSource::A => (on_a, on_b),
        ContourSource::B => (on_b, on_a),
    };
    if is_open(graph, preferred, op) {
        return Some(preferred);
    }
    // A label from the collinear fallback may disagree with the edge status.
    is_open(graph, other, op).then_some(other)
}

/// Among the open edges leaving a touch point, picks the one turning furthest
/// left from the arrival direction so each result loop closes on itself.
fn sharpest_left(
    graph: &AugmentedGraph,
    current: NodeId,
    partner: NodeId,
    op: BooleanOp,
) -> Option<NodeId> {
    let node = graph.node(current)?;
    let arrival = node.point - graph.node(node.prev)?.point;
    [current, partner]
        .into_iter()
        .filter(|&id| is_open(graph, id, op))
        .filter_map(|id| {
            let n = graph.node(id)?;
            let departure = graph.node(n.next)?.point - n.point;
            Some((id, arrival.perp(&departure).atan2(arrival.dot(&departure))))
        })
        .max_by(|x, y| x.1.total_cmp(&y.1))
        .map(|(id, _)| id)
}

fn trace_one(
    graph: &mut AugmentedGraph,
    start: NodeId,
    op: BooleanOp,
    cap: usize,
) -> Option<Vec<Point2>> {
    let mut path: Vec<Point2> = Vec::new();
    let mut current = start;

    for step in 0..cap {
        let point = graph.node(current)?.point;
        if !path.last().is_some_and(|last| points_coincide(last, &point)) {
            path.push(point);
        }

        // The start node was picked for its own open edge.
        let outgoing = if step == 0 {
            Some(start)
        } else {
            choose_outgoing(graph, current, op)
        };
        let Some(outgoing) = outgoing else {
            debug!(x = point.x, y = point.y, "trace reached a dead end; discarding path");
            return None;
        };
        let node = graph.node_mut(outgoing)?;
        node.visited = true;
        let next = node.next;

        if next == start || graph.node(next)?.partner == Some(start) {
            return Some(path);
        }
        current = next;
    }

    warn!(cap, "trace exceeded its iteration cap; discarding path");
    None
}

/// Drops degenerate paths.
///
/// The traced direction is kept: the kept edges leave the result's interior
/// on their left, so outer boundaries come out counter-clockwise and holes
/// clockwise.
fn finalize_path(raw: &[Point2], params: &TraceParams) -> Option<Vec<Point2>> {
    let ring = dedup_ring(raw);
    if ring.len() < 3 || signed_area(&ring).abs() <= params.min_area {
        return None;
    }
    Some(ring)
}
