use nalgebra::center;

use crate::math::distance_2d::point_on_segment;
use crate::math::polygon_2d::{contains_point, point_location, PointLocation, Winding};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::graph::{AugmentedGraph, ContourSource};

/// Whether a traced polyline moves into or out of the other polygon at an
/// intersection node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entering,
    Exiting,
}

/// Position of the edge leaving a node, relative to the other polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    Inside,
    Outside,
    /// Runs along the other boundary in the same direction.
    SharedSame,
    /// Runs along the other boundary in the opposite direction.
    SharedOpposite,
}

/// Classifies a directed edge, given by its midpoint and direction, against
/// a closed polyline.
#[must_use]
pub fn edge_status(mid: &Point2, dir: &Vector2, other: &[Point2]) -> EdgeStatus {
    let m = other.len();
    for j in 0..m {
        let o0 = &other[j];
        let o1 = &other[(j + 1) % m];
        if point_on_segment(mid, o0, o1) {
            return if dir.dot(&(o1 - o0)) > 0.0 {
                EdgeStatus::SharedSame
            } else {
                EdgeStatus::SharedOpposite
            };
        }
    }
    match point_location(other, mid) {
        PointLocation::Inside => EdgeStatus::Inside,
        // Boundary hits were handled above, so anything else is outside.
        PointLocation::Outside | PointLocation::OnBoundary => EdgeStatus::Outside,
    }
}

/// Stores the status of every node's outgoing edge.
///
/// Nodes of list A are tested against `b` and nodes of list B against `a`.
pub fn classify_edges(graph: &mut AugmentedGraph, a: &[Point2], b: &[Point2]) {
    for source in [ContourSource::A, ContourSource::B] {
        let other = match source {
            ContourSource::A => b,
            ContourSource::B => a,
        };
        let statuses: Vec<_> = graph
            .list(source)
            .into_iter()
            .filter_map(|id| {
                let node = graph.node(id)?;
                let next = graph.node(node.next)?;
                let mid = center(&node.point, &next.point);
                Some((id, edge_status(&mid, &(next.point - node.point), other)))
            })
            .collect();
        for (id, status) in statuses {
            if let Some(node) = graph.node_mut(id) {
                node.edge = status;
            }
        }
    }
}

/// Labels each paired node of list A as entering or exiting polygon B.
///
/// Nodes where A's incoming and outgoing edges lie on the same side of B are
/// touch points rather than crossings and stay unlabelled. Elsewhere the
/// arrival direction on A is compared with the departure direction of the
/// partner on B. With B's interior on the side given by `b_winding`, a
/// departure turning towards A's arrival side means A was inside B and is
/// leaving. When the two directions are nearly collinear the midpoint of the
/// incoming edge is tested against B instead; that fallback is a heuristic
/// and can mislabel nested or self-touching configurations.
///
/// Edge statuses must already be set by [`classify_edges`].
pub fn classify_crossings(graph: &mut AugmentedGraph, b: &[Point2], b_winding: Winding) {
    let labels: Vec<_> = graph
        .list(ContourSource::A)
        .into_iter()
        .filter_map(|id| {
            let node = graph.node(id)?;
            let partner = graph.node(node.partner?)?;
            let prev = graph.node(node.prev)?;
            if touches_only(prev.edge, node.edge) {
                return Some((id, None));
            }
            let prev = prev.point;
            let partner_next = graph.node(partner.next)?.point;

            let arrival = node.point - prev;
            let departure = partner_next - partner.point;
            let cross = arrival.perp(&departure) * b_winding.sign();
            let scale = arrival.norm() * departure.norm();

            let crossing = if cross > TOLERANCE * scale {
                Crossing::Exiting
            } else if cross < -TOLERANCE * scale {
                Crossing::Entering
            } else if contains_point(b, &center(&prev, &node.point), &[]) {
                Crossing::Exiting
            } else {
                Crossing::Entering
            };
            Some((id, Some(crossing)))
        })
        .collect();

    for (id, crossing) in labels {
        if let Some(node) = graph.node_mut(id) {
            node.crossing = crossing;
        }
    }
}

/// Both edges at a node stay on one side of the other polygon.
fn touches_only(incoming: EdgeStatus, outgoing: EdgeStatus) -> bool {
    matches!(
        (incoming, outgoing),
        (EdgeStatus::Inside, EdgeStatus::Inside) | (EdgeStatus::Outside, EdgeStatus::Outside)
    )
}
