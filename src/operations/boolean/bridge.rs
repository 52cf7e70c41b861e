use crate::math::polygon_2d::{dedup_ring, orient, Winding};
use crate::math::Point2;

/// Splices holes into an outer ring through zero-width bridges.
///
/// The outer ring is made counter-clockwise and every hole clockwise, so the
/// signed area of the result equals the outer area minus the hole areas.
/// Each hole is joined at the closest pair of vertices; bridges are not
/// checked against other holes.
#[must_use]
pub fn bridge_holes(outer: &[Point2], holes: &[Vec<Point2>]) -> Vec<Point2> {
    let mut ring = orient(&dedup_ring(outer), Winding::CounterClockwise);
    for hole in holes {
        let hole = orient(&dedup_ring(hole), Winding::Clockwise);
        if hole.len() < 3 || ring.is_empty() {
            continue;
        }
        ring = splice(&ring, &hole);
    }
    ring
}

fn splice(ring: &[Point2], hole: &[Point2]) -> Vec<Point2> {
    let (i, j) = closest_pair(ring, hole);
    let mut out = Vec::with_capacity(ring.len() + hole.len() + 2);
    out.extend_from_slice(&ring[..=i]);
    out.extend(hole[j..].iter().chain(&hole[..=j]).copied());
    out.extend_from_slice(&ring[i..]);
    out
}

fn closest_pair(ring: &[Point2], hole: &[Point2]) -> (usize, usize) {
    let mut best = (0, 0, f64::INFINITY);
    for (i, r) in ring.iter().enumerate() {
        for (j, h) in hole.iter().enumerate() {
            let d = (h - r).norm_squared();
            if d < best.2 {
                best = (i, j, d);
            }
        }
    }
    (best.0, best.1)
}
