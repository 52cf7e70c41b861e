use tracing::{debug, trace};

use crate::geometry::contour::are_polylines_identical;
use crate::math::intersect_2d::find_intersections;
use crate::math::polygon_2d::{all_points_inside, dedup_ring, orient, signed_area, Winding};
use crate::math::{Point2, TOLERANCE};
use crate::operations::batch::union_sets;

use super::classify::{classify_crossings, classify_edges};
use super::graph::AugmentedGraph;
use super::select::BooleanOp;
use super::trace::trace_paths;
use super::TraceParams;

/// Executes a boolean operation on two closed polylines.
///
/// Orchestrates the full pipeline: degenerate and identity short-circuits,
/// winding normalization, intersection search, the containment fallback when
/// the boundaries never meet, graph construction, classification and
/// tracing. Every returned polyline has at least three distinct points and
/// no repeated closing point. Outer boundaries are counter-clockwise and
/// holes, such as a pocket enclosed by a union or a ring cut out by a
/// subtraction, are clockwise.
#[must_use]
pub fn boolean_execute(
    a: &[Point2],
    b: &[Point2],
    op: BooleanOp,
    params: &TraceParams,
) -> Vec<Vec<Point2>> {
    let ring_a = usable_ring(a);
    let ring_b = usable_ring(b);

    let (ring_a, ring_b) = match (ring_a, ring_b) {
        (Some(ra), Some(rb)) => (ra, rb),
        (Some(ra), None) => return with_empty_b(op, &ra),
        (None, Some(rb)) => return with_empty_a(op, &rb),
        (None, None) => return Vec::new(),
    };

    if op == BooleanOp::Xor {
        return xor_execute(&ring_a, &ring_b, params);
    }

    if are_polylines_identical(&ring_a, &ring_b) {
        debug!(?op, "inputs are identical; skipping trace");
        return identical_result(op, &ring_a);
    }

    let (wa, wb) = op.required_windings();
    let norm_a = orient(&ring_a, wa);
    let norm_b = orient(&ring_b, wb);

    let hits = find_intersections(&norm_a, &norm_b);
    if hits.is_empty() {
        return containment_fallback(op, &norm_a, &norm_b);
    }

    let mut graph = AugmentedGraph::build(&norm_a, &norm_b, &hits);
    if graph.intersection_count() == 0 {
        return containment_fallback(op, &norm_a, &norm_b);
    }
    trace!(
        nodes = graph.len(),
        intersections = graph.intersection_count(),
        ?op,
        "built augmented graph"
    );

    classify_edges(&mut graph, &norm_a, &norm_b);
    classify_crossings(&mut graph, &norm_b, wb);
    trace_paths(&mut graph, op, params)
}

/// Deduplicates a ring and rejects it if it cannot bound an area.
fn usable_ring(points: &[Point2]) -> Option<Vec<Point2>> {
    let ring = dedup_ring(points);
    (ring.len() >= 3 && signed_area(&ring).abs() > TOLERANCE * TOLERANCE).then_some(ring)
}

fn ccw(ring: &[Point2]) -> Vec<Point2> {
    orient(ring, Winding::CounterClockwise)
}

fn cw(ring: &[Point2]) -> Vec<Point2> {
    orient(ring, Winding::Clockwise)
}

/// Result when B is degenerate.
fn with_empty_b(op: BooleanOp, a: &[Point2]) -> Vec<Vec<Point2>> {
    match op {
        BooleanOp::Union | BooleanOp::Subtract | BooleanOp::Xor => vec![ccw(a)],
        BooleanOp::Intersect => Vec::new(),
    }
}

/// Result when A is degenerate.
fn with_empty_a(op: BooleanOp, b: &[Point2]) -> Vec<Vec<Point2>> {
    match op {
        BooleanOp::Union | BooleanOp::Xor => vec![ccw(b)],
        BooleanOp::Subtract | BooleanOp::Intersect => Vec::new(),
    }
}

fn identical_result(op: BooleanOp, a: &[Point2]) -> Vec<Vec<Point2>> {
    match op {
        BooleanOp::Union | BooleanOp::Intersect => vec![ccw(a)],
        BooleanOp::Subtract | BooleanOp::Xor => Vec::new(),
    }
}

/// Handles boundaries that never meet: one ring contains the other, or the
/// two are disjoint.
///
/// A ring nested inside A survives subtraction as a clockwise hole after A.
fn containment_fallback(op: BooleanOp, a: &[Point2], b: &[Point2]) -> Vec<Vec<Point2>> {
    let a_in_b = all_points_inside(a, b);
    let b_in_a = all_points_inside(b, a);
    debug!(?op, a_in_b, b_in_a, "no boundary intersections; using containment");

    match (a_in_b, b_in_a) {
        (true, true) => identical_result(op, a),
        (true, false) => match op {
            BooleanOp::Union => vec![ccw(b)],
            BooleanOp::Intersect => vec![ccw(a)],
            BooleanOp::Subtract | BooleanOp::Xor => Vec::new(),
        },
        (false, true) => match op {
            BooleanOp::Union => vec![ccw(a)],
            BooleanOp::Intersect => vec![ccw(b)],
            BooleanOp::Subtract | BooleanOp::Xor => vec![ccw(a), cw(b)],
        },
        (false, false) => match op {
            BooleanOp::Union | BooleanOp::Xor => vec![ccw(a), ccw(b)],
            BooleanOp::Intersect => Vec::new(),
            BooleanOp::Subtract => vec![ccw(a)],
        },
    }
}

/// Symmetric difference as the union of both one-sided differences.
fn xor_execute(a: &[Point2], b: &[Point2], params: &TraceParams) -> Vec<Vec<Point2>> {
    if are_polylines_identical(a, b) {
        debug!("inputs are identical; symmetric difference is empty");
        return Vec::new();
    }
    let a_minus_b = boolean_execute(a, b, BooleanOp::Subtract, params);
    let b_minus_a = boolean_execute(b, a, BooleanOp::Subtract, params);
    union_sets(&a_minus_b, &b_minus_a)
}
