use crate::geometry::are_polylines_identical;
use crate::math::Point2;
use crate::operations::boolean::TraceParams;
use crate::operations::query::regions_overlap;

use super::cleanup::cleanup;
use super::region::{clip, cut, merge, regions_of, rings_of, Region};

// Every set is read as regions: a ring nested inside an odd number of larger
// rings of the same set is a hole. Results list each outer ring
// (counter-clockwise) followed by its holes (clockwise).

/// Unions two sets of closed polylines.
///
/// Each region of `a` merges with the first unconsumed region of `b` whose
/// outer ring is identical to or overlaps its own, consuming both. Regions
/// of `a` without a partner are kept as they are, followed by every region
/// of `b` that was never consumed.
#[must_use]
pub fn union_sets(a: &[Vec<Point2>], b: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    let params = TraceParams::default();
    let regions_b = regions_of(b);
    let mut consumed = vec![false; regions_b.len()];
    let mut result = Vec::new();

    for ra in regions_of(a) {
        let partner = regions_b.iter().enumerate().position(|(j, rb)| {
            !consumed[j]
                && (are_polylines_identical(&ra.outer, &rb.outer)
                    || regions_overlap(&ra.outer, &rb.outer))
        });
        match partner {
            Some(j) => {
                consumed[j] = true;
                result.extend(merge(&ra, &regions_b[j], &params));
            }
            None => result.push(ra),
        }
    }

    result.extend(
        regions_b
            .into_iter()
            .zip(consumed)
            .filter(|&(_, used)| !used)
            .map(|(rb, _)| rb),
    );
    cleanup(rings_of(result))
}

/// Subtracts a set of closed polylines from another.
///
/// Every region of `a` has each region of `b` removed in turn; the zero,
/// one or many pieces left after one subtraction carry on to the next. A
/// cutter that overlaps a hole opened earlier merges with it, and the parts
/// of `a` lying in a hole of a `b` region survive.
#[must_use]
pub fn subtract_sets(a: &[Vec<Point2>], b: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    let params = TraceParams::default();
    let cutters = regions_of(b);
    let mut result = Vec::new();

    for region in regions_of(a) {
        let mut pieces = vec![region];
        for cutter in &cutters {
            let spared: Vec<Region> = pieces
                .iter()
                .flat_map(|piece| cutter.holes.iter().flat_map(|hole| clip(piece, hole, &params)))
                .collect();
            pieces = pieces
                .into_iter()
                .flat_map(|piece| cut(piece, &cutter.outer, &params))
                .collect();
            pieces.extend(spared);
        }
        result.extend(pieces);
    }

    cleanup(rings_of(result))
}

/// Intersects two sets of closed polylines.
///
/// Every pair of regions contributes the overlap of their outer rings with
/// the holes of both cut out; pairs that do not overlap contribute nothing.
#[must_use]
pub fn intersect_sets(a: &[Vec<Point2>], b: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    let params = TraceParams::default();
    let regions_b = regions_of(b);
    let mut result = Vec::new();

    for ra in regions_of(a) {
        for rb in &regions_b {
            let mut parts = clip(&ra, &rb.outer, &params);
            for hole in &rb.holes {
                parts = parts
                    .into_iter()
                    .flat_map(|part| cut(part, hole, &params))
                    .collect();
            }
            result.extend(parts);
        }
    }
    cleanup(rings_of(result))
}

/// Computes the symmetric difference of two sets of closed polylines as
/// `(a - b) ∪ (b - a)`.
///
/// Sets holding the same polylines, in any order, give an empty result.
#[must_use]
pub fn xor_sets(a: &[Vec<Point2>], b: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    if sets_identical(a, b) {
        return Vec::new();
    }
    union_sets(&subtract_sets(a, b), &subtract_sets(b, a))
}

/// Returns `true` if every polyline of `a` has its own identical polyline in
/// `b` and the sets have the same size.
fn sets_identical(a: &[Vec<Point2>], b: &[Vec<Point2>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut matched = vec![false; b.len()];
    a.iter().all(|pa| {
        let found = b
            .iter()
            .enumerate()
            .position(|(j, pb)| !matched[j] && are_polylines_identical(pa, pb));
        match found {
            Some(j) => {
                matched[j] = true;
                true
            }
            None => false,
        }
    })
}
