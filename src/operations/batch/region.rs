use tracing::debug;

use crate::math::polygon_2d::{all_points_inside, dedup_ring, orient, signed_area, Winding};
use crate::math::Point2;
use crate::operations::boolean::{boolean_execute, BooleanOp, TraceParams};
use crate::operations::query::regions_overlap;

/// A filled area: one outer ring minus the holes inside it.
///
/// Outer rings are counter-clockwise and holes clockwise.
#[derive(Debug, Clone)]
pub struct Region {
    pub outer: Vec<Point2>,
    pub holes: Vec<Vec<Point2>>,
}

impl Region {
    fn solid(outer: Vec<Point2>) -> Self {
        Self {
            outer: orient(&outer, Winding::CounterClockwise),
            holes: Vec::new(),
        }
    }
}

/// Groups a set of rings into regions by nesting depth.
///
/// A ring enclosed by an odd number of larger rings is a hole of the
/// smallest ring enclosing it; any other ring starts a region of its own, so
/// an island inside a hole is filled again. The winding of the input rings
/// is ignored.
pub fn regions_of(rings: &[Vec<Point2>]) -> Vec<Region> {
    let rings: Vec<Vec<Point2>> = rings
        .iter()
        .map(|ring| dedup_ring(ring))
        .filter(|ring| ring.len() >= 3)
        .collect();
    let areas: Vec<f64> = rings.iter().map(|ring| signed_area(ring).abs()).collect();
    let encloses = |outer: usize, inner: usize| {
        outer != inner && areas[inner] < areas[outer] && all_points_inside(&rings[inner], &rings[outer])
    };
    let enclosing: Vec<Vec<usize>> = (0..rings.len())
        .map(|i| (0..rings.len()).filter(|&j| encloses(j, i)).collect())
        .collect();

    let mut regions = Vec::new();
    let mut region_of = vec![None; rings.len()];
    for (i, ring) in rings.iter().enumerate() {
        if enclosing[i].len() % 2 == 0 {
            region_of[i] = Some(regions.len());
            regions.push(Region::solid(ring.clone()));
        }
    }
    for (i, ring) in rings.iter().enumerate() {
        if enclosing[i].len() % 2 == 0 {
            continue;
        }
        let parent = enclosing[i]
            .iter()
            .copied()
            .min_by(|&x, &y| areas[x].total_cmp(&areas[y]))
            .and_then(|j| region_of[j]);
        if let Some(r) = parent {
            regions[r].holes.push(orient(ring, Winding::Clockwise));
        }
    }
    regions
}

/// Flattens regions back into rings, each outer ring followed by its holes.
pub fn rings_of(regions: Vec<Region>) -> Vec<Vec<Point2>> {
    regions
        .into_iter()
        .flat_map(|region| std::iter::once(region.outer).chain(region.holes))
        .collect()
}

/// Removes the area of a simple ring from a region.
///
/// Holes the cutter overlaps are merged into it first, so the result never
/// carries two overlapping holes. Material the merged outline encloses
/// without covering comes back as separate islands.
pub fn cut(region: Region, cutter: &[Point2], params: &TraceParams) -> Vec<Region> {
    if !regions_overlap(&region.outer, cutter) {
        return vec![region];
    }

    let Absorbed {
        cutter,
        islands,
        untouched,
    } = absorb_holes(cutter, region.holes, params);

    let mut result = regions_of(&boolean_execute(
        &region.outer,
        &cutter,
        BooleanOp::Subtract,
        params,
    ));
    for island in islands {
        let kept = boolean_execute(&island, &region.outer, BooleanOp::Intersect, params);
        result.extend(kept.into_iter().map(Region::solid));
    }
    assign_holes(&mut result, untouched);
    result
}

/// Intersects a region with a simple ring.
pub fn clip(region: &Region, ring: &[Point2], params: &TraceParams) -> Vec<Region> {
    if !regions_overlap(&region.outer, ring) {
        return Vec::new();
    }
    let mut parts = regions_of(&boolean_execute(
        &region.outer,
        ring,
        BooleanOp::Intersect,
        params,
    ));
    for hole in &region.holes {
        parts = parts
            .into_iter()
            .flat_map(|part| cut(part, hole, params))
            .collect();
    }
    parts
}

/// Unions two overlapping regions.
///
/// The outer rings are merged and every hole of either region that the
/// other does not fill completely is cut from the merged outline; the parts
/// of each region lying in the other's remaining holes are then added back.
pub fn merge(first: &Region, second: &Region, params: &TraceParams) -> Vec<Region> {
    let open_first: Vec<&Vec<Point2>> = first
        .holes
        .iter()
        .filter(|hole| !fills(second, hole, params))
        .collect();
    let open_second: Vec<&Vec<Point2>> = second
        .holes
        .iter()
        .filter(|hole| !fills(first, hole, params))
        .collect();

    let mut merged = regions_of(&boolean_execute(
        &first.outer,
        &second.outer,
        BooleanOp::Union,
        params,
    ));
    for hole in open_first.iter().chain(&open_second) {
        merged = merged
            .into_iter()
            .flat_map(|region| cut(region, hole, params))
            .collect();
    }
    for hole in open_second {
        merged.extend(clip(first, hole, params));
    }
    for hole in open_first {
        merged.extend(clip(second, hole, params));
    }
    merged
}

/// Returns `true` if `region` covers the whole of `ring`.
fn fills(region: &Region, ring: &[Point2], params: &TraceParams) -> bool {
    boolean_execute(ring, &region.outer, BooleanOp::Subtract, params).is_empty()
        && !region.holes.iter().any(|hole| regions_overlap(ring, hole))
}

struct Absorbed {
    cutter: Vec<Point2>,
    islands: Vec<Vec<Point2>>,
    untouched: Vec<Vec<Point2>>,
}

/// Grows the cutter by every hole it overlaps, directly or through another
/// absorbed hole.
fn absorb_holes(cutter: &[Point2], holes: Vec<Vec<Point2>>, params: &TraceParams) -> Absorbed {
    let mut cutter = orient(cutter, Winding::CounterClockwise);
    let mut islands = Vec::new();
    let mut untouched = Vec::new();
    let mut pending = holes;

    while let Some(pos) = pending.iter().position(|hole| regions_overlap(&cutter, hole)) {
        let hole = pending.swap_remove(pos);
        let mut merged = regions_of(&boolean_execute(&cutter, &hole, BooleanOp::Union, params));
        if merged.len() != 1 {
            // Touching at a point only: the hole stays a hole of its own.
            untouched.push(hole);
            continue;
        }
        if let Some(outline) = merged.pop() {
            cutter = outline.outer;
            islands.extend(outline.holes);
        }
    }

    untouched.extend(pending);
    Absorbed {
        cutter,
        islands,
        untouched,
    }
}

/// Hands each hole to the smallest region whose outer ring encloses it.
fn assign_holes(regions: &mut [Region], holes: Vec<Vec<Point2>>) {
    for hole in holes {
        let owner = regions
            .iter_mut()
            .filter(|region| all_points_inside(&hole, &region.outer))
            .min_by(|x, y| signed_area(&x.outer).abs().total_cmp(&signed_area(&y.outer).abs()));
        match owner {
            Some(region) => region.holes.push(orient(&hole, Winding::Clockwise)),
            None => debug!(points = hole.len(), "hole left without an enclosing region"),
        }
    }
}
