use crate::math::intersect_2d::find_intersections;
use crate::math::polygon_2d::{contains_point, dedup_ring};
use crate::math::Point2;

/// Returns `true` if two closed polylines share any point.
///
/// That is the case when their boundaries intersect or touch, or when a
/// vertex of one lies inside the other. Rings with fewer than three distinct
/// points never overlap anything.
#[must_use]
pub fn regions_overlap(a: &[Point2], b: &[Point2]) -> bool {
    let a = dedup_ring(a);
    let b = dedup_ring(b);
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    !find_intersections(&a, &b).is_empty()
        || a.iter().any(|p| contains_point(&b, p, &[]))
        || b.iter().any(|p| contains_point(&a, p, &[]))
}
