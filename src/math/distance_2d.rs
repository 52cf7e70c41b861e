use super::{Point2, TOLERANCE};

/// Returns the parameter `t` in `[0, 1]` of the point on segment `a → b`
/// closest to `p`.
///
/// A zero-length segment yields `0.0`.
#[must_use]
pub fn closest_param_on_segment(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }
    ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

/// Returns the squared minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist_sq(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let t = closest_param_on_segment(p, a, b);
    let closest = a + (b - a) * t;
    (p - closest).norm_squared()
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    point_to_segment_dist_sq(p, a, b).sqrt()
}

/// Returns `true` if `p` lies on the segment `a → b` within [`TOLERANCE`].
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    point_to_segment_dist_sq(p, a, b) <= TOLERANCE * TOLERANCE
}

/// Returns the minimum distance from `p` to the boundary of a closed polyline,
/// including the implicit closing edge.
#[must_use]
pub fn point_to_boundary_dist(p: &Point2, polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    match n {
        0 => f64::INFINITY,
        1 => (p - polygon[0]).norm(),
        _ => (0..n)
            .map(|i| point_to_segment_dist_sq(p, &polygon[i], &polygon[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min)
            .sqrt(),
    }
}
