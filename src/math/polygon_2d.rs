use super::distance_2d::point_on_segment;
use super::{points_coincide, Point2, TOLERANCE};

/// Orientation of a closed polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Returns `+1.0` for counter-clockwise and `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }

    /// Returns the opposite orientation.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}

/// Location of a point relative to a closed polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Computes the signed area of a closed polyline (shoelace formula relative
/// to the first point).
///
/// Positive for counter-clockwise, negative for clockwise. Fewer than three
/// points have zero area. A repeated closing point contributes nothing.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let origin = points[0];
    let mut sum = 0.0;
    for w in points[1..].windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        sum += a.perp(&b);
    }
    sum * 0.5
}

/// Returns the winding of a closed polyline, or `None` if its area is zero.
#[must_use]
pub fn winding(points: &[Point2]) -> Option<Winding> {
    let area = signed_area(points);
    if area > 0.0 {
        Some(Winding::CounterClockwise)
    } else if area < 0.0 {
        Some(Winding::Clockwise)
    } else {
        None
    }
}

/// Returns `true` if the polyline has at least three points and its first
/// and last points coincide.
#[must_use]
pub fn is_closed(points: &[Point2]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 3 => points_coincide(first, last),
        _ => false,
    }
}

/// Removes consecutive duplicate points, including a trailing point that
/// repeats the first one, so the result lists each ring vertex once.
#[must_use]
pub fn dedup_ring(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points {
        if out.last().is_some_and(|last| points_coincide(last, pt)) {
            continue;
        }
        out.push(*pt);
    }
    while out.len() > 1 && out.first().zip(out.last()).is_some_and(|(a, b)| points_coincide(a, b)) {
        out.pop();
    }
    out
}

/// Returns the ring with the requested winding, reversing it if needed.
///
/// Zero-area rings are returned unchanged.
#[must_use]
pub fn orient(points: &[Point2], target: Winding) -> Vec<Point2> {
    match winding(points) {
        Some(w) if w != target => points.iter().rev().copied().collect(),
        _ => points.to_vec(),
    }
}

/// Classifies `point` against a closed polyline using even-odd ray casting.
///
/// Points within [`TOLERANCE`] of any edge, including the implicit closing
/// edge, are reported as [`PointLocation::OnBoundary`].
#[must_use]
pub fn point_location(polygon: &[Point2], point: &Point2) -> PointLocation {
    let n = polygon.len();
    if n == 0 {
        return PointLocation::Outside;
    }
    for i in 0..n {
        if point_on_segment(point, &polygon[i], &polygon[(i + 1) % n]) {
            return PointLocation::OnBoundary;
        }
    }
    if n < 3 {
        return PointLocation::Outside;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Returns `true` if `point` lies inside the closed polyline and outside
/// every hole.
///
/// The outer boundary counts as inside. A point on a hole's boundary is on
/// the boundary of the filled region, so it also counts as inside.
#[must_use]
pub fn contains_point(polygon: &[Point2], point: &Point2, holes: &[Vec<Point2>]) -> bool {
    if point_location(polygon, point) == PointLocation::Outside {
        return false;
    }
    !holes
        .iter()
        .any(|hole| point_location(hole, point) == PointLocation::Inside)
}

/// Returns `true` if every point of `inner` lies inside or on `outer`.
#[must_use]
pub fn all_points_inside(inner: &[Point2], outer: &[Point2]) -> bool {
    !inner.is_empty() && inner.iter().all(|p| contains_point(outer, p, &[]))
}

/// Builds an order-independent key for a ring: its points snapped to the
/// tolerance grid and sorted.
#[must_use]
pub fn canonical_key(points: &[Point2]) -> Vec<(i64, i64)> {
    #[allow(clippy::cast_possible_truncation)]
    let snap = |v: f64| (v / TOLERANCE).round() as i64;
    let mut key: Vec<(i64, i64)> = dedup_ring(points)
        .iter()
        .map(|p| (snap(p.x), snap(p.y)))
        .collect();
    key.sort_unstable();
    key
}
