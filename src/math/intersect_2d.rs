use super::distance_2d::closest_param_on_segment;
use super::{points_coincide, Point2, TOLERANCE};

/// One crossing between segment `seg_a` of polyline A and segment `seg_b` of
/// polyline B.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionInfo {
    /// Intersection point.
    pub point: Point2,
    /// Index of the segment on A (segment `i` runs from vertex `i` to `i + 1`).
    pub seg_a: usize,
    /// Index of the segment on B.
    pub seg_b: usize,
    /// Parameter on segment A (0..1).
    pub t_a: f64,
    /// Parameter on segment B (0..1).
    pub t_b: f64,
}

fn param_in_range(t: f64) -> bool {
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&t)
}

/// Bounded intersection of segments `p1 → p2` and `q1 → q2`.
///
/// Non-parallel segments are solved directly and accepted when both
/// parameters lie in `[0, 1]` within tolerance. Parallel segments intersect
/// only when collinear; the overlap is then represented by the first of
/// `q1`, `q2`, `p1`, `p2` that lies within the other segment. Swapping the
/// argument order therefore reports the other end of an overlap.
#[must_use]
pub fn robust_intersect(p1: &Point2, p2: &Point2, q1: &Point2, q2: &Point2) -> Option<Point2> {
    let r = p2 - p1;
    let s = q2 - q1;
    let r_len = r.norm();
    let s_len = s.norm();

    if r_len < TOLERANCE || s_len < TOLERANCE {
        return degenerate_intersect(p1, p2, q1, q2, r_len);
    }

    let qp = q1 - p1;
    let det = r.perp(&s);

    if det.abs() > TOLERANCE * r_len * s_len {
        let t = qp.perp(&s) / det;
        let u = qp.perp(&r) / det;
        if param_in_range(t) && param_in_range(u) {
            return Some(p1 + r * t.clamp(0.0, 1.0));
        }
        return None;
    }

    // Parallel: distance from q1 to the carrier line of p.
    if qp.perp(&r).abs() > TOLERANCE * r_len {
        return None;
    }

    let on_p = |pt: &Point2| param_in_range((pt - p1).dot(&r) / (r_len * r_len));
    let on_q = |pt: &Point2| param_in_range((pt - q1).dot(&s) / (s_len * s_len));

    [(q1, on_p(q1)), (q2, on_p(q2)), (p1, on_q(p1)), (p2, on_q(p2))]
        .into_iter()
        .find_map(|(pt, hit)| hit.then_some(*pt))
}

/// Handles segments where at least one side has zero length.
fn degenerate_intersect(
    p1: &Point2,
    p2: &Point2,
    q1: &Point2,
    q2: &Point2,
    r_len: f64,
) -> Option<Point2> {
    let (point, a, b) = if r_len < TOLERANCE {
        (p1, q1, q2)
    } else {
        (q1, p1, p2)
    };
    let t = closest_param_on_segment(point, a, b);
    let closest = a + (b - a) * t;
    points_coincide(point, &closest).then_some(*point)
}

/// Collects every intersection between the segments of two closed
/// polylines, including the implicit closing edges.
///
/// Collinear overlaps contribute both ends of the overlapping range.
#[must_use]
pub fn find_intersections(a: &[Point2], b: &[Point2]) -> Vec<IntersectionInfo> {
    let n = a.len();
    let m = b.len();
    let mut hits = Vec::new();
    if n < 2 || m < 2 {
        return hits;
    }

    for i in 0..n {
        let a0 = &a[i];
        let a1 = &a[(i + 1) % n];
        for j in 0..m {
            let b0 = &b[j];
            let b1 = &b[(j + 1) % m];
            if !boxes_overlap(a0, a1, b0, b1) {
                continue;
            }
            let Some(first) = robust_intersect(a0, a1, b0, b1) else {
                continue;
            };

            let mut points = vec![first];
            let at_endpoint = [a0, a1, b0, b1]
                .iter()
                .any(|end| points_coincide(end, &first));
            if at_endpoint {
                let extra = [
                    robust_intersect(a0, a1, b1, b0),
                    robust_intersect(b0, b1, a0, a1),
                    robust_intersect(b0, b1, a1, a0),
                ];
                for pt in extra.into_iter().flatten() {
                    if !points.iter().any(|q| points_coincide(q, &pt)) {
                        points.push(pt);
                    }
                }
            }

            for point in points {
                hits.push(IntersectionInfo {
                    point,
                    seg_a: i,
                    seg_b: j,
                    t_a: closest_param_on_segment(&point, a0, a1),
                    t_b: closest_param_on_segment(&point, b0, b1),
                });
            }
        }
    }

    hits
}

fn boxes_overlap(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    a0.x.min(a1.x) <= b0.x.max(b1.x) + TOLERANCE
        && b0.x.min(b1.x) <= a0.x.max(a1.x) + TOLERANCE
        && a0.y.min(a1.y) <= b0.y.max(b1.y) + TOLERANCE
        && b0.y.min(b1.y) <= a0.y.max(a1.y) + TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let hit = robust_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(hit.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn disjoint_segments() {
        let hit = robust_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 2.0));
        assert!(hit.is_none());
    }

    #[test]
    fn lines_cross_outside_segments() {
        // Carrier lines meet at (3, 0), beyond the first segment.
        let hit = robust_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(3.0, -1.0), &p(3.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn touching_at_endpoint() {
        let hit = robust_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn parallel_not_collinear() {
        let hit = robust_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn collinear_overlap_returns_first_endpoint_in_range() {
        let a0 = p(0.0, 0.0);
        let a1 = p(1.0, 0.0);
        let b0 = p(0.5, 0.0);
        let b1 = p(1.5, 0.0);
        // q1 = (0.5, 0) lies on the first segment.
        let hit = robust_intersect(&a0, &a1, &b0, &b1).unwrap();
        assert_abs_diff_eq!(hit.x, 0.5, epsilon = TOLERANCE);
        // Swapped roles: q1 = (1, 0) now lies on the first segment.
        let hit = robust_intersect(&b0, &b1, &a1, &a0).unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn collinear_without_overlap() {
        let hit = robust_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0));
        assert!(hit.is_none());
    }

    #[test]
    fn zero_length_segment_on_other() {
        let hit = robust_intersect(&p(0.5, 0.0), &p(0.5, 0.0), &p(0.0, 0.0), &p(1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 0.5, epsilon = TOLERANCE);
        let miss = robust_intersect(&p(0.5, 1.0), &p(0.5, 1.0), &p(0.0, 0.0), &p(1.0, 0.0));
        assert!(miss.is_none());
    }

    #[test]
    fn find_intersections_crossing_squares() {
        let a = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let b = vec![p(1.0, 1.0), p(3.0, 1.0), p(3.0, 3.0), p(1.0, 3.0)];
        let hits = find_intersections(&a, &b);
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            let on_corner = points_coincide(&hit.point, &p(2.0, 1.0))
                || points_coincide(&hit.point, &p(1.0, 2.0));
            assert!(on_corner, "unexpected hit {:?}", hit.point);
        }
        let right = hits.iter().find(|h| h.seg_a == 1).unwrap();
        assert_abs_diff_eq!(right.t_a, 0.5, epsilon = TOLERANCE);
        assert_eq!(right.seg_b, 0);
        assert_abs_diff_eq!(right.t_b, 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn find_intersections_reports_both_overlap_ends() {
        let a0 = p(0.0, 0.0);
        let a1 = p(1.0, 0.0);
        let b = vec![p(0.5, 0.0), p(1.5, 0.0), p(1.5, 1.0)];
        let a = vec![a0, a1, p(1.0, 1.0)];
        let hits = find_intersections(&a, &b);
        let on_bottom: Vec<_> = hits.iter().filter(|h| h.seg_a == 0 && h.seg_b == 0).collect();
        assert_eq!(on_bottom.len(), 2);
    }

    #[test]
    fn find_intersections_disjoint() {
        let a = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        let b = vec![p(5.0, 5.0), p(6.0, 5.0), p(6.0, 6.0)];
        assert!(find_intersections(&a, &b).is_empty());
    }
}
