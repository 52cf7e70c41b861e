use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{
    contains_point, dedup_ring, is_closed, orient, signed_area, winding, Winding,
};
use crate::math::{points_coincide, Point2};

/// An ordered sequence of 2D points, optionally asserted closed by the caller.
///
/// A contour is closed when `closed` is set or when its first and last points
/// coincide. Closed contours include the implicit edge from the last point
/// back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Contour {
    /// Creates a contour from raw points and an explicit closure flag.
    #[must_use]
    pub fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a closed contour, rejecting rings with fewer than three
    /// distinct points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the deduplicated ring has fewer
    /// than three points.
    pub fn closed_checked(points: Vec<Point2>) -> Result<Self> {
        let distinct = dedup_ring(&points).len();
        if distinct < 3 {
            return Err(GeometryError::Degenerate(format!(
                "closed contour needs at least 3 distinct points, got {distinct}"
            ))
            .into());
        }
        Ok(Self {
            points,
            closed: true,
        })
    }

    /// Returns `true` if the contour is asserted closed or its endpoints
    /// coincide.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed || is_closed(&self.points)
    }

    /// Returns an error unless the contour is closed.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ContourNotClosed` for open contours.
    pub fn ensure_closed(&self) -> Result<()> {
        if self.is_closed() {
            Ok(())
        } else {
            Err(GeometryError::ContourNotClosed.into())
        }
    }

    /// Returns the ring with duplicate and closing points removed.
    #[must_use]
    pub fn ring(&self) -> Vec<Point2> {
        dedup_ring(&self.points)
    }

    /// Signed area (positive for counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding of the contour, `None` for zero area.
    #[must_use]
    pub fn winding(&self) -> Option<Winding> {
        winding(&self.points)
    }

    /// Returns the contour with the requested winding.
    #[must_use]
    pub fn oriented(&self, target: Winding) -> Self {
        Self {
            points: orient(&self.points, target),
            closed: self.closed,
        }
    }

    /// Returns a new contour with the point order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
            closed: self.closed,
        }
    }

    /// Returns `true` if `point` is inside this contour and outside every
    /// hole. Boundary points count as inside.
    #[must_use]
    pub fn contains(&self, point: &Point2, holes: &[Vec<Point2>]) -> bool {
        contains_point(&self.points, point, holes)
    }
}

impl From<Vec<Point2>> for Contour {
    /// Builds a contour whose closure is inferred from its endpoints.
    fn from(points: Vec<Point2>) -> Self {
        let closed = is_closed(&points);
        Self { points, closed }
    }
}

/// Returns `true` if two closed polylines describe the same cyclic sequence
/// of points, regardless of starting index and traversal direction.
#[must_use]
pub fn are_polylines_identical(a: &[Point2], b: &[Point2]) -> bool {
    let a = dedup_ring(a);
    let b = dedup_ring(b);
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }

    (0..n)
        .filter(|&k| points_coincide(&a[0], &b[k]))
        .any(|k| {
            let forward = (0..n).all(|i| points_coincide(&a[i], &b[(k + i) % n]));
            forward || (0..n).all(|i| points_coincide(&a[i], &b[(k + n - i) % n]))
        })
}
