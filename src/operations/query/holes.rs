use crate::geometry::Contour;
use crate::math::polygon_2d::all_points_inside;

/// Groups closed contours into outer boundaries and the holes inside them.
///
/// Contour `i` is a hole of contour `j` when its area is strictly smaller
/// and every one of its points lies inside or on `j`. Open contours are
/// ignored.
pub struct FindHoles<'a> {
    contours: &'a [Contour],
}

impl<'a> FindHoles<'a> {
    /// Creates a new `FindHoles` query.
    #[must_use]
    pub fn new(contours: &'a [Contour]) -> Self {
        Self { contours }
    }

    /// Executes the query.
    ///
    /// Returns one `(outer, holes)` entry per closed contour that is not a
    /// hole of any other, in input order, with `holes` sorted ascending.
    #[must_use]
    pub fn execute(&self) -> Vec<(usize, Vec<usize>)> {
        let closed: Vec<(usize, f64)> = self
            .contours
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_closed())
            .map(|(i, c)| (i, c.area()))
            .collect();

        let is_hole_of = |i: usize, area_i: f64, j: usize, area_j: f64| {
            i != j
                && area_i < area_j
                && all_points_inside(&self.contours[i].points, &self.contours[j].points)
        };

        let mut result = Vec::new();
        for &(j, area_j) in &closed {
            let contained = closed
                .iter()
                .any(|&(k, area_k)| is_hole_of(j, area_j, k, area_k));
            if contained {
                continue;
            }
            let holes: Vec<usize> = closed
                .iter()
                .filter(|&&(i, area_i)| is_hole_of(i, area_i, j, area_j))
                .map(|&(i, _)| i)
                .collect();
            result.push((j, holes));
        }
        result
    }
}
