use std::collections::HashSet;

use tracing::trace;

use crate::math::polygon_2d::{canonical_key, dedup_ring};
use crate::math::Point2;

/// Normalizes a batch result.
///
/// Removes consecutive duplicate points, drops rings left with fewer than
/// three points and keeps only the first of any rings made of the same
/// points, whatever their start index or direction.
#[must_use]
pub fn cleanup(paths: Vec<Vec<Point2>>) -> Vec<Vec<Point2>> {
    let before = paths.len();
    let mut seen: HashSet<Vec<(i64, i64)>> = HashSet::new();
    let cleaned: Vec<Vec<Point2>> = paths
        .iter()
        .map(|path| dedup_ring(path))
        .filter(|ring| ring.len() >= 3)
        .filter(|ring| seen.insert(canonical_key(ring)))
        .collect();
    trace!(before, after = cleaned.len(), "cleaned up batch result");
    cleaned
}
