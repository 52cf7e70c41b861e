use crate::math::Point2;

use super::cleanup::cleanup;
use super::sets::{intersect_sets, subtract_sets, union_sets, xor_sets};

type SetOp = fn(&[Vec<Point2>], &[Vec<Point2>]) -> Vec<Vec<Point2>>;

/// Folds a pairwise set operator left to right across `sets`.
///
/// The result depends on the order of `sets` when more than two of them
/// overlap each other.
fn fold_sets(sets: &[Vec<Vec<Point2>>], op: SetOp) -> Vec<Vec<Point2>> {
    let Some((first, rest)) = sets.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .fold(cleanup(first.clone()), |acc, next| op(&acc, next))
}

/// Unions any number of polyline sets.
#[must_use]
pub fn union_all(sets: &[Vec<Vec<Point2>>]) -> Vec<Vec<Point2>> {
    fold_sets(sets, union_sets)
}

/// Subtracts every following set from the first.
#[must_use]
pub fn subtract_all(sets: &[Vec<Vec<Point2>>]) -> Vec<Vec<Point2>> {
    fold_sets(sets, subtract_sets)
}

/// Intersects any number of polyline sets.
#[must_use]
pub fn intersect_all(sets: &[Vec<Vec<Point2>>]) -> Vec<Vec<Point2>> {
    fold_sets(sets, intersect_sets)
}

/// Folds the symmetric difference across any number of polyline sets.
#[must_use]
pub fn xor_all(sets: &[Vec<Vec<Point2>>]) -> Vec<Vec<Point2>> {
    fold_sets(sets, xor_sets)
}
