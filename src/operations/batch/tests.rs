#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;

use super::*;
use crate::geometry::{are_polylines_identical, Contour};
use crate::math::polygon_2d::{contains_point, signed_area};
use crate::math::Point2;
use crate::operations::query::FindIslands;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn square(x: f64, y: f64, size: f64) -> Vec<Point2> {
    vec![
        p(x, y),
        p(x + size, y),
        p(x + size, y + size),
        p(x, y + size),
    ]
}

fn reversed(points: &[Point2]) -> Vec<Point2> {
    points.iter().rev().copied().collect()
}

fn total_area(paths: &[Vec<Point2>]) -> f64 {
    paths.iter().map(|path| signed_area(path)).sum()
}

fn samples(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2> {
    let steps = 8;
    let mut points = Vec::new();
    for i in 1..steps {
        for j in 1..steps {
            let tx = f64::from(i) / f64::from(steps);
            let ty = f64::from(j) / f64::from(steps);
            points.push(p(x0 + (x1 - x0) * tx, y0 + (y1 - y0) * ty));
        }
    }
    points
}

fn shapes() -> Vec<Vec<Point2>> {
    vec![
        square(0.0, 0.0, 1.0),
        vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)],
        vec![
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 3.0),
            p(0.0, 3.0),
        ],
    ]
}

#[test]
fn identity_holds_for_self_and_reverse() {
    for shape in shapes() {
        assert!(are_polylines_identical(&shape, &shape));
        assert!(are_polylines_identical(&shape, &reversed(&shape)));
    }
}

#[test]
fn subtracting_identical_sets_is_empty() {
    for shape in shapes() {
        let set = vec![shape];
        assert!(subtract_sets(&set, &set).is_empty());
    }
}

#[test]
fn xor_of_identical_sets_is_empty() {
    for shape in shapes() {
        let set = vec![shape.clone()];
        assert!(xor_sets(&set, &set).is_empty());
        assert!(xor_sets(&set, &[reversed(&shape)]).is_empty());
    }
}

#[test]
fn union_absorbs_contained_polyline() {
    let outer = vec![square(0.0, 0.0, 4.0)];
    let inner = vec![square(1.0, 1.0, 2.0)];
    let result = union_sets(&outer, &inner);
    assert_eq!(result.len(), 1);
    assert!(are_polylines_identical(&result[0], &outer[0]));
}

#[test]
fn disjoint_union_conserves_area() {
    let a = vec![square(0.0, 0.0, 1.0)];
    let b = vec![vec![p(3.0, 0.0), p(7.0, 0.0), p(5.0, 3.0)]];
    let result = union_sets(&a, &b);
    assert_eq!(result.len(), 2);
    assert_abs_diff_eq!(total_area(&result), 1.0 + 6.0, epsilon = 1e-9);
}

#[test]
fn winding_does_not_change_area_or_containment() {
    let points = [p(0.5, 0.5), p(2.0, 1.0), p(5.0, 5.0), p(0.0, 0.0), p(0.5, 2.5)];
    for shape in shapes() {
        let rev = reversed(&shape);
        assert_abs_diff_eq!(signed_area(&shape), -signed_area(&rev), epsilon = 1e-12);
        for sample in &points {
            assert_eq!(
                contains_point(&shape, sample, &[]),
                contains_point(&rev, sample, &[])
            );
        }
    }
}

#[test]
fn intersection_and_difference_rebuild_the_input() {
    let cases = [
        (square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)),
        (square(0.0, 0.0, 1.0), square(0.5, 0.0, 1.0)),
    ];
    for (a, b) in cases {
        let set_a = vec![a.clone()];
        let set_b = vec![b];
        let rebuilt = union_sets(
            &intersect_sets(&set_a, &set_b),
            &subtract_sets(&set_a, &set_b),
        );
        assert_abs_diff_eq!(total_area(&rebuilt), signed_area(&a), epsilon = 1e-9);

        let (x1, y1) = (a[2].x, a[2].y);
        for sample in samples(a[0].x, a[0].y, x1, y1) {
            assert!(
                rebuilt.iter().any(|r| contains_point(r, &sample, &[])),
                "{sample:?} lost in round trip"
            );
        }
    }
}

#[test]
fn offset_unit_squares() {
    let a = vec![square(0.0, 0.0, 1.0)];
    let b = vec![square(0.5, 0.0, 1.0)];
    assert_abs_diff_eq!(total_area(&intersect_sets(&a, &b)), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(total_area(&union_sets(&a, &b)), 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(total_area(&subtract_sets(&a, &b)), 0.5, epsilon = 1e-9);
}

#[test]
fn contained_square_union_and_difference() {
    let outer = vec![square(0.0, 0.0, 4.0)];
    let inner = vec![square(1.0, 1.0, 2.0)];

    let union = union_sets(&outer, &inner);
    assert_eq!(union.len(), 1);
    assert!(are_polylines_identical(&union[0], &outer[0]));

    let diff = subtract_sets(&outer, &inner);
    assert_eq!(diff.len(), 2);
    let contours: Vec<Contour> = diff
        .iter()
        .map(|points| Contour::new(points.clone(), true))
        .collect();
    let outer_contour = &contours[0];
    let holes = vec![contours[1].points.clone()];
    assert!(outer_contour.contains(&p(0.5, 0.5), &holes));
    assert!(!outer_contour.contains(&p(2.0, 2.0), &holes));
}

#[test]
fn squares_sharing_an_edge() {
    let a = vec![square(0.0, 0.0, 1.0)];
    let b = vec![square(1.0, 0.0, 1.0)];
    assert!(intersect_sets(&a, &b).is_empty());

    let union = union_sets(&a, &b);
    assert_eq!(union.len(), 1);
    assert_abs_diff_eq!(signed_area(&union[0]), 2.0, epsilon = 1e-9);
    for sample in samples(0.0, 0.0, 2.0, 1.0) {
        assert!(contains_point(&union[0], &sample, &[]));
    }
}

#[test]
fn island_threshold_in_square_centimetres() {
    let contours = vec![
        Contour::new(vec![p(0.0, 0.0), p(5.0, 0.0), p(5.0, 2.0), p(0.0, 2.0)], true),
        Contour::new(vec![p(8.0, 0.0), p(8.5, 0.0), p(8.5, 0.6), p(8.0, 0.6)], true),
    ];
    assert_eq!(FindIslands::new(1.0).unwrap().execute(&contours), vec![1]);
}

#[test]
fn repeated_runs_agree() {
    let a = vec![square(0.0, 0.0, 2.0)];
    let b = vec![vec![p(1.0, -1.0), p(4.0, 1.0), p(1.0, 3.0)]];
    let first = union_sets(&a, &b);
    let second = union_sets(&a, &b);
    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(&second) {
        assert!(are_polylines_identical(x, y));
    }
}

#[test]
fn ring_hole_is_not_filled() {
    let ring = subtract_sets(&[square(0.0, 0.0, 4.0)], &[square(1.0, 1.0, 2.0)]);
    assert_eq!(ring.len(), 2);
    assert!(signed_area(&ring[0]) > 0.0);
    assert!(signed_area(&ring[1]) < 0.0);
    assert_abs_diff_eq!(total_area(&ring), 12.0, epsilon = 1e-9);

    let inside_hole = vec![square(1.5, 1.5, 1.0)];
    assert!(intersect_sets(&ring, &inside_hole).is_empty());
    assert!(intersect_sets(&inside_hole, &ring).is_empty());

    // Half in the hole, half on the ring.
    let straddling = vec![vec![p(0.5, 1.5), p(1.5, 1.5), p(1.5, 2.5), p(0.5, 2.5)]];
    assert_abs_diff_eq!(total_area(&intersect_sets(&ring, &straddling)), 0.5, epsilon = 1e-9);

    let with_island = union_sets(&ring, &inside_hole);
    assert_eq!(with_island.len(), 3);
    assert_abs_diff_eq!(total_area(&with_island), 12.0 + 1.0, epsilon = 1e-9);
    for sample in [p(0.5, 0.5), p(2.0, 2.0)] {
        assert!(with_island.iter().any(|r| contains_point(r, &sample, &[])));
    }
}

#[test]
fn subtracting_a_ring_spares_its_hole() {
    let ring = subtract_sets(&[square(0.0, 0.0, 4.0)], &[square(1.0, 1.0, 2.0)]);
    let plate = vec![square(-1.0, -1.0, 6.0)];
    let left = subtract_sets(&plate, &ring);
    assert_abs_diff_eq!(total_area(&left), 36.0 - 12.0, epsilon = 1e-9);
    assert_eq!(subtract_sets(&[square(1.5, 1.5, 1.0)], &ring).len(), 1);
}

#[test]
fn overlapping_cuts_share_one_hole() {
    let cut = subtract_sets(
        &[square(0.0, 0.0, 10.0)],
        &[square(2.0, 2.0, 2.0), square(3.0, 3.0, 2.0)],
    );
    assert_eq!(cut.len(), 2);
    assert_abs_diff_eq!(signed_area(&cut[0]), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(signed_area(&cut[1]), -7.0, epsilon = 1e-9);
    for sample in [p(3.5, 3.5), p(2.5, 2.5), p(4.5, 4.5)] {
        assert!(!Contour::new(cut[0].clone(), true).contains(&sample, &cut[1..]));
    }
}

fn u_shape() -> Vec<Point2> {
    vec![
        p(0.0, 0.0),
        p(3.0, 0.0),
        p(3.0, 4.0),
        p(2.0, 4.0),
        p(2.0, 1.0),
        p(1.0, 1.0),
        p(1.0, 4.0),
        p(0.0, 4.0),
    ]
}

fn bar() -> Vec<Point2> {
    vec![p(-1.0, 2.0), p(4.0, 2.0), p(4.0, 3.0), p(-1.0, 3.0)]
}

#[test]
fn u_shape_and_bar_as_sets() {
    let u = vec![u_shape()];
    let b = vec![bar()];

    let both = intersect_sets(&u, &b);
    assert_eq!(both.len(), 2);
    assert_abs_diff_eq!(total_area(&both), 2.0, epsilon = 1e-9);

    let gaps = subtract_sets(&b, &u);
    assert_eq!(gaps.len(), 3);
    assert_abs_diff_eq!(total_area(&gaps), 3.0, epsilon = 1e-9);

    let union = union_sets(&u, &b);
    assert_eq!(union.len(), 2);
    assert_abs_diff_eq!(signed_area(&union[0]), 13.0, epsilon = 1e-9);
    assert_abs_diff_eq!(signed_area(&union[1]), -1.0, epsilon = 1e-9);
    // The pocket below the bar is a hole, not part of the union.
    let hole = vec![union[1].clone()];
    assert!(!Contour::new(union[0].clone(), true).contains(&p(1.5, 1.5), &hole));
    assert!(Contour::new(union[0].clone(), true).contains(&p(1.5, 2.5), &hole));
}
