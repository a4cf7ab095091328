#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPS: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// A curve whose control points all sit on the x-axis, so it degenerates to
/// the segment (0,0)-(3,0) with an exactly known length.
fn straight_curve() -> CubicBezierCurve {
    CubicBezierCurve::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(1.0, 0.0),
        Vertex::new(2.0, 0.0),
        Vertex::new(3.0, 0.0),
    )
}

fn arch_curve() -> CubicBezierCurve {
    CubicBezierCurve::new(
        Vertex::new(0.0, 0.0),
        Vertex::new(1.0, 2.0),
        Vertex::new(3.0, 2.0),
        Vertex::new(4.0, 0.0),
    )
}

fn two_curve_path() -> BezierPath {
    BezierPath::new(vec![
        straight_curve(),
        CubicBezierCurve::new(
            Vertex::new(3.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(5.0, 0.0),
            Vertex::new(6.0, 0.0),
        ),
    ])
}

// =============================================================
// CubicBezierCurve: evaluation
// =============================================================

#[test]
fn point_at_endpoints() {
    let c = arch_curve();
    assert!(c.point_at(0.0).approx_eq(c.start, EPS));
    assert!(c.point_at(1.0).approx_eq(c.end, EPS));
}

#[test]
fn point_at_midpoint_of_straight_curve() {
    assert!(straight_curve().point_at(0.5).approx_eq(Vertex::new(1.5, 0.0), EPS));
}

#[test]
fn point_at_is_symmetric_for_symmetric_curve() {
    let c = arch_curve();
    let p1 = c.point_at(0.25);
    let p2 = c.point_at(0.75);
    assert!(approx_eq(p1.y, p2.y));
    assert!(approx_eq(p1.x + p2.x, 4.0));
}

#[test]
fn tangent_at_start_points_toward_first_control() {
    let c = arch_curve();
    let t = c.tangent_at(0.0);
    // Derivative at t=0 is 3 * (start_control - start).
    assert!(t.approx_eq(Vertex::new(3.0, 6.0), EPS));
}

#[test]
fn tangent_at_end_points_from_last_control() {
    let c = arch_curve();
    let t = c.tangent_at(1.0);
    assert!(t.approx_eq(Vertex::new(3.0, -6.0), EPS));
}

// =============================================================
// CubicBezierCurve: length and bounds
// =============================================================

#[test]
fn arc_length_of_straight_curve() {
    assert!(approx_eq(straight_curve().arc_length(32), 3.0));
}

#[test]
fn arc_length_increases_with_resolution() {
    let c = arch_curve();
    let coarse = c.arc_length(2);
    let fine = c.arc_length(64);
    assert!(fine >= coarse);
}

#[test]
fn arc_length_zero_steps_is_clamped_to_one() {
    let c = straight_curve();
    assert!(approx_eq(c.arc_length(0), 3.0));
}

#[test]
fn bounds_contain_endpoints() {
    let b = arch_curve().bounds();
    assert!(b.contains(Vertex::new(0.0, 0.0)));
    assert!(b.contains(Vertex::new(4.0, 0.0)));
    // The arch rises above the baseline but stays under the control hull.
    assert!(b.max.y > 1.0 && b.max.y <= 2.0);
}

// =============================================================
// BezierPath: length and global parameter
// =============================================================

#[test]
fn total_length_sums_curves() {
    assert!(approx_eq(two_curve_path().total_length(), 6.0));
}

#[test]
fn empty_path_has_zero_length_and_origin_point() {
    let path = BezierPath::default();
    assert_eq!(path.total_length(), 0.0);
    assert_eq!(path.point_at(0.5), Vertex::default());
}

#[test]
fn point_at_global_endpoints() {
    let path = two_curve_path();
    assert!(path.point_at(0.0).approx_eq(Vertex::new(0.0, 0.0), EPS));
    assert!(path.point_at(1.0).approx_eq(Vertex::new(6.0, 0.0), EPS));
}

#[test]
fn point_at_half_is_the_join() {
    let path = two_curve_path();
    assert!(path.point_at(0.5).approx_eq(Vertex::new(3.0, 0.0), EPS));
}

#[test]
fn point_at_clamps_t() {
    let path = two_curve_path();
    assert!(path.point_at(-1.0).approx_eq(Vertex::new(0.0, 0.0), EPS));
    assert!(path.point_at(2.0).approx_eq(Vertex::new(6.0, 0.0), EPS));
}

// =============================================================
// BezierPath: flat point addressing
// =============================================================

#[test]
fn point_count_is_three_per_curve_plus_one() {
    assert_eq!(two_curve_path().point_count(), 7);
    assert_eq!(BezierPath::default().point_count(), 0);
}

#[test]
fn point_indexing_order() {
    let path = two_curve_path();
    assert_eq!(path.point(0), Some(Vertex::new(0.0, 0.0))); // start
    assert_eq!(path.point(1), Some(Vertex::new(1.0, 0.0))); // start control
    assert_eq!(path.point(2), Some(Vertex::new(2.0, 0.0))); // end control
    assert_eq!(path.point(3), Some(Vertex::new(3.0, 0.0))); // join
    assert_eq!(path.point(6), Some(Vertex::new(6.0, 0.0))); // trailing end
    assert_eq!(path.point(7), None);
}

#[test]
fn move_point_on_handle_moves_only_that_handle() {
    let mut path = two_curve_path();
    path.move_point(1, Vertex::new(1.0, 5.0));
    assert_eq!(path.curves[0].start_control, Vertex::new(1.0, 5.0));
    assert_eq!(path.curves[0].start, Vertex::new(0.0, 0.0));
    assert_eq!(path.curves[0].end_control, Vertex::new(2.0, 0.0));
}

#[test]
fn move_join_point_keeps_curves_connected() {
    let mut path = two_curve_path();
    path.move_point(3, Vertex::new(3.0, 2.0));
    assert_eq!(path.curves[0].end, Vertex::new(3.0, 2.0));
    assert_eq!(path.curves[1].start, Vertex::new(3.0, 2.0));
}

#[test]
fn move_join_point_drags_adjacent_handles() {
    let mut path = two_curve_path();
    path.move_point(3, Vertex::new(4.0, 1.0)); // delta (1, 1)
    assert_eq!(path.curves[0].end_control, Vertex::new(3.0, 1.0));
    assert_eq!(path.curves[1].start_control, Vertex::new(5.0, 1.0));
}

#[test]
fn move_path_start_drags_its_handle() {
    let mut path = two_curve_path();
    path.move_point(0, Vertex::new(-1.0, 1.0)); // delta (-1, 1)
    assert_eq!(path.curves[0].start, Vertex::new(-1.0, 1.0));
    assert_eq!(path.curves[0].start_control, Vertex::new(0.0, 1.0));
}

#[test]
fn move_trailing_end_drags_its_handle() {
    let mut path = two_curve_path();
    path.move_point(6, Vertex::new(7.0, -1.0)); // delta (1, -1)
    assert_eq!(path.curves[1].end, Vertex::new(7.0, -1.0));
    assert_eq!(path.curves[1].end_control, Vertex::new(6.0, -1.0));
}

#[test]
fn move_point_out_of_range_is_ignored() {
    let mut path = two_curve_path();
    let before = path.clone();
    path.move_point(99, Vertex::new(0.0, 0.0));
    assert_eq!(path, before);
}

// =============================================================
// BezierPath: bounds and translate
// =============================================================

#[test]
fn path_bounds_union_member_curves() {
    let b = two_curve_path().bounds();
    assert!(b.contains(Vertex::new(0.0, 0.0)));
    assert!(b.contains(Vertex::new(6.0, 0.0)));
}

#[test]
fn translate_shifts_every_point() {
    let mut path = two_curve_path();
    path.translate(1.0, 2.0);
    assert_eq!(path.curves[0].start, Vertex::new(1.0, 2.0));
    assert_eq!(path.curves[1].end, Vertex::new(7.0, 2.0));
    assert!(approx_eq(path.total_length(), 6.0));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serde_round_trip() {
    let path = two_curve_path();
    let json = serde_json::to_string(&path).unwrap();
    let back: BezierPath = serde_json::from_str(&json).unwrap();
    assert_eq!(path, back);
}
