use cutpath_core::geometry::{sample, CubicBezier, LineSegment, Point2};
use proptest::prelude::*;

fn close(a: Point2, b: Point2) -> bool {
    (a.x - b.x).abs() < 1e-9 * (1.0 + a.x.abs().max(b.x.abs()))
        && (a.y - b.y).abs() < 1e-9 * (1.0 + a.y.abs().max(b.y.abs()))
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4
}

fn point() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| Point2::new(x, y))
}

#[test]
fn test_line_midpoint() {
    let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0));
    let mid = line.point_on(0.5);
    assert!((mid.x - 1.0).abs() < 0.01);
    assert!((mid.y - 2.0).abs() < 0.01);
}

#[test]
fn test_line_extrapolates() {
    let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
    assert_eq!(line.point_on(2.0), Point2::new(2.0, 0.0));
    assert_eq!(line.point_on(-1.0), Point2::new(-1.0, 0.0));
}

#[test]
fn test_bezier_degenerate_points() {
    let p = Point2::new(3.0, -1.0);
    let curve = CubicBezier::new(p, p, p, p);
    assert!(close(curve.point_on(0.37), p));
}

#[test]
fn test_bezier_midpoint_of_straight_curve() {
    let curve = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(3.0, 0.0),
    );
    let mid = curve.point_on(0.5);
    assert!((mid.x - 1.5).abs() < 0.01);
    assert!(mid.y.abs() < 0.01);
    assert!((curve.chord_length() - 3.0).abs() < 0.01);
}

#[test]
fn test_sample_count_and_ends() {
    let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    let points: Vec<_> = sample(50, |t| line.point_on(t)).collect();
    assert_eq!(points.len(), 51);
    assert_eq!(points[0], line.start);
    assert_eq!(points[50], line.end);
}

proptest! {
    #[test]
    fn line_endpoints_are_exact(start in point(), end in point()) {
        let line = LineSegment::new(start, end);
        prop_assert_eq!(line.point_on(0.0), start);
        prop_assert!(close(line.point_on(1.0), end));
    }

    #[test]
    fn bezier_endpoints_are_exact(p0 in point(), p1 in point(), p2 in point(), p3 in point()) {
        let curve = CubicBezier::new(p0, p1, p2, p3);
        prop_assert_eq!(curve.point_on(0.0), p0);
        prop_assert_eq!(curve.point_on(1.0), p3);
    }
}
