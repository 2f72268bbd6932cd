#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use decigeo::math::DEFAULT_ON_LINE_TOLERANCE;
use decigeo::operations::construct::{extension_points, parallel_segment, vertical_segment};
use decigeo::operations::query::{
    angle, closest_line_idx, closest_point_idx, line_cross, point_on_line, x_from_y, y_from_x,
};
use decigeo::{LineEquation, Point2, Segment};

#[test]
fn line_equations() {
    let vertical = Segment::from([[2.0, 0.0], [2.0, 5.0]]);
    let equation = LineEquation::from_segment(&vertical).unwrap();
    assert_eq!(equation, LineEquation::Vertical);

    let diagonal = Segment::from([[0.0, 0.0], [2.0, 2.0]]);
    assert_eq!(
        LineEquation::from_segment(&diagonal).unwrap(),
        LineEquation::Sloped {
            slope: 1.0,
            intercept: 0.0
        }
    );
}

#[test]
fn crossing_and_touching() {
    let cross = |a: [[f64; 2]; 2], b: [[f64; 2]; 2]| line_cross(&a.into(), &b.into()).unwrap();
    assert_eq!(
        cross([[0.0, 0.0], [2.0, 2.0]], [[0.0, 2.0], [2.0, 0.0]]),
        Some(Point2::new(1.0, 1.0))
    );
    let parallel = [[0.0, 1.0], [1.0, 1.0]];
    assert_eq!(cross([[0.0, 0.0], [1.0, 0.0]], parallel), None);
    let touching = [[1.0, 1.0], [2.0, 0.0]];
    assert_eq!(cross([[0.0, 0.0], [1.0, 1.0]], touching), None);
}

#[test]
fn nearest_point() {
    let origin = Point2::origin();
    let pts = [Point2::new(0.0, 0.0), Point2::new(10.0, 10.0)];
    assert_eq!(closest_point_idx(&origin, &pts, 1.0).unwrap(), Some(0));
    let far = [Point2::new(1.0, 1.0)];
    assert_eq!(closest_point_idx(&origin, &far, 0.5).unwrap(), None);
}

#[test]
fn point_on_diagonal() {
    let diagonal = Segment::from([[0.0, 0.0], [2.0, 2.0]]);
    let on = |x, y, t| point_on_line(&Point2::new(x, y), &diagonal, t).unwrap();
    assert!(on(1.0, 1.0, DEFAULT_ON_LINE_TOLERANCE));
    assert!(!on(1.0, 1.5, 0.01));
    assert!(on(1.0, 1.5, 0.5));
}

#[test]
fn perpendicular_then_cross_recovers_foot() {
    // A perpendicular through a point of the line crosses the line at that point.
    let line = Segment::from([[0.0, 0.0], [4.0, 3.0]]);
    let foot = Point2::new(2.0, 1.5);
    let normal = vertical_segment(&foot, &line, 5.0).unwrap();
    let hit = line_cross(&line, &normal).unwrap().unwrap();
    assert_abs_diff_eq!(hit.x, foot.x, epsilon = 1e-3);
    assert_abs_diff_eq!(hit.y, foot.y, epsilon = 1e-3);
}

#[test]
fn parallel_keeps_angle() {
    let line = Segment::from([[0.0, 0.0], [4.0, 3.0]]);
    let parallel = parallel_segment(&Point2::new(1.0, 5.0), &line, 10.0).unwrap();
    assert_abs_diff_eq!(
        angle(&parallel).unwrap(),
        angle(&line).unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn extension_stays_on_line() {
    let line = Segment::from([[0.0, 0.0], [4.0, 3.0]]);
    let ext = extension_points(&Point2::new(2.0, 1.5), &line, 2.5).unwrap();
    for p in [ext.start, ext.end] {
        assert_eq!(y_from_x(p.x, &line).unwrap(), Some(p.y));
        assert_eq!(x_from_y(p.y, &line).unwrap(), Some(p.x));
    }
}

#[test]
fn nearest_line_uses_infinite_extent() {
    let lines = [
        Segment::from([[0.0, 5.0], [10.0, 5.0]]),
        Segment::from([[50.0, 51.0], [60.0, 61.0]]),
    ];
    // The second segment is far away but its line y = x + 1 passes close by.
    let origin = Point2::origin();
    assert_eq!(closest_line_idx(&origin, &lines, 1.0).unwrap(), Some(1));
}
