use super::{points_along, vertical_through};
use crate::error::Result;
use crate::geometry::{LineEquation, Segment};
use crate::math::validate::{ensure_finite, ensure_point, ensure_segment};
use crate::math::Point2;

const OPERATION: &str = "extension_points";

/// Returns the two points of `segment`'s line at distance `length` from
/// `point`, which is expected to lie on that line.
///
/// For sloped lines the y-coordinates come from the segment's own equation,
/// so a `point` off the line is projected vertically onto it.
///
/// # Errors
///
/// Returns an error if any coordinate or `length` is not finite.
pub fn extension_points(point: &Point2, segment: &Segment, length: f64) -> Result<Segment> {
    ensure_point(OPERATION, "point", point)?;
    ensure_segment(OPERATION, "segment", segment)?;
    ensure_finite(OPERATION, "length", length)?;

    match LineEquation::from_segment(segment)? {
        LineEquation::Sloped { slope, intercept } => {
            points_along(point.x, slope, intercept, length)
        }
        LineEquation::Vertical => vertical_through(point.x, point.y, length),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn extend_sloped_line() {
        let line = Segment::from_coords(0.0, 0.0, 4.0, 3.0);
        let s = extension_points(&Point2::new(2.0, 1.5), &line, 2.5).unwrap();
        assert_eq!(s, Segment::from_coords(0.0, 0.0, 4.0, 3.0));
    }

    #[test]
    fn extend_vertical_line_by_full_length() {
        let vertical = Segment::from_coords(1.0, 0.0, 1.0, 10.0);
        let s = extension_points(&Point2::new(1.0, 5.0), &vertical, 2.0).unwrap();
        assert_eq!(s, Segment::from_coords(1.0, 3.0, 1.0, 7.0));
    }

    #[test]
    fn extend_horizontal_line() {
        let horizontal = Segment::from_coords(0.0, -1.0, 3.0, -1.0);
        let s = extension_points(&Point2::new(0.5, -1.0), &horizontal, 1.25).unwrap();
        assert_eq!(s, Segment::from_coords(-0.75, -1.0, 1.75, -1.0));
    }
}
