use super::{points_along, vertical_through};
use crate::error::Result;
use crate::geometry::{LineEquation, Segment};
use crate::math::validate::{ensure_finite, ensure_point, ensure_segment};
use crate::math::{div, multi, round, sub, Point2, SLOPE_DIGITS};

const OPERATION: &str = "parallel_segment";

/// Builds a segment of `length` centred on `point` and parallel to `segment`.
///
/// # Errors
///
/// Returns an error if any coordinate or `length` is not finite.
pub fn parallel_segment(point: &Point2, segment: &Segment, length: f64) -> Result<Segment> {
    ensure_point(OPERATION, "point", point)?;
    ensure_segment(OPERATION, "segment", segment)?;
    ensure_finite(OPERATION, "length", length)?;

    let half = div(&[length, 2.0])?;
    match LineEquation::from_segment(segment)? {
        LineEquation::Sloped { slope, .. } => {
            let intercept = round(sub(&[point.y, multi(&[slope, point.x])?])?, SLOPE_DIGITS)?;
            points_along(point.x, slope, intercept, half)
        }
        LineEquation::Vertical => vertical_through(point.x, point.y, half),
    }
}
