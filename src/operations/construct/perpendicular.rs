use super::{points_along, vertical_through};
use crate::error::Result;
use crate::geometry::{LineEquation, Segment};
use crate::math::validate::{ensure_finite, ensure_point, ensure_segment};
use crate::math::{add, div, multi, round, sub, Point2, SLOPE_DIGITS};

const OPERATION: &str = "vertical_segment";

/// Builds a segment of `length` centred on `point` and perpendicular to
/// `segment`.
///
/// - Sloped line: the perpendicular slope is `-1 / slope`, rounded to
///   [`SLOPE_DIGITS`]; endpoints are rounded to three digits.
/// - Horizontal line: the result is vertical.
/// - Vertical line: the result is horizontal.
///
/// # Errors
///
/// Returns an error if any coordinate or `length` is not finite.
#[allow(clippy::float_cmp)]
pub fn vertical_segment(point: &Point2, segment: &Segment, length: f64) -> Result<Segment> {
    ensure_point(OPERATION, "point", point)?;
    ensure_segment(OPERATION, "segment", segment)?;
    ensure_finite(OPERATION, "length", length)?;

    let half = div(&[length, 2.0])?;
    match LineEquation::from_segment(segment)? {
        LineEquation::Sloped { slope, .. } if slope != 0.0 => {
            let normal_slope = round(-div(&[1.0, slope])?, SLOPE_DIGITS)?;
            let intercept = round(
                sub(&[point.y, multi(&[normal_slope, point.x])?])?,
                SLOPE_DIGITS,
            )?;
            points_along(point.x, normal_slope, intercept, half)
        }
        LineEquation::Sloped { .. } => vertical_through(point.x, point.y, half),
        LineEquation::Vertical => Ok(Segment::from_coords(
            sub(&[point.x, half])?,
            point.y,
            add(&[point.x, half])?,
            point.y,
        )),
    }
}
