//! Segments derived from an existing line: perpendiculars, parallels and
//! extensions.

mod extension;
mod parallel;
mod perpendicular;

pub use extension::extension_points;
pub use parallel::parallel_segment;
pub use perpendicular::vertical_segment;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::{add, div, multi, round, sub, COORDINATE_DIGITS, SLOPE_DIGITS};

/// Returns the two points on `y = slope * x + intercept` lying `distance`
/// away from the point of the line at `x`, lower x first.
///
/// The x-offset is rounded to [`SLOPE_DIGITS`], coordinates to
/// [`COORDINATE_DIGITS`].
fn points_along(x: f64, slope: f64, intercept: f64, distance: f64) -> Result<Segment> {
    let norm = add(&[1.0, multi(&[slope, slope])?])?.sqrt();
    let run = round(div(&[distance, norm])?, SLOPE_DIGITS)?;

    let x1 = round(sub(&[x, run])?, COORDINATE_DIGITS)?;
    let x2 = round(add(&[x, run])?, COORDINATE_DIGITS)?;
    Ok(Segment::from_coords(
        x1,
        y_on(slope, intercept, x1)?,
        x2,
        y_on(slope, intercept, x2)?,
    ))
}

fn y_on(slope: f64, intercept: f64, x: f64) -> Result<f64> {
    round(add(&[multi(&[slope, x])?, intercept])?, COORDINATE_DIGITS)
}

/// Returns the segment `(x, y - half) → (x, y + half)`.
fn vertical_through(x: f64, y: f64, half: f64) -> Result<Segment> {
    Ok(Segment::from_coords(x, sub(&[y, half])?, x, add(&[y, half])?))
}
