use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::validate::ensure_segment;
use crate::math::{div, multi, sub};

/// Returns the direction of `segment` in degrees, in `(-180, 180]`.
///
/// The angle is `atan2(x1 - x2, y1 - y2)`: measured from the axis pointing
/// from `end` towards `start` along y, with the x-difference in the first
/// slot. Callers rely on this exact convention.
///
/// # Errors
///
/// Returns an error if any endpoint coordinate is not finite.
pub fn angle(segment: &Segment) -> Result<f64> {
    ensure_segment("angle", "segment", segment)?;
    let (p1, p2) = (segment.start, segment.end);
    let radians = sub(&[p1.x, p2.x])?.atan2(sub(&[p1.y, p2.y])?);
    div(&[multi(&[radians, 180.0])?, PI])
}
