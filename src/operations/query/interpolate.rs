use crate::error::Result;
use crate::geometry::{LineEquation, Segment};
use crate::math::validate::{ensure_finite, ensure_segment};

/// Returns the y-coordinate of `segment`'s infinite line at `x`, rounded to
/// three digits, or `None` if the line is vertical.
///
/// # Errors
///
/// Returns an error if `x` or any endpoint coordinate is not finite.
pub fn y_from_x(x: f64, segment: &Segment) -> Result<Option<f64>> {
    ensure_finite("y_from_x", "x", x)?;
    ensure_segment("y_from_x", "segment", segment)?;
    LineEquation::from_segment(segment)?.y_at(x)
}

/// Returns the x-coordinate of `segment`'s infinite line at `y`, rounded to
/// three digits.
///
/// Horizontal lines yield `None`. Vertical lines yield the x-coordinate of
/// `segment.start` whatever `y` is.
///
/// # Errors
///
/// Returns an error if `y` or any endpoint coordinate is not finite.
pub fn x_from_y(y: f64, segment: &Segment) -> Result<Option<f64>> {
    ensure_finite("x_from_y", "y", y)?;
    ensure_segment("x_from_y", "segment", segment)?;
    match LineEquation::from_segment(segment)? {
        LineEquation::Vertical => Ok(Some(segment.start.x)),
        eq @ LineEquation::Sloped { .. } => eq.x_at(y),
    }
}
