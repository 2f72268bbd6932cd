use super::Segment;
use crate::error::Result;
use crate::math::validate::ensure_segment;
use crate::math::{add, div, multi, round, sub, COORDINATE_DIGITS, SLOPE_DIGITS};

/// Equation of the infinite line through a segment.
///
/// Lines parallel to the y-axis have no slope-intercept form and are
/// represented by [`LineEquation::Vertical`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `x = constant`.
    Vertical,
    /// `y = slope * x + intercept`, both rounded to [`SLOPE_DIGITS`].
    Sloped { slope: f64, intercept: f64 },
}

#[allow(clippy::float_cmp)]
impl LineEquation {
    /// Computes the equation of the line through `segment`.
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint coordinate is not finite.
    pub fn from_segment(segment: &Segment) -> Result<Self> {
        ensure_segment("line_equation", "segment", segment)?;
        let (p1, p2) = (segment.start, segment.end);
        if p1.x == p2.x {
            return Ok(Self::Vertical);
        }

        let slope = round(
            div(&[sub(&[p1.y, p2.y])?, sub(&[p1.x, p2.x])?])?,
            SLOPE_DIGITS,
        )?;
        let intercept = round(sub(&[p1.y, multi(&[slope, p1.x])?])?, SLOPE_DIGITS)?;
        Ok(Self::Sloped { slope, intercept })
    }

    /// Returns the slope, or `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        match self {
            Self::Vertical => None,
            Self::Sloped { slope, .. } => Some(*slope),
        }
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical)
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Sloped { slope, .. } if *slope == 0.0)
    }

    /// Evaluates `y` at `x`, rounded to [`COORDINATE_DIGITS`].
    ///
    /// Returns `None` for a vertical line.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is NaN.
    pub fn y_at(&self, x: f64) -> Result<Option<f64>> {
        match *self {
            Self::Vertical => Ok(None),
            Self::Sloped { slope, intercept } => Ok(Some(round(
                add(&[multi(&[slope, x])?, intercept])?,
                COORDINATE_DIGITS,
            )?)),
        }
    }

    /// Solves for `x` at `y`, rounded to [`COORDINATE_DIGITS`].
    ///
    /// Returns `None` for horizontal and vertical lines: the former never or
    /// always reach `y`, the latter carry no x-coordinate in the equation.
    ///
    /// # Errors
    ///
    /// Returns an error if `y` is NaN.
    pub fn x_at(&self, y: f64) -> Result<Option<f64>> {
        match *self {
            Self::Sloped { slope, intercept } if slope != 0.0 => Ok(Some(round(
                div(&[sub(&[y, intercept])?, slope])?,
                COORDINATE_DIGITS,
            )?)),
            _ => Ok(None),
        }
    }
}
