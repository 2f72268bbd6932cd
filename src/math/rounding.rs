use super::decimal::{fraction_digits, multi, pow10};
use crate::error::{ArithmeticError, Result};

/// Rounds `value` to `digits` fractional digits, half away from zero.
///
/// Rounding works on the decimal value of `value`, not its binary expansion,
/// so `round(1.005, 2)` is `1.01`. Values that already have at most `digits`
/// fractional digits, and infinities, are returned unchanged.
///
/// # Errors
///
/// Returns [`ArithmeticError::NotANumber`] if `value` is NaN.
pub fn round(value: f64, digits: u32) -> Result<f64> {
    if value.is_nan() {
        tracing::warn!(operation = "round", digits, "rejected NaN value");
        return Err(ArithmeticError::NotANumber {
            operation: "round",
            index: 0,
        }
        .into());
    }
    let digits = digits as usize;
    if !value.is_finite() || fraction_digits(value) <= digits {
        return Ok(value);
    }

    let factor = pow10(digits);
    if !factor.is_finite() {
        return Ok(value);
    }
    // `f64::round` already rounds half away from zero.
    Ok(multi(&[value, factor])?.round() / factor)
}
