//! Decimal-safe arithmetic.
//!
//! Binary floating point cannot hold most decimal fractions, so `0.1 + 0.2`
//! drifts to `0.30000000000000004`. Each operation here scales its operands by
//! a power of ten taken from their shortest decimal representation, works on
//! the scaled integers and scales the result back.
//!
//! Invalid operands (an empty operand list or a NaN) are rejected with an
//! [`ArithmeticError`]. Division by zero is not an error: it yields `±inf` or
//! `NaN` exactly as IEEE-754 division does.

use crate::error::{ArithmeticError, Result};

/// Largest integer magnitude an `f64` holds exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns the number of fractional digits in the shortest decimal
/// representation of `value`.
///
/// Integers, infinities and NaN have no fractional digits.
#[must_use]
pub fn fraction_digits(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    // `Display` for f64 prints the shortest round-trip form without an exponent.
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Sums all operands.
///
/// # Errors
///
/// Returns [`ArithmeticError::MissingOperands`] for an empty slice and
/// [`ArithmeticError::NotANumber`] if any operand is NaN.
pub fn add(operands: &[f64]) -> Result<f64> {
    check_operands("add", operands)?;
    Ok(scaled_sum("add", operands))
}

/// Subtracts every trailing operand from the first one.
///
/// `sub(&[a, b, c])` is `add(&[a, -b, -c])`.
///
/// # Errors
///
/// Same as [`add`].
pub fn sub(operands: &[f64]) -> Result<f64> {
    check_operands("sub", operands)?;
    let negated: Vec<f64> = operands
        .iter()
        .enumerate()
        .map(|(i, &v)| if i == 0 { v } else { -v })
        .collect();
    Ok(scaled_sum("sub", &negated))
}

/// Multiplies all operands.
///
/// Each operand is scaled by its own digit count; the product of the scaled
/// integers is divided by ten to the power of the digit total.
///
/// # Errors
///
/// Same as [`add`].
pub fn multi(operands: &[f64]) -> Result<f64> {
    check_operands("multi", operands)?;

    let digits: Vec<usize> = operands.iter().map(|&v| fraction_digits(v)).collect();
    let divisor = pow10(digits.iter().sum());
    if !divisor.is_finite() {
        tracing::trace!(operation = "multi", "scale overflows, native product");
        return Ok(operands.iter().product());
    }

    let product: f64 = operands
        .iter()
        .zip(&digits)
        .map(|(&v, &d)| scale(v, pow10(d)))
        .product();
    if !product.is_finite() && operands.iter().all(|v| v.is_finite()) {
        tracing::trace!(operation = "multi", "product overflows, native product");
        return Ok(operands.iter().product());
    }
    Ok(product / divisor)
}

/// Divides left to right: `div(&[a, b, c])` is `(a / b) / c`.
///
/// At every step the running quotient and the next divisor are both scaled by
/// the larger of their digit counts before dividing. A step whose scaled
/// operands are no longer exact integers divides natively.
///
/// # Errors
///
/// Same as [`add`]. Dividing by zero is not an error.
pub fn div(operands: &[f64]) -> Result<f64> {
    check_operands("div", operands)?;
    Ok(operands
        .iter()
        .copied()
        .reduce(scaled_quotient)
        .unwrap_or_default())
}

fn scaled_sum(operation: &'static str, operands: &[f64]) -> f64 {
    let digits = operands
        .iter()
        .map(|&v| fraction_digits(v))
        .max()
        .unwrap_or(0);
    let factor = pow10(digits);
    if !factor.is_finite() {
        tracing::trace!(operation, digits, "scale overflows, using native sum");
        return operands.iter().sum();
    }
    let total: f64 = operands.iter().map(|&v| scale(v, factor)).sum();
    total / factor
}

fn scaled_quotient(dividend: f64, divisor: f64) -> f64 {
    let factor = pow10(fraction_digits(dividend).max(fraction_digits(divisor)));
    let (scaled_dividend, scaled_divisor) = (dividend * factor, divisor * factor);
    if !is_exact(scaled_dividend) || !is_exact(scaled_divisor) {
        return dividend / divisor;
    }
    scaled_dividend.round() / scaled_divisor.round()
}

/// Multiplies `value` by `factor`, snapping to the nearest integer while the
/// result is still exactly representable.
fn scale(value: f64, factor: f64) -> f64 {
    let scaled = value * factor;
    if is_exact(scaled) {
        scaled.round()
    } else {
        scaled
    }
}

/// Whether `scaled` still rounds to an exactly representable integer.
fn is_exact(scaled: f64) -> bool {
    scaled.abs() <= MAX_EXACT_INTEGER
}

/// `10^exponent`, or `+inf` once it leaves the `f64` range.
pub(crate) fn pow10(exponent: usize) -> f64 {
    i32::try_from(exponent).map_or(f64::INFINITY, |e| 10f64.powi(e))
}

fn check_operands(operation: &'static str, operands: &[f64]) -> Result<()> {
    if operands.is_empty() {
        tracing::warn!(operation, "rejected call without operands");
        return Err(ArithmeticError::MissingOperands { operation }.into());
    }
    if let Some(index) = operands.iter().position(|v| v.is_nan()) {
        tracing::warn!(operation, index, "rejected NaN operand");
        return Err(ArithmeticError::NotANumber { operation, index }.into());
    }
    Ok(())
}
