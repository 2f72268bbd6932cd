use crate::error::{GeometryError, Result};
use crate::geometry::Segment;
use crate::math::validate::ensure_segment;
use crate::math::{add, div, multi, round, sub, Point2, COORDINATE_DIGITS};

const OPERATION: &str = "line_cross";

/// Twice the signed area of triangle `(a, b, c)`.
fn double_area(a: &Point2, b: &Point2, c: &Point2) -> Result<f64> {
    let lhs = in_range(multi(&[sub(&[a.x, c.x])?, sub(&[b.y, c.y])?])?)?;
    let rhs = in_range(multi(&[sub(&[a.y, c.y])?, sub(&[b.x, c.x])?])?)?;
    in_range(sub(&[lhs, rhs])?)
}

/// Rejects an intermediate value that left the `f64` range.
fn in_range(value: f64) -> Result<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    tracing::warn!(operation = OPERATION, value, "intermediate overflow");
    Err(GeometryError::Overflow {
        operation: OPERATION,
    }
    .into())
}

/// Whether two signed areas put their points on the same side of a line,
/// counting a zero area as touching.
#[allow(clippy::float_cmp)]
fn same_side(lhs: f64, rhs: f64) -> bool {
    lhs == 0.0 || rhs == 0.0 || lhs.is_sign_positive() == rhs.is_sign_positive()
}

/// Returns the point where segments `first` and `second` properly cross,
/// rounded to three digits.
///
/// Uses signed triangle areas: each segment's endpoints must lie strictly on
/// opposite sides of the other segment's line. Segments that merely touch (an
/// endpoint on the other segment, or a shared endpoint), collinear segments
/// and parallel segments all yield `None`.
///
/// # Errors
///
/// Returns an error if any endpoint coordinate is not finite, or
/// [`GeometryError::Overflow`] if the coordinates are so large that the
/// triangle areas leave the `f64` range.
pub fn line_cross(first: &Segment, second: &Segment) -> Result<Option<Point2>> {
    ensure_segment(OPERATION, "first", first)?;
    ensure_segment(OPERATION, "second", second)?;
    let (p1, p2, p3, p4) = (&first.start, &first.end, &second.start, &second.end);

    let area123 = double_area(p1, p2, p3)?;
    let area124 = double_area(p1, p2, p4)?;
    if same_side(area123, area124) {
        tracing::trace!(?first, ?second, "second lies on one side of first");
        return Ok(None);
    }

    let area341 = double_area(p3, p4, p1)?;
    // area(3,4,2) follows from the other three without another cross product.
    let area342 = add(&[area341, area123, -area124])?;
    if same_side(area341, area342) {
        tracing::trace!(?first, ?second, "first lies on one side of second");
        return Ok(None);
    }

    let ratio = div(&[area341, in_range(sub(&[area124, area123])?)?])?;
    let dx = in_range(sub(&[p2.x, p1.x])?)?;
    let dy = in_range(sub(&[p2.y, p1.y])?)?;
    let x = add(&[p1.x, multi(&[ratio, dx])?])?;
    let y = add(&[p1.y, multi(&[ratio, dy])?])?;
    Ok(Some(Point2::new(round(x, COORDINATE_DIGITS)?, round(y, COORDINATE_DIGITS)?)))
}
