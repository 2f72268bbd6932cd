use crate::error::{GeometryError, Result};
use crate::geometry::Segment;
use crate::math::extent::array_extent;
use crate::math::validate::{ensure_finite, ensure_point, ensure_segment};
use crate::math::{div, sub, Point2};

const OPERATION: &str = "point_on_line";

/// Tests whether `point` lies on `segment`.
///
/// The point must fall inside the segment's bounding box, and the run/rise
/// ratio from one of the endpoints to `point` must differ from the segment's
/// own ratio by less than `tolerance`. When the segment is closer to
/// horizontal than vertical the x and y roles are swapped so the divisor is
/// always the larger delta.
///
/// `tolerance` is a ratio difference, not a distance: the same tolerance
/// admits points farther from the line the closer they are to the endpoint
/// being compared against. See [`crate::math::DEFAULT_ON_LINE_TOLERANCE`].
///
/// # Errors
///
/// Returns an error if any coordinate is not finite or `tolerance` is negative
/// or not finite.
#[allow(clippy::float_cmp)]
pub fn point_on_line(point: &Point2, segment: &Segment, tolerance: f64) -> Result<bool> {
    ensure_point(OPERATION, "point", point)?;
    ensure_segment(OPERATION, "segment", segment)?;
    ensure_finite(OPERATION, "tolerance", tolerance)?;
    if tolerance < 0.0 {
        tracing::warn!(operation = OPERATION, tolerance, "negative tolerance");
        return Err(GeometryError::NegativeTolerance { value: tolerance }.into());
    }

    let (p1, p2) = (segment.start, segment.end);
    let inside = |value: f64, a: f64, b: f64| {
        array_extent(&[a, b]).is_some_and(|(lo, hi)| value >= lo && value <= hi)
    };
    if !inside(point.x, p1.x, p2.x) || !inside(point.y, p1.y, p2.y) {
        return Ok(false);
    }

    // (x, y) pairs with the larger delta in the second slot.
    let (mut p, mut a, mut b) = ((point.x, point.y), (p1.x, p1.y), (p2.x, p2.y));
    if sub(&[p1.y, p2.y])?.abs() < sub(&[p1.x, p2.x])?.abs() {
        p = (p.1, p.0);
        a = (a.1, a.0);
        b = (b.1, b.0);
    }

    let rise = sub(&[a.1, b.1])?;
    if rise == 0.0 {
        // Degenerate segment: the bounding box already pinned `point` to it.
        return Ok(true);
    }
    let reference = div(&[sub(&[a.0, b.0])?, rise])?;

    for endpoint in [a, b] {
        let dx = sub(&[p.0, endpoint.0])?;
        let dy = sub(&[p.1, endpoint.1])?;
        if dy == 0.0 {
            if dx == 0.0 {
                return Ok(true);
            }
            continue;
        }
        if sub(&[div(&[dx, dy])?, reference])?.abs() < tolerance {
            return Ok(true);
        }
    }
    Ok(false)
}
