use crate::error::{QueryError, Result};
use crate::geometry::{LineEquation, Segment};
use crate::math::extent::array_min;
use crate::math::validate::{ensure_finite, ensure_point, ensure_segment};
use crate::math::{add, div, multi, round, sub, Point2, DISTANCE_DIGITS, SLOPE_DIGITS};

/// Finds the point of `points` nearest to `point`.
///
/// Returns the index of the nearest point if its distance is at most
/// `max_dist`, or `None` otherwise. Ties go to the lowest index. Squared
/// distances are rounded to three digits before comparison.
///
/// # Errors
///
/// Returns an error if `points` is empty, `max_dist` is negative, or any
/// coordinate is not finite.
pub fn closest_point_idx(
    point: &Point2,
    points: &[Point2],
    max_dist: f64,
) -> Result<Option<usize>> {
    const OPERATION: &str = "closest_point_idx";
    check_query(OPERATION, point, points.len(), max_dist)?;
    for (i, candidate) in points.iter().enumerate() {
        ensure_point(OPERATION, format_args!("points[{i}]"), candidate)?;
    }

    let distances = points
        .iter()
        .map(|candidate| -> Result<f64> {
            let dx = sub(&[candidate.x, point.x])?;
            let dy = sub(&[candidate.y, point.y])?;
            round(add(&[square(dx)?, square(dy)?])?, DISTANCE_DIGITS)
        })
        .collect::<Result<Vec<f64>>>()?;
    nearest_within(OPERATION, &distances, max_dist)
}

/// Finds the segment of `segments` whose line is nearest to `point`.
///
/// Distance is measured to each segment's infinite line, not to the segment
/// itself, so a short segment far away can still win if its extension passes
/// close to `point`. Selection follows [`closest_point_idx`].
///
/// # Errors
///
/// Returns an error if `segments` is empty, `max_dist` is negative, or any
/// coordinate is not finite.
pub fn closest_line_idx(
    point: &Point2,
    segments: &[Segment],
    max_dist: f64,
) -> Result<Option<usize>> {
    nearest_line("closest_line_idx", point, segments, max_dist)
}

/// Finds the polyline of `polylines` whose chord line is nearest to `point`.
///
/// Each polyline stands for the line through its first and last vertex, see
/// [`Segment::spanning`]; inner vertices are ignored. Otherwise this behaves
/// like [`closest_line_idx`].
///
/// # Errors
///
/// Returns an error if `polylines` is empty, a polyline has fewer than two
/// vertices, `max_dist` is negative, or any coordinate is not finite.
pub fn closest_polyline_idx<P: AsRef<[Point2]>>(
    point: &Point2,
    polylines: &[P],
    max_dist: f64,
) -> Result<Option<usize>> {
    const OPERATION: &str = "closest_polyline_idx";
    let chords = polylines
        .iter()
        .enumerate()
        .map(|(index, polyline)| chord(OPERATION, index, polyline.as_ref()))
        .collect::<Result<Vec<Segment>>>()?;
    nearest_line(OPERATION, point, &chords, max_dist)
}

fn chord(operation: &'static str, index: usize, vertices: &[Point2]) -> Result<Segment> {
    let Some(chord) = Segment::spanning(vertices) else {
        tracing::warn!(operation, index, "rejected short polyline");
        return Err(QueryError::ShortPolyline { operation, index }.into());
    };
    ensure_segment(operation, format_args!("polylines[{index}]"), &chord)?;
    Ok(chord)
}

fn nearest_line(
    operation: &'static str,
    point: &Point2,
    segments: &[Segment],
    max_dist: f64,
) -> Result<Option<usize>> {
    check_query(operation, point, segments.len(), max_dist)?;
    for (i, segment) in segments.iter().enumerate() {
        ensure_segment(operation, format_args!("segments[{i}]"), segment)?;
    }

    let distances = segments
        .iter()
        .map(|segment| line_distance_sq(point, segment))
        .collect::<Result<Vec<f64>>>()?;
    nearest_within(operation, &distances, max_dist)
}

/// Squared distance from `point` to the infinite line through `segment`.
#[allow(clippy::float_cmp)]
fn line_distance_sq(point: &Point2, segment: &Segment) -> Result<f64> {
    match LineEquation::from_segment(segment)? {
        LineEquation::Sloped { slope, intercept } if slope != 0.0 => {
            // Foot of the perpendicular dropped from `point`.
            let normal_slope = round(-div(&[1.0, slope])?, SLOPE_DIGITS)?;
            let normal_intercept = round(
                sub(&[point.y, multi(&[normal_slope, point.x])?])?,
                SLOPE_DIGITS,
            )?;
            let foot_x = round(
                div(&[
                    sub(&[normal_intercept, intercept])?,
                    sub(&[slope, normal_slope])?,
                ])?,
                SLOPE_DIGITS,
            )?;
            let foot_y = round(add(&[multi(&[slope, foot_x])?, intercept])?, SLOPE_DIGITS)?;
            let dx = sub(&[foot_x, point.x])?;
            let dy = sub(&[foot_y, point.y])?;
            round(add(&[square(dx)?, square(dy)?])?, DISTANCE_DIGITS)
        }
        LineEquation::Sloped { .. } => {
            round(square(sub(&[segment.start.y, point.y])?)?, DISTANCE_DIGITS)
        }
        LineEquation::Vertical => {
            round(square(sub(&[segment.start.x, point.x])?)?, DISTANCE_DIGITS)
        }
    }
}

fn square(value: f64) -> Result<f64> {
    multi(&[value, value])
}

fn check_query(operation: &'static str, point: &Point2, len: usize, max_dist: f64) -> Result<()> {
    ensure_point(operation, "point", point)?;
    ensure_finite(operation, "max_dist", max_dist)?;
    if max_dist < 0.0 {
        tracing::warn!(operation, max_dist, "rejected negative distance threshold");
        return Err(QueryError::NegativeThreshold {
            operation,
            value: max_dist,
        }
        .into());
    }
    if len == 0 {
        tracing::warn!(operation, "rejected empty collection");
        return Err(QueryError::EmptyCollection { operation }.into());
    }
    Ok(())
}

/// Index of the first minimum of `distances_sq` if it is within `max_dist`.
#[allow(clippy::float_cmp)]
fn nearest_within(
    operation: &'static str,
    distances_sq: &[f64],
    max_dist: f64,
) -> Result<Option<usize>> {
    let Some(min) = array_min(distances_sq) else {
        return Ok(None);
    };
    if min > square(max_dist)? {
        tracing::trace!(operation, min, max_dist, "nearest beyond threshold");
        return Ok(None);
    }
    Ok(distances_sq.iter().position(|&d| d == min))
}
