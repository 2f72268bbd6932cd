use std::fmt::Display;

use super::Point2;
use crate::error::{GeometryError, Result};
use crate::geometry::Segment;

/// Rejects a non-finite scalar argument of `operation`.
pub(crate) fn ensure_finite(
    operation: &'static str,
    parameter: impl Display,
    value: f64,
) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    let parameter = parameter.to_string();
    tracing::warn!(operation, %parameter, value, "rejected non-finite argument");
    Err(GeometryError::NonFinite {
        operation,
        parameter,
        value,
    }
    .into())
}

/// Rejects a point with a non-finite coordinate.
pub(crate) fn ensure_point(
    operation: &'static str,
    label: impl Display,
    point: &Point2,
) -> Result<()> {
    if !point.x.is_finite() {
        return ensure_finite(operation, format_args!("{label}.x"), point.x);
    }
    ensure_finite(operation, format_args!("{label}.y"), point.y)
}

/// Rejects a segment with a non-finite endpoint coordinate.
pub(crate) fn ensure_segment(
    operation: &'static str,
    label: impl Display,
    segment: &Segment,
) -> Result<()> {
    ensure_point(operation, format_args!("{label}.start"), &segment.start)?;
    ensure_point(operation, format_args!("{label}.end"), &segment.end)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DecigeoError;

    #[test]
    fn finite_point_passes() {
        assert!(ensure_point("test", "point", &Point2::new(1.0, -2.0)).is_ok());
    }

    #[test]
    fn parameter_path_names_the_coordinate() {
        let segment = Segment::from_coords(0.0, 0.0, 1.0, f64::NAN);
        let err = ensure_segment("angle", "segment", &segment).unwrap_err();
        match err {
            DecigeoError::Geometry(GeometryError::NonFinite {
                operation,
                parameter,
                ..
            }) => {
                assert_eq!(operation, "angle");
                assert_eq!(parameter, "segment.end.y");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn indexed_labels() {
        let point = Point2::new(f64::INFINITY, 0.0);
        let err =
            ensure_point("closest_point_idx", format_args!("points[{}]", 3), &point).unwrap_err();
        assert_eq!(
            err.to_string(),
            "closest_point_idx: points[3].x = inf is not finite"
        );
    }
}
