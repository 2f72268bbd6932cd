/// Smallest value in `values`, or `None` for an empty slice.
#[must_use]
pub fn array_min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value in `values`, or `None` for an empty slice.
#[must_use]
pub fn array_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// `(min, max)` of `values`, or `None` for an empty slice.
#[must_use]
pub fn array_extent(values: &[f64]) -> Option<(f64, f64)> {
    Some((array_min(values)?, array_max(values)?))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_values() {
        assert_eq!(array_min(&[3.0, -1.5, 2.0]), Some(-1.5));
        assert_eq!(array_max(&[3.0, -1.5, 2.0]), Some(3.0));
        assert_eq!(array_extent(&[2.0, 1.0]), Some((1.0, 2.0)));
    }

    #[test]
    fn extent_of_empty_slice() {
        assert_eq!(array_min(&[]), None);
        assert_eq!(array_extent(&[]), None);
    }
}
