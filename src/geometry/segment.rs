use crate::math::Point2;

/// A line segment between two points.
///
/// Endpoint order is significant for direction-dependent queries such as
/// [`crate::operations::query::angle`]; line equations and intersections
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the chord from the first to the last vertex of a polyline, or
    /// `None` if it has fewer than two vertices.
    #[must_use]
    pub fn spanning(vertices: &[Point2]) -> Option<Self> {
        match vertices {
            [start, .., end] => Some(Self::new(*start, *end)),
            _ => None,
        }
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from([[x1, y1], [x2, y2]]: [[f64; 2]; 2]) -> Self {
        Self::from_coords(x1, y1, x2, y2)
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from(((x1, y1), (x2, y2)): ((f64, f64), (f64, f64))) -> Self {
        Self::from_coords(x1, y1, x2, y2)
    }
}
