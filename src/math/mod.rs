pub mod decimal;
pub mod extent;
pub mod rounding;
pub(crate) mod validate;

pub use decimal::{add, div, fraction_digits, multi, sub};
pub use rounding::round;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Fractional digits kept on every derived coordinate.
pub const COORDINATE_DIGITS: u32 = 3;

/// Fractional digits kept on intermediate slopes, intercepts and run offsets.
pub const SLOPE_DIGITS: u32 = 5;

/// Fractional digits kept on squared distances compared by nearest-neighbour queries.
pub const DISTANCE_DIGITS: u32 = 3;

/// Default ratio tolerance for [`crate::operations::query::point_on_line`].
pub const DEFAULT_ON_LINE_TOLERANCE: f64 = 0.01;
