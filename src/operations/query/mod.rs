mod angle;
mod closest_point;
mod interpolate;
mod intersect;
mod point_on_line;

pub use angle::angle;
pub use closest_point::{closest_line_idx, closest_point_idx, closest_polyline_idx};
pub use interpolate::{x_from_y, y_from_x};
pub use intersect::line_cross;
pub use point_on_line::point_on_line;
