pub mod line_equation;
pub mod segment;

pub use line_equation::LineEquation;
pub use segment::Segment;
