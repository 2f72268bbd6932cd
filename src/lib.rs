//! 2D geometry queries on top of decimal-safe arithmetic.
//!
//! Every scalar operation in [`geometry`] and [`operations`] goes through
//! [`math::add`], [`math::sub`], [`math::multi`], [`math::div`] and
//! [`math::round`], which keep results faithful to decimal inputs (`0.1 + 0.2`
//! is `0.3`). Derived coordinates are rounded to three fractional digits and
//! intermediate slopes to five; those precisions are part of the results.
//!
//! Invalid arguments are rejected with a [`DecigeoError`] and reported as a
//! `tracing` warning. Install a subscriber to see them.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{DecigeoError, Result};
pub use geometry::{LineEquation, Segment};
pub use math::Point2;
