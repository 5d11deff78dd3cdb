//! Floating-point geometric primitives.

mod point2;
mod segment2;
mod triangle2;

pub use point2::Point2;
pub use segment2::{Segment2, Slope};
pub use triangle2::Triangle2;
