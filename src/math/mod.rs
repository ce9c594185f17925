pub mod intersect_2d;
pub mod polygon_2d;
pub mod segment;
mod tolerance;

pub use segment::{Segment, SegmentSet};
pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for floating-point comparisons, in document units.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
