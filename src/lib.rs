//! Destructive clipping of path outlines.
//!
//! The topmost path of a selection acts as a boundary; every other path is
//! cut down to the part lying inside it and rewritten as open polylines.
//! Curves are flattened to their end points and reported as warnings.

pub mod document;
pub mod error;
pub mod math;
pub mod operations;
pub mod path;

pub use error::{ClipError, Result};
