use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the clipping engine.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Errors raised by the geometry kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A segment endpoint has no usable coordinates, either because the
    /// segment was drawn before the pen was placed or because a coordinate
    /// overflowed.
    #[error("malformed segment from {from} to {to}")]
    MalformedSegment { from: Point2, to: Point2 },
}

/// Errors raised while reading SVG path data.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid path data: {0}")]
    Syntax(#[from] svgtypes::Error),

    #[error("path data must begin with a move command")]
    MissingMoveTo,
}

/// Errors related to run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Errors related to the shape arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("shape not found: {0}")]
    ShapeNotFound(String),

    #[error("shape {0} is not a path")]
    NotAPath(String),
}

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("selection contains no path to clip against")]
    NoBoundary,

    #[error("boundary shape {label} is malformed: {source}")]
    BoundaryMalformed {
        label: String,
        #[source]
        source: GeometryError,
    },
}

/// Convenience type alias for results using [`ClipError`].
pub type Result<T> = std::result::Result<T, ClipError>;
