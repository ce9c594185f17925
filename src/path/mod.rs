mod builder;
mod segmenter;
mod svg;
mod warning;

pub use builder::build_commands;
pub use segmenter::segment_commands;
pub use svg::{format_path_data, parse_path_data};
pub use warning::{Warning, WarningSet};

use crate::math::Point2;

/// A single drawing instruction of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and place it at the point.
    MoveTo(Point2),
    /// Draw a straight line to the point.
    LineTo(Point2),
    /// Draw a straight line back to the start of the current subpath.
    Close,
    /// A curve reduced to its end point. Control points are discarded.
    CurveApprox(Point2),
    /// Any other drawing instruction, identified by its command letter.
    Other(char),
}
