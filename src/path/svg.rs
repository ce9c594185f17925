use std::fmt::Write as _;

use svgtypes::{PathParser, PathSegment};

use super::PathCommand;
use crate::error::ParseError;
use crate::math::{Point2, Vector2};

/// Reads SVG path data (the `d` attribute) into absolute drawing commands.
///
/// Relative coordinates are resolved against the current point and `H`/`V`
/// become line-tos. Cubic curves keep only their end point. Smooth,
/// quadratic and arc commands are yielded as [`PathCommand::Other`].
///
/// # Errors
///
/// Returns a `ParseError` if the data is not valid path data or does not
/// start with a move.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, ParseError> {
    let mut commands = Vec::new();
    let mut pen = Point2::origin();
    let mut start = Point2::origin();

    for segment in PathParser::from(data) {
        let segment = segment?;
        if commands.is_empty() && !matches!(segment, PathSegment::MoveTo { .. }) {
            return Err(ParseError::MissingMoveTo);
        }
        let command = match segment {
            PathSegment::MoveTo { abs, x, y } => {
                pen = resolve(pen, abs, x, y);
                start = pen;
                PathCommand::MoveTo(pen)
            }
            PathSegment::LineTo { abs, x, y } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::LineTo(pen)
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                pen.x = if abs { x } else { pen.x + x };
                PathCommand::LineTo(pen)
            }
            PathSegment::VerticalLineTo { abs, y } => {
                pen.y = if abs { y } else { pen.y + y };
                PathCommand::LineTo(pen)
            }
            PathSegment::CurveTo { abs, x, y, .. } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::CurveApprox(pen)
            }
            PathSegment::SmoothCurveTo { abs, x, y, .. } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::Other('S')
            }
            PathSegment::Quadratic { abs, x, y, .. } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::Other('Q')
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::Other('T')
            }
            PathSegment::EllipticalArc { abs, x, y, .. } => {
                pen = resolve(pen, abs, x, y);
                PathCommand::Other('A')
            }
            PathSegment::ClosePath { .. } => {
                pen = start;
                PathCommand::Close
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Resolves a possibly relative coordinate pair against the pen.
fn resolve(pen: Point2, abs: bool, x: f64, y: f64) -> Point2 {
    let offset = if abs { Vector2::zeros() } else { pen.coords };
    Point2::new(x, y) + offset
}

/// Writes drawing commands as SVG path data.
///
/// Curve approximations are written as straight lines and unsupported
/// commands are skipped.
#[must_use]
pub fn format_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        let (letter, point) = match *command {
            PathCommand::MoveTo(p) => ('M', Some(p)),
            PathCommand::LineTo(p) | PathCommand::CurveApprox(p) => ('L', Some(p)),
            PathCommand::Close => ('Z', None),
            PathCommand::Other(_) => continue,
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(letter);
        if let Some(p) = point {
            write!(out, " {} {}", p.x, p.y).ok();
        }
    }
    out
}
