use super::{PathCommand, Warning, WarningSet};
use crate::math::{Point2, Segment, SegmentSet};

/// Position of a pen that has never been placed. Segments drawn from it
/// carry non-finite coordinates and are rejected by the intersection kernel.
fn unplaced() -> Point2 {
    Point2::new(f64::NAN, f64::NAN)
}

/// Decomposes drawing commands into directed line segments.
///
/// Thus `[M p0, L p1, L p2]` becomes `[p0-p1, p1-p2]`. A close draws back to
/// the start of the subpath; curves are replaced by a straight segment to
/// their end point; other commands are reported and leave the pen where it
/// was. A move only starts a new subpath once the previous one was closed.
#[must_use]
pub fn segment_commands(commands: &[PathCommand]) -> (SegmentSet, WarningSet) {
    let mut segments = Vec::with_capacity(commands.len());
    let mut warnings = WarningSet::new();
    let mut pen = unplaced();
    let mut subpath_start: Option<Point2> = None;

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                if subpath_start.is_none() {
                    subpath_start = Some(p);
                }
                pen = p;
            }
            PathCommand::LineTo(p) => {
                segments.push(Segment::new(pen, p));
                pen = p;
            }
            PathCommand::Close => {
                let start = subpath_start.take().unwrap_or_else(unplaced);
                segments.push(Segment::new(pen, start));
                pen = start;
            }
            PathCommand::CurveApprox(p) => {
                segments.push(Segment::new(pen, p));
                warnings.insert(Warning::CurveApproximated);
                pen = p;
            }
            PathCommand::Other(kind) => {
                warnings.insert(Warning::UnsupportedCommand(kind));
            }
        }
    }

    (SegmentSet::new(segments), warnings)
}
