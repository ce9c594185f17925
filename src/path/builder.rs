use super::PathCommand;
use crate::math::{Point2, SegmentSet, Tolerance};

/// Converts segments back into move/line commands.
///
/// A move is only emitted when a segment does not start where the previous
/// one ended. No close is ever emitted, so a closed loop comes back as an
/// open polyline.
#[must_use]
pub fn build_commands(segments: &SegmentSet, tol: Tolerance) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(segments.len() + 1);
    let mut end: Option<Point2> = None;
    for segment in segments {
        let continues = end.is_some_and(|e| tol.points_coincide(&e, &segment.from));
        if !continues {
            commands.push(PathCommand::MoveTo(segment.from));
        }
        commands.push(PathCommand::LineTo(segment.to));
        end = Some(segment.to);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Segment;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_set_builds_nothing() {
        assert!(build_commands(&SegmentSet::default(), Tolerance::default()).is_empty());
    }

    #[test]
    fn connected_segments_share_one_move() {
        let segments = SegmentSet::new(vec![
            Segment::new(p(0.0, 0.0), p(10.0, 0.0)),
            Segment::new(p(10.0, 0.00005), p(10.0, 10.0)),
            Segment::new(p(10.0, 10.0), p(0.0, 0.0)),
        ]);
        let commands = build_commands(&segments, Tolerance::default());
        assert_eq!(
            commands,
            [
                PathCommand::MoveTo(p(0.0, 0.0)),
                PathCommand::LineTo(p(10.0, 0.0)),
                PathCommand::LineTo(p(10.0, 10.0)),
                PathCommand::LineTo(p(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn gap_starts_a_new_polyline() {
        let segments = SegmentSet::new(vec![
            Segment::new(p(0.0, 0.0), p(1.0, 0.0)),
            Segment::new(p(5.0, 0.0), p(6.0, 0.0)),
        ]);
        let commands = build_commands(&segments, Tolerance::default());
        assert_eq!(
            commands,
            [
                PathCommand::MoveTo(p(0.0, 0.0)),
                PathCommand::LineTo(p(1.0, 0.0)),
                PathCommand::MoveTo(p(5.0, 0.0)),
                PathCommand::LineTo(p(6.0, 0.0)),
            ]
        );
        assert!(!commands.contains(&PathCommand::Close));
    }
}
