use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::point_inside;
use crate::math::{Segment, SegmentSet, Tolerance};

use super::ClipOptions;

/// Clips subject outlines to the region enclosed by a boundary outline.
///
/// Each subject segment is cut wherever a boundary segment crosses it, then
/// every piece whose midpoint falls outside the boundary is dropped.
/// Surviving pieces keep subject order. The boundary is only read, so one
/// `Clip` can serve any number of subjects.
pub struct Clip<'a> {
    boundary: &'a SegmentSet,
    boundary_max_x: f64,
    tolerance: Tolerance,
}

impl<'a> Clip<'a> {
    /// Creates a new `Clip` operation against `boundary`.
    #[must_use]
    pub fn new(boundary: &'a SegmentSet, options: &ClipOptions) -> Self {
        Self {
            boundary,
            boundary_max_x: boundary.max_x(),
            tolerance: options.tolerance(),
        }
    }

    /// Executes the clip, returning the pieces of `subject` inside the boundary.
    ///
    /// An empty result means the subject lies entirely outside.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedSegment` if a subject or boundary
    /// segment has non-finite coordinates.
    pub fn execute(&self, subject: &SegmentSet) -> Result<SegmentSet> {
        let mut clipped = Vec::with_capacity(subject.len());
        for segment in subject {
            for piece in self.split(segment)? {
                if self.is_inside(&piece)? {
                    clipped.push(piece);
                }
            }
        }
        Ok(SegmentSet::new(clipped))
    }

    /// Splits `segment` wherever a boundary segment crosses it.
    ///
    /// A crossing at one of a piece's own endpoints leaves the piece whole;
    /// splitting there would only add a zero-length piece.
    fn split(&self, segment: &Segment) -> std::result::Result<Vec<Segment>, GeometryError> {
        let mut pieces = vec![*segment];
        for edge in self.boundary {
            let mut next = Vec::with_capacity(pieces.len() + 1);
            for piece in pieces {
                match segment_segment_intersect_2d(&piece, edge, self.tolerance)? {
                    Some(point)
                        if !self.tolerance.points_coincide(&point, &piece.from)
                            && !self.tolerance.points_coincide(&point, &piece.to) =>
                    {
                        next.extend(piece.split_at(point));
                    }
                    Some(_) | None => next.push(piece),
                }
            }
            pieces = next;
        }
        Ok(pieces)
    }

    fn is_inside(&self, piece: &Segment) -> std::result::Result<bool, GeometryError> {
        point_inside(
            &piece.midpoint(),
            self.boundary.as_slice(),
            self.boundary_max_x,
            self.tolerance,
        )
    }
}
