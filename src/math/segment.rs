use super::{polygon_2d, Point2, Tolerance, Vector2};

/// A directed straight piece of an outline.
///
/// Direction follows the order in which the outline was drawn. Intersection
/// and containment logic does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: Point2,
    /// End point.
    pub to: Point2,
}

impl Segment {
    /// Creates a segment from `from` to `to`.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }

    /// Vector from the start point to the end point.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.to - self.from
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.from, &self.to)
    }

    /// Point at parameter `t`, where `t = 0` is `from` and `t = 1` is `to`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.from + self.direction() * t
    }

    /// Returns `true` if all four coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.from.coords.iter().chain(self.to.coords.iter()).all(|c| c.is_finite())
    }

    /// Splits the segment in two at `point`, keeping the original direction.
    #[must_use]
    pub fn split_at(&self, point: Point2) -> [Segment; 2] {
        [Segment::new(self.from, point), Segment::new(point, self.to)]
    }
}

/// An ordered sequence of segments describing one decomposed outline.
///
/// A set may hold several subpaths back to back. It is never modified once
/// built; splitting and culling produce new sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    /// Wraps an ordered list of segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if the set is non-empty and its last end point
    /// coincides with its first start point.
    #[must_use]
    pub fn is_closed(&self, tol: Tolerance) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => tol.points_coincide(&last.to, &first.from),
            _ => false,
        }
    }

    /// Largest x coordinate over all endpoints. See [`polygon_2d::max_x`].
    #[must_use]
    pub fn max_x(&self) -> f64 {
        polygon_2d::max_x(&self.segments)
    }

    /// Returns the first segment with a non-finite coordinate, if any.
    #[must_use]
    pub fn first_malformed(&self) -> Option<&Segment> {
        self.segments.iter().find(|s| !s.is_finite())
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SegmentSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn midpoint_and_point_at() {
        let s = seg(0.0, 0.0, 4.0, 2.0);
        assert_relative_eq!(s.midpoint(), Point2::new(2.0, 1.0));
        assert_relative_eq!(s.point_at(0.25), Point2::new(1.0, 0.5));
    }

    #[test]
    fn split_keeps_direction() {
        let [a, b] = seg(0.0, 0.0, 10.0, 0.0).split_at(Point2::new(3.0, 0.0));
        assert_eq!(a, seg(0.0, 0.0, 3.0, 0.0));
        assert_eq!(b, seg(3.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn closed_square_is_closed() {
        let set: SegmentSet = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 0.0, 1.00005),
        ]
        .into_iter()
        .chain(std::iter::once(seg(0.0, 1.00005, 0.00002, 0.0)))
        .collect();
        assert!(set.is_closed(Tolerance::default()));
        assert!(!SegmentSet::default().is_closed(Tolerance::default()));
    }

    #[test]
    fn open_polyline_is_not_closed() {
        let set = SegmentSet::new(vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 1.0, 1.0)]);
        assert!(!set.is_closed(Tolerance::default()));
    }

    #[test]
    fn non_finite_segment_is_malformed() {
        let bad = seg(f64::NAN, f64::NAN, 1.0, 1.0);
        let set = SegmentSet::new(vec![seg(0.0, 0.0, 1.0, 1.0), bad]);
        assert!(!bad.is_finite());
        assert!(set.first_malformed().is_some());
    }
}
