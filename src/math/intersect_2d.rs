use super::{Point2, Segment, Tolerance};
use crate::error::GeometryError;

/// Bounded segment-segment intersection in 2D.
///
/// Solves `a.from + t * da = b.from + s * db`. When the cross product of the
/// two directions is within tolerance of zero the segments are parallel and
/// no intersection is reported, even if they are colinear and overlap.
/// Otherwise the segments meet only if both `t` and `s` lie in `[0, 1]`,
/// endpoints included, and the returned point lies on `a`.
///
/// # Errors
///
/// Returns `GeometryError::MalformedSegment` if either segment has a
/// non-finite coordinate.
pub fn segment_segment_intersect_2d(
    a: &Segment,
    b: &Segment,
    tol: Tolerance,
) -> Result<Option<Point2>, GeometryError> {
    for seg in [a, b] {
        if !seg.is_finite() {
            return Err(GeometryError::MalformedSegment {
                from: seg.from,
                to: seg.to,
            });
        }
    }

    let da = a.direction();
    let db = b.direction();

    let cross = da.x * db.y - da.y * db.x;
    if tol.approx_eq(cross, 0.0) {
        return Ok(None);
    }

    let dx = b.from.x - a.from.x;
    let dy = b.from.y - a.from.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let s = (dx * da.y - dy * da.x) / cross;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
        Ok(Some(a.point_at(t)))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn intersect(a: &Segment, b: &Segment) -> Option<Point2> {
        segment_segment_intersect_2d(a, b, Tolerance::default()).unwrap()
    }

    #[test]
    fn crossing_segments() {
        let p = intersect(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0)).unwrap();
        assert_relative_eq!(p, Point2::new(5.0, 5.0));
    }

    #[test]
    fn shared_endpoint_is_returned() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(intersect(&a, &b).unwrap(), Point2::new(10.0, 0.0));
        assert_relative_eq!(intersect(&b, &a).unwrap(), Point2::new(10.0, 0.0));
    }

    #[test]
    fn touching_interior_counts() {
        let p = intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(4.0, 0.0, 4.0, 5.0)).unwrap();
        assert_relative_eq!(p, Point2::new(4.0, 0.0));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(0.0, 1.0, 10.0, 1.0)).is_none());
    }

    #[test]
    fn colinear_overlap_is_not_a_crossing() {
        assert!(intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 0.0, 15.0, 0.0)).is_none());
    }

    #[test]
    fn lines_cross_outside_segments() {
        assert!(intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(5.0, -1.0, 5.0, 1.0)).is_none());
        assert!(intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 1.0, 5.0, 2.0)).is_none());
    }

    #[test]
    fn point_lies_on_first_segment() {
        let a = seg(0.0, 0.0, 8.0, 4.0);
        let b = seg(2.0, 4.0, 6.0, 0.0);
        let p = intersect(&a, &b).unwrap();
        assert_relative_eq!(p.y, p.x * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn malformed_segment_is_an_error() {
        let bad = seg(f64::NAN, f64::NAN, 1.0, 1.0);
        let good = seg(0.0, 0.0, 1.0, 0.0);
        let err = segment_segment_intersect_2d(&good, &bad, Tolerance::default()).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedSegment { .. }));
        assert!(segment_segment_intersect_2d(&bad, &good, Tolerance::default()).is_err());
    }
}
