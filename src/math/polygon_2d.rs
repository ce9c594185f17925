use super::intersect_2d::segment_segment_intersect_2d;
use super::{Point2, Segment, Tolerance};
use crate::error::GeometryError;

/// Returns the largest x coordinate over all segment endpoints.
///
/// The fold starts at `0.0`, so an empty set (or one lying entirely at
/// negative x) reports `0.0`.
#[must_use]
pub fn max_x(segments: &[Segment]) -> f64 {
    segments
        .iter()
        .flat_map(|s| [s.from.x, s.to.x])
        .fold(0.0, f64::max)
}

/// Tests whether `point` lies inside the region outlined by `boundary`.
///
/// Casts a horizontal ray from `point` to `(2 * boundary_max_x, point.y)` and
/// counts the boundary segments it crosses. Odd crossings = inside. The ray
/// end is clamped to `f64::MAX` for boundaries reaching past half of it.
///
/// A ray passing exactly through a vertex shared by two boundary segments
/// registers on both of them, which flips the parity.
///
/// # Errors
///
/// Returns `GeometryError::MalformedSegment` if a boundary segment or the
/// point itself has a non-finite coordinate.
pub fn point_inside(
    point: &Point2,
    boundary: &[Segment],
    boundary_max_x: f64,
    tol: Tolerance,
) -> Result<bool, GeometryError> {
    let ray_end_x = (boundary_max_x * 2.0).min(f64::MAX);
    let ray = Segment::new(*point, Point2::new(ray_end_x, point.y));
    let mut crossings = 0u32;
    for edge in boundary {
        if segment_segment_intersect_2d(edge, &ray, tol)?.is_some() {
            crossings += 1;
        }
    }
    Ok(crossings % 2 == 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn polygon(points: &[Point2]) -> Vec<Segment> {
        let n = points.len();
        (0..n)
            .map(|i| Segment::new(points[i], points[(i + 1) % n]))
            .collect()
    }

    fn square(min: f64, max: f64) -> Vec<Segment> {
        polygon(&[p(min, min), p(max, min), p(max, max), p(min, max)])
    }

    fn inside(point: Point2, boundary: &[Segment]) -> bool {
        point_inside(&point, boundary, max_x(boundary), Tolerance::default()).unwrap()
    }

    #[test]
    fn max_x_of_square() {
        assert!((max_x(&square(-5.0, 15.0)) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_x_defaults_to_zero() {
        assert!(max_x(&[]).abs() < f64::EPSILON);
        assert!(max_x(&square(-20.0, -10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn center_is_inside() {
        assert!(inside(p(5.0, 5.0), &square(0.0, 10.0)));
    }

    #[test]
    fn far_point_is_outside() {
        let b = square(0.0, 10.0);
        assert!(!inside(p(25.0, 5.0), &b));
        assert!(!inside(p(-5.0, 5.0), &b));
        assert!(!inside(p(5.0, 20.0), &b));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape open at the top between x = 4 and x = 6.
        let b = polygon(&[
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(6.0, 10.0),
            p(6.0, 4.0),
            p(4.0, 4.0),
            p(4.0, 10.0),
            p(0.0, 10.0),
        ]);
        assert!(!inside(p(5.0, 7.0), &b));
        assert!(inside(p(2.0, 7.0), &b));
        assert!(inside(p(5.0, 2.0), &b));
    }

    #[test]
    fn ray_through_shared_vertex_double_counts() {
        // Diamond with vertices on the ray y = 0 at x = 10.
        let b = polygon(&[p(0.0, 0.0), p(5.0, -5.0), p(10.0, 0.0), p(5.0, 5.0)]);
        // Inside, but the ray leaves through the vertex at (10, 0) which lies on
        // two edges, giving an even count.
        assert!(!inside(p(5.0, 0.0), &b));
        assert!(inside(p(5.0, 1.0), &b));
    }

    #[test]
    fn ray_end_stays_finite_for_huge_boundary() {
        let b = polygon(&[p(0.0, 0.0), p(9e307, 0.0), p(9e307, 1.0), p(0.0, 1.0)]);
        let result = point_inside(&p(4e307, 0.5), &b, max_x(&b), Tolerance::default());
        assert!(result.unwrap());
    }

    #[test]
    fn malformed_boundary_propagates() {
        let mut b = square(0.0, 10.0);
        b.push(Segment::new(p(f64::NAN, f64::NAN), p(0.0, 0.0)));
        let result = point_inside(&p(5.0, 5.0), &b, 10.0, Tolerance::default());
        assert!(result.is_err());
    }
}
