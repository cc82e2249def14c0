//! Segment and plane against a half-space; `point_b` lies on the plane.

use crate::constants::{ANTI_PARALLEL_EPS, DIST_EPS};
use crate::result::DistanceResult;
use crate::shape::Vec3;
use crate::shape::placed::HalfSpace;

/// Segment `start -> end` against a half-space; `point_a` is on the segment.
///
/// - Crossing (or touching) the plane: contact at the crossing point.
/// - Otherwise the nearer endpoint and its projection, intersecting when that
///   endpoint is inside the solid.
pub fn segment_to_plane(start: Vec3, end: Vec3, plane: &HalfSpace) -> DistanceResult {
    let d0 = plane.signed_distance(start);
    let d1 = plane.signed_distance(end);

    if d0 * d1 <= 0.0 {
        let denom = d0 - d1;
        let crossing = if denom.abs() <= DIST_EPS {
            start
        } else {
            start + (end - start) * (d0 / denom)
        };
        return DistanceResult::contact(crossing);
    }

    let (nearer, d) = if d0.abs() <= d1.abs() { (start, d0) } else { (end, d1) };
    DistanceResult::new(nearer, nearer - plane.normal * d).with_intersecting(d < 0.0)
}

/// Anti-parallel planes are reported apart by their origins; any other pair intersects.
pub fn plane_to_plane(a: &HalfSpace, b: &HalfSpace) -> DistanceResult {
    if a.normal.dot(&b.normal) <= -1.0 + ANTI_PARALLEL_EPS {
        DistanceResult::new(a.origin, b.origin)
    } else {
        DistanceResult::default().with_intersecting(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ground() -> HalfSpace {
        HalfSpace {
            normal: Vec3::y(),
            origin: Vec3::zeros(),
        }
    }

    #[test]
    fn crossing_segment_contacts_at_crossing() {
        let r = segment_to_plane(Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, -3.0, 0.0), &ground());
        assert!(r.is_intersecting());
        assert_relative_eq!(r.point_a(), Vec3::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn segment_above_uses_nearer_endpoint() {
        let r = segment_to_plane(Vec3::new(0.0, 5.0, 0.0), Vec3::new(2.0, 1.0, 0.0), &ground());
        assert!(!r.is_intersecting());
        assert_relative_eq!(r.point_a(), Vec3::new(2.0, 1.0, 0.0));
        assert_relative_eq!(r.point_b(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn parallel_segment_is_finite() {
        let r = segment_to_plane(Vec3::new(0.0, 2.0, 0.0), Vec3::new(4.0, 2.0, 0.0), &ground());
        assert!((r.distance() - 2.0).abs() < 1.0e-6);
        assert!(r.point_a().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn segment_lying_in_plane_is_contact() {
        let r = segment_to_plane(Vec3::zeros(), Vec3::x(), &ground());
        assert!(r.is_intersecting());
    }

    #[test]
    fn submerged_segment_intersects() {
        let r = segment_to_plane(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -2.0, 0.0), &ground());
        assert!(r.is_intersecting());
    }

    #[test]
    fn plane_pairs() {
        let up = ground();
        let down = HalfSpace {
            normal: -Vec3::y(),
            origin: Vec3::new(0.0, 3.0, 0.0),
        };
        let r = plane_to_plane(&up, &down);
        assert!(!r.is_intersecting());
        assert!((r.distance() - 3.0).abs() < 1.0e-6);

        let tilted = HalfSpace {
            normal: Vec3::x(),
            origin: Vec3::zeros(),
        };
        let r = plane_to_plane(&up, &tilted);
        assert!(r.is_intersecting());
        assert_eq!(r.point_a(), Vec3::zeros());
    }
}
