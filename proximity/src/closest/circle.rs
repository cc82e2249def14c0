use crate::constants::{CIRCLE_EPS, NORM_SQ_EPS};
use crate::shape::Vec3;
use crate::utils::{any_perpendicular, normalize_or, normalize_or_zero};

use super::segment::{SegmentRegion, segment_to_point_nearest_point};

/// A circle in 3D: center, unit plane normal and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

impl Circle {
    /// Zero normals are replaced with +Y.
    #[inline]
    pub fn new(center: Vec3, normal: Vec3, radius: f32) -> Self {
        Self {
            center,
            normal: normalize_or(normal, Vec3::y()),
            radius,
        }
    }

    /// A fixed in-plane direction, used whenever every circle point is equally near.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        any_perpendicular(self.normal)
    }

    /// Nearest point on the circle to `point`.
    ///
    /// Points on the circle's axis are equidistant from the whole circle and
    /// resolve to the `forward` point.
    pub fn nearest_point(&self, point: Vec3) -> Vec3 {
        let v = point - self.center;
        let in_plane = v - self.normal * v.dot(&self.normal);
        if in_plane.norm_squared() <= NORM_SQ_EPS {
            return self.center + self.forward() * self.radius;
        }
        self.center + in_plane.normalize() * self.radius
    }
}

/// Nearest points between the segment `start -> end` and `circle`.
///
/// Returns `(on_segment, on_circle)`.
///
/// Case split:
/// - The segment's line passes through the center along the circle axis:
///   every circle point is equally near, use `forward`.
/// - The line passes through the center obliquely: compare each endpoint's
///   candidate against the circle point under the line's in-plane direction.
/// - General: compare the segment point nearest the center and both endpoints,
///   each projected onto the circle, and keep the closest pair.
pub fn segment_to_circle_nearest_points(start: Vec3, end: Vec3, circle: &Circle) -> (Vec3, Vec3) {
    let segment = end - start;
    let dir = normalize_or_zero(segment);
    if dir == Vec3::zeros() {
        return (start, circle.nearest_point(start));
    }

    let center = circle.center;
    let up = circle.normal;
    let (segment_point, region) = segment_to_point_nearest_point(start, end, center);

    let start_pair = (start, circle.nearest_point(start));
    let end_pair = (end, circle.nearest_point(end));
    let pair_distance = |(a, b): (Vec3, Vec3)| (a - b).norm();

    let through_center = dir.cross(&normalize_or_zero(center - start)).norm() < CIRCLE_EPS;
    if through_center {
        let forward_point = center + circle.forward() * circle.radius;

        if dir.dot(&up).abs() >= 1.0 - CIRCLE_EPS {
            if region == SegmentRegion::Interior {
                return (segment_point, forward_point);
            }
            let near_a = if (start - forward_point).norm() < (end - forward_point).norm() {
                start
            } else {
                end
            };
            return (near_a, forward_point);
        }

        let in_plane = normalize_or(dir - up * dir.dot(&up), circle.forward());
        let ring_point = center + in_plane * circle.radius;
        let (line_point, _) = segment_to_point_nearest_point(start, end, ring_point);
        let line_pair = (line_point, ring_point);

        return closest_pair(line_pair, start_pair, end_pair, pair_distance);
    }

    let segment_pair = (segment_point, circle.nearest_point(segment_point));
    closest_pair(segment_pair, start_pair, end_pair, pair_distance)
}

/// `primary` unless an endpoint pair is strictly closer; ties between endpoints favor `end`.
fn closest_pair<F>(
    primary: (Vec3, Vec3),
    start: (Vec3, Vec3),
    end: (Vec3, Vec3),
    distance: F,
) -> (Vec3, Vec3)
where
    F: Fn((Vec3, Vec3)) -> f32,
{
    let d_primary = distance(primary);
    let d_start = distance(start);
    let d_end = distance(end);
    if d_end < d_primary && d_end <= d_start {
        end
    } else if d_start < d_primary && d_start <= d_end {
        start
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_circle() -> Circle {
        Circle::new(Vec3::zeros(), Vec3::y(), 1.0)
    }

    #[test]
    fn nearest_point_projects_into_plane() {
        let p = unit_circle().nearest_point(Vec3::new(3.0, 5.0, 0.0));
        assert_relative_eq!(p, Vec3::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn nearest_point_on_axis_uses_forward() {
        let c = unit_circle();
        for p in [Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0)] {
            let n = c.nearest_point(p);
            assert!(n.iter().all(|v| v.is_finite()));
            assert!((n.norm() - 1.0).abs() < 1.0e-5);
            assert!(n.y.abs() < 1.0e-6);
        }
    }

    #[test]
    fn axis_segment_through_center() {
        let c = unit_circle();
        let (a, b) = segment_to_circle_nearest_points(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0), &c);
        assert_relative_eq!(a, Vec3::zeros(), epsilon = 1.0e-6);
        assert!(((a - b).norm() - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn axis_segment_beside_center_uses_nearer_endpoint() {
        let c = unit_circle();
        let (a, b) = segment_to_circle_nearest_points(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0), &c);
        assert_relative_eq!(a, Vec3::new(0.0, 1.0, 0.0), epsilon = 1.0e-6);
        assert!(b.y.abs() < 1.0e-6);
    }

    #[test]
    fn in_plane_segment_through_center_touches_ring() {
        let c = unit_circle();
        let (a, b) = segment_to_circle_nearest_points(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0), &c);
        // The ring point along the segment direction is 0.5 from the segment's end.
        assert!(((a - b).norm() - 0.5).abs() < 1.0e-5);
    }

    #[test]
    fn general_segment_above_ring() {
        let c = Circle::new(Vec3::zeros(), Vec3::y(), 2.0);
        let (a, b) = segment_to_circle_nearest_points(Vec3::new(2.0, 1.0, -1.0), Vec3::new(2.0, 1.0, 1.0), &c);
        assert_relative_eq!(a, Vec3::new(2.0, 1.0, 0.0), epsilon = 1.0e-5);
        assert_relative_eq!(b, Vec3::new(2.0, 0.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn degenerate_segment_is_a_point_query() {
        let c = unit_circle();
        let p = Vec3::new(3.0, 0.0, 0.0);
        let (a, b) = segment_to_circle_nearest_points(p, p, &c);
        assert_eq!(a, p);
        assert_relative_eq!(b, Vec3::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);
    }
}
