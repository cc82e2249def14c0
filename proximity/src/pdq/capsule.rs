//! Capsule against capsule, plane and torus through its core segment.

use crate::closest::{segment_to_circle_nearest_points, segment_to_segment_nearest_points};
use crate::result::DistanceResult;
use crate::constants::NORM_SQ_EPS;
use crate::shape::Vec3;
use crate::shape::placed::{Capsule, HalfSpace, Torus};
use crate::utils::{any_perpendicular, normalize_or, order_sign};

use super::plane::segment_to_plane;

/// Core segments' nearest points pushed out by each radius.
///
/// Touching cores have no center line, so the offset falls back to a
/// direction that reverses with the operands: `a_axis × b_axis` for crossing
/// cores, else a perpendicular of the shared axis signed by operand order.
pub fn capsule_to_capsule(a: &Capsule, b: &Capsule) -> DistanceResult {
    let (on_a, on_b) = segment_to_segment_nearest_points(a.start, a.end, b.start, b.end);
    let between = on_b - on_a;
    let dir = normalize_or(between, touching_cores_direction(a, b));
    DistanceResult::new(on_a + dir * a.radius, on_b - dir * b.radius)
        .with_intersecting(between.norm() < a.radius + b.radius)
}

fn touching_cores_direction(a: &Capsule, b: &Capsule) -> Vec3 {
    let a_axis = a.end - a.start;
    let b_axis = b.end - b.start;
    let cross = normalize_or(a_axis, Vec3::zeros()).cross(&normalize_or(b_axis, Vec3::zeros()));
    if cross.norm_squared() > NORM_SQ_EPS {
        return cross.normalize();
    }

    // Parallel or zero-length cores: one perpendicular for the unordered pair.
    let axis = if a_axis.norm_squared() >= b_axis.norm_squared() { a_axis } else { b_axis };
    let axis = if axis[axis.iamax()] < 0.0 { -axis } else { axis };
    any_perpendicular(axis) * order_sign(&capsule_key(a), &capsule_key(b))
}

fn capsule_key(c: &Capsule) -> [f32; 7] {
    [c.start.x, c.start.y, c.start.z, c.end.x, c.end.y, c.end.z, c.radius]
}

/// Core segment against the half-space, then offset toward the plane by the radius.
pub fn capsule_to_plane(capsule: &Capsule, plane: &HalfSpace) -> DistanceResult {
    let core = segment_to_plane(capsule.start, capsule.end, plane);
    let on_plane = core.point_b();
    if core.is_intersecting() || core.raw_distance() < capsule.radius {
        return DistanceResult::contact(on_plane);
    }
    DistanceResult::new(core.point_a() - plane.normal * capsule.radius, on_plane)
}

/// Core segment against the ring circle, offset by radius and tube thickness.
pub fn capsule_to_torus(capsule: &Capsule, torus: &Torus) -> DistanceResult {
    let (on_segment, on_ring) = segment_to_circle_nearest_points(capsule.start, capsule.end, &torus.core());
    let to_ring = on_ring - on_segment;
    let dir = normalize_or(to_ring, torus.up);
    DistanceResult::new(on_segment + dir * capsule.radius, on_ring - dir * torus.thickness)
        .with_intersecting(to_ring.norm() < torus.thickness + capsule.radius)
}
