//! Box against capsule and plane by brute force over faces and edges.

use crate::closest::{Triangle, segment_to_segment_nearest_points, segment_triangle_intersection};
use crate::result::{DistanceResult, nearest};
use crate::shape::Vec3;
use crate::shape::placed::{Capsule, Cuboid, HalfSpace};
use crate::utils::{any_perpendicular, normalize_or};

use super::plane::segment_to_plane;

/// Nearest points between a segment and a triangle as `(on_segment, on_triangle)`.
fn segment_to_triangle(start: Vec3, end: Vec3, tri: &Triangle) -> (Vec3, Vec3) {
    if let Some(hit) = segment_triangle_intersection(start, end, tri) {
        return (hit, hit);
    }

    let mut best = (start, tri.closest_point(start));
    let mut best_dist = (best.0 - best.1).norm();
    let mut consider = |pair: (Vec3, Vec3)| {
        let d = (pair.0 - pair.1).norm();
        if d < best_dist {
            best = pair;
            best_dist = d;
        }
    };

    consider((end, tri.closest_point(end)));
    for i in 0..3 {
        let (e0, e1) = tri.edge(i);
        consider(segment_to_segment_nearest_points(start, end, e0, e1));
    }
    best
}

/// `point_a` on the box, `point_b` on the capsule surface.
///
/// Intersecting when the capsule core comes within its radius of a face, or
/// when the core starts inside the box.
pub fn cuboid_to_capsule(cuboid: &Cuboid, capsule: &Capsule) -> DistanceResult {
    let faces = cuboid.geometry().triangles();
    let core = nearest(faces.iter().map(|tri| {
        let (on_segment, on_box) = segment_to_triangle(capsule.start, capsule.end, tri);
        DistanceResult::new(on_box, on_segment)
    }))
    .unwrap_or_default();

    let on_box = core.point_a();
    let on_segment = core.point_b();
    let dir = normalize_or(on_box - on_segment, any_perpendicular(capsule.end - capsule.start));
    let on_capsule = on_segment + dir * capsule.radius;

    let intersecting = core.raw_distance() < capsule.radius || cuboid.contains(capsule.start);
    DistanceResult::new(on_box, on_capsule).with_intersecting(intersecting)
}

/// Every box edge against the half-space; the first edge touching the solid wins.
pub fn cuboid_to_plane(cuboid: &Cuboid, plane: &HalfSpace) -> DistanceResult {
    let edges = cuboid.geometry().edges();
    let per_edge = edges.map(|(e0, e1)| segment_to_plane(e0, e1, plane));

    match per_edge.iter().find(|r| r.is_intersecting()) {
        Some(hit) => *hit,
        None => nearest(per_edge).unwrap_or_default(),
    }
}
