//! Point against every primitive kind. `point_a` is the query point,
//! `point_b` the nearest point on the shape.

use crate::closest::{SegmentRegion, segment_to_point_nearest_point};
use crate::constants::fallback_axis;
use crate::result::{DistanceResult, nearest};
use crate::shape::Vec3;
use crate::shape::placed::{Ball, Capsule, Cuboid, Cylinder, HalfSpace, Torus};
use crate::utils::{any_perpendicular, normalize_or};

#[inline]
pub fn point_to_point(a: Vec3, b: Vec3) -> DistanceResult {
    DistanceResult::new(a, b)
}

/// The stored distance is negated while the point is inside.
pub fn point_to_sphere(point: Vec3, sphere: &Ball) -> DistanceResult {
    let to_center = sphere.center - point;
    let dir = normalize_or(to_center, fallback_axis());
    let surface = sphere.center - dir * sphere.radius;
    let inside = to_center.norm() < sphere.radius;

    let r = DistanceResult::new(point, surface).with_intersecting(inside);
    if inside { r.with_raw_distance(-r.raw_distance()) } else { r }
}

pub fn point_to_capsule(point: Vec3, capsule: &Capsule) -> DistanceResult {
    let (on_axis, _) = segment_to_point_nearest_point(capsule.start, capsule.end, point);
    let offset = point - on_axis;
    let dir = normalize_or(offset, any_perpendicular(capsule.end - capsule.start));
    let surface = on_axis + dir * capsule.radius;
    DistanceResult::new(point, surface).with_intersecting(offset.norm() < capsule.radius)
}

/// Side wall for points level with the axis, flat caps past either end.
///
/// Inside points take whichever of the wall and the nearer cap is closer.
pub fn point_to_cylinder(point: Vec3, cylinder: &Cylinder) -> DistanceResult {
    let (start, end, radius) = (cylinder.start, cylinder.end, cylinder.radius);
    let axis = end - start;
    let (on_axis, region) = segment_to_point_nearest_point(start, end, point);

    match region {
        SegmentRegion::Interior => {
            let offset = point - on_axis;
            let dir = normalize_or(offset, any_perpendicular(axis));
            let wall = on_axis + dir * radius;
            let inside = offset.norm() < radius;
            if !inside {
                return DistanceResult::new(point, wall);
            }

            let to_start = (on_axis - start).norm();
            let to_end = (end - on_axis).norm();
            let wall_gap = radius - offset.norm();
            let surface = if to_start.min(to_end) < wall_gap {
                let cap = if to_start <= to_end { start } else { end };
                cap + offset
            } else {
                wall
            };
            DistanceResult::new(point, surface).with_intersecting(true)
        }
        SegmentRegion::Start | SegmentRegion::End => {
            let (cap, outward) = if region == SegmentRegion::Start {
                (start, start - end)
            } else {
                (end, end - start)
            };
            let n = normalize_or(outward, Vec3::zeros());
            let projected = point - n * (point - cap).dot(&n);
            let radial = projected - cap;
            let len = radial.norm();
            let clamped = if len > radius { radial * (radius / len) } else { radial };
            DistanceResult::new(point, cap + clamped)
        }
    }
}

/// Nearest point over the box's twelve face triangles; inside test on the scaled box.
pub fn point_to_cuboid(point: Vec3, cuboid: &Cuboid) -> DistanceResult {
    let faces = cuboid.geometry().triangles();
    let best = nearest(
        faces
            .iter()
            .map(|tri| DistanceResult::new(point, tri.closest_point(point))),
    )
    .unwrap_or_default();
    best.with_intersecting(cuboid.contains(point))
}

pub fn point_to_plane(point: Vec3, plane: &HalfSpace) -> DistanceResult {
    let signed = plane.signed_distance(point);
    DistanceResult::new(point, point - plane.normal * signed).with_intersecting(signed < 0.0)
}

/// Nearest point on the core circle, pushed out by the tube thickness toward the point.
pub fn point_to_torus(point: Vec3, torus: &Torus) -> DistanceResult {
    let core = torus.core().nearest_point(point);
    let offset = point - core;
    let dir = normalize_or(offset, torus.up);
    let surface = core + dir * torus.thickness;
    DistanceResult::new(point, surface).with_intersecting(offset.norm() < torus.thickness)
}
