//! Sphere against every kind that has a point query.
//!
//! Each query runs the point query on the sphere center, then moves the
//! sphere-side point out to the sphere surface along the center-to-surface
//! direction. A pair intersects when either shape's own interior test
//! reports containment.

use crate::constants::fallback_axis;
use crate::result::DistanceResult;
use crate::shape::placed::{Ball, Capsule, Cuboid, Cylinder, HalfSpace, Torus};
use crate::utils::{normalize_or, order_sign};

use super::point;

/// Surface points face each other along the center line. Coincident centers
/// use the fallback axis, putting the points on opposite sides; its sign
/// follows the radii so swapping the operands reverses it. Identical spheres
/// have no such order and always use the positive axis.
pub fn sphere_to_sphere(a: &Ball, b: &Ball) -> DistanceResult {
    let fallback = fallback_axis() * order_sign(&[a.radius], &[b.radius]);
    let dir = normalize_or(b.center - a.center, fallback);
    let on_a = a.center + dir * a.radius;
    let on_b = b.center - dir * b.radius;
    let intersecting = (b.center - a.center).norm() < a.radius + b.radius;
    DistanceResult::new(on_a, on_b).with_intersecting(intersecting)
}

/// Inflate a point query made from the sphere center.
///
/// `hit` must carry the center as `point_a` and the other shape's nearest
/// point as `point_b`, flagged intersecting when the center is inside it.
fn around_center(sphere: &Ball, hit: DistanceResult) -> DistanceResult {
    let surface = hit.point_b();
    let to_surface = surface - sphere.center;
    let dir = normalize_or(to_surface, fallback_axis());
    let on_sphere = sphere.center + dir * sphere.radius;
    let intersecting = hit.is_intersecting() || to_surface.norm() < sphere.radius;
    DistanceResult::new(on_sphere, surface).with_intersecting(intersecting)
}

#[inline]
pub fn sphere_to_cuboid(sphere: &Ball, cuboid: &Cuboid) -> DistanceResult {
    around_center(sphere, point::point_to_cuboid(sphere.center, cuboid))
}

#[inline]
pub fn sphere_to_capsule(sphere: &Ball, capsule: &Capsule) -> DistanceResult {
    around_center(sphere, point::point_to_capsule(sphere.center, capsule))
}

#[inline]
pub fn sphere_to_cylinder(sphere: &Ball, cylinder: &Cylinder) -> DistanceResult {
    around_center(sphere, point::point_to_cylinder(sphere.center, cylinder))
}

#[inline]
pub fn sphere_to_plane(sphere: &Ball, plane: &HalfSpace) -> DistanceResult {
    around_center(sphere, point::point_to_plane(sphere.center, plane))
}

#[inline]
pub fn sphere_to_torus(sphere: &Ball, torus: &Torus) -> DistanceResult {
    around_center(sphere, point::point_to_torus(sphere.center, torus))
}
