//! Signed distance functions in a shape's local frame.
//!
//! All functions return a negative value inside the shape, zero on the
//! surface and a positive value outside. They are used for inside/outside
//! classification, not for nearest points.

use nalgebra as na;

use crate::shape::Vec3;
use crate::utils::saturate;

/// Sphere of `radius` centered at the origin.
#[inline]
pub fn sphere(p: Vec3, radius: f32) -> f32 {
    p.norm() - radius
}

/// Axis-aligned box centered at the origin with full extents `size`.
pub fn cuboid(p: Vec3, size: Vec3) -> f32 {
    let d = p.abs() - size * 0.5;
    d.sup(&Vec3::zeros()).norm() + d.inf(&Vec3::zeros()).max()
}

/// Y-aligned infinite-capped cylinder: `max(|p.xz| - r, |p.y| - h)` with half height `h`.
#[inline]
pub fn cylinder(p: Vec3, radius: f32, half_height: f32) -> f32 {
    (p.xz().norm() - radius).max(p.y.abs() - half_height)
}

/// Flat-capped cylinder around the segment `a -> b`.
///
/// Exact outside the rim, where the radial and axial excesses combine.
pub fn capped_cylinder(p: Vec3, a: Vec3, b: Vec3, radius: f32) -> f32 {
    let ab = b - a;
    let len = ab.norm();
    if len <= f32::EPSILON {
        return (p - a).norm() - radius;
    }
    let axis = ab / len;
    let ap = p - a;
    let along = ap.dot(&axis);
    let radial = (ap - axis * along).norm() - radius;
    let axial = (along - len * 0.5).abs() - len * 0.5;
    if radial > 0.0 && axial > 0.0 {
        (radial * radial + axial * axial).sqrt()
    } else {
        radial.max(axial)
    }
}

/// Cone with its base disc of radius `r` in the y = 0 plane and its tip at y = `h`.
pub fn cone(p: Vec3, radius: f32, height: f32) -> f32 {
    let q = na::Vector2::new(p.xz().norm(), p.y);
    let tip = q - na::Vector2::new(0.0, height);
    let slope = na::Vector2::new(height, radius);
    let mantle_dir = slope.normalize();
    let mantle = tip.dot(&mantle_dir);
    let mut d = mantle.max(-q.y);
    let projected = tip.dot(&na::Vector2::new(mantle_dir.y, -mantle_dir.x));

    // Above the tip.
    if q.y > height && projected < 0.0 {
        d = d.max(tip.norm());
    }

    // Outside the base ring.
    if q.x > radius && projected > slope.norm() {
        d = d.max((q - na::Vector2::new(radius, 0.0)).norm());
    }
    d
}

/// Hexagonal prism along Y; `h.x` is the circumradius-derived half width,
/// `h.y` the half height.
pub fn hexagonal_prism(p: Vec3, h: na::Vector2<f32>) -> f32 {
    let q = p.abs();
    let across = (q.x * 3.0_f32.sqrt() * 0.5 + q.z * 0.5).max(q.z);
    (q.y - h.y).max(across - h.x)
}

/// Unit dodecahedron centered at the origin.
pub fn dodecahedron(p: Vec3) -> f32 {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let n = Vec3::new(phi, 1.0, 0.0).normalize();
    let q = p.abs();
    let a = q.dot(&n);
    let b = q.dot(&Vec3::new(n.z, n.x, n.y));
    let c = q.dot(&Vec3::new(n.y, n.z, n.x));
    a.max(b).max(c) - phi * n.y
}

/// Half-space bounded by the plane `dot(p, n) + d = 0`; negative on the side opposite `n`.
#[inline]
pub fn plane(p: Vec3, normal: Vec3, origin_distance: f32) -> f32 {
    p.dot(&normal) + origin_distance
}

/// Capsule around the segment `a -> b`.
#[inline]
pub fn capsule(p: Vec3, a: Vec3, b: Vec3, radius: f32) -> f32 {
    segment(p, a, b) - radius
}

/// Torus in the local XZ plane with ring `radius` and tube `thickness`.
#[inline]
pub fn torus(p: Vec3, radius: f32, thickness: f32) -> f32 {
    let q = na::Vector2::new(p.xz().norm() - radius, p.y);
    q.norm() - thickness
}

/// Unsigned distance from `p` to the segment `a -> b`.
pub fn segment(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    let t = if len_sq > f32::EPSILON {
        saturate((p - a).dot(&ab) / len_sq)
    } else {
        0.0
    };
    (a + ab * t - p).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cuboid_center_and_outside() {
        let size = Vec3::new(2.0, 2.0, 2.0);
        assert_relative_eq!(cuboid(Vec3::zeros(), size), -1.0);
        assert_relative_eq!(cuboid(Vec3::new(2.0, 0.0, 0.0), size), 1.0);
        assert_relative_eq!(cuboid(Vec3::new(1.0, 0.5, 0.0), size), 0.0);
    }

    #[test]
    fn cuboid_corner_distance_is_euclidean() {
        let d = cuboid(Vec3::new(2.0, 2.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        assert_relative_eq!(d, 2.0_f32.sqrt(), epsilon = 1.0e-6);
    }

    #[test]
    fn sphere_sign_matches_containment() {
        assert!(sphere(Vec3::new(0.5, 0.0, 0.0), 1.0) < 0.0);
        assert!(sphere(Vec3::new(1.5, 0.0, 0.0), 1.0) > 0.0);
    }

    #[test]
    fn cylinder_is_bounded_by_caps_and_side() {
        assert_relative_eq!(cylinder(Vec3::zeros(), 1.0, 2.0), -1.0);
        assert_relative_eq!(cylinder(Vec3::new(0.0, 3.0, 0.0), 1.0, 2.0), 1.0);
        assert_relative_eq!(cylinder(Vec3::new(3.0, 0.0, 0.0), 1.0, 2.0), 2.0);
    }

    #[test]
    fn capped_cylinder_matches_axis_aligned_form() {
        let a = Vec3::new(0.0, -2.0, 0.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        for p in [
            Vec3::zeros(),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.5, -1.0, 0.2),
        ] {
            assert_relative_eq!(capped_cylinder(p, a, b, 1.0), cylinder(p, 1.0, 2.0), epsilon = 1.0e-5);
        }
        // Past the rim the distance is to the edge circle.
        let d = capped_cylinder(Vec3::new(2.0, 3.0, 0.0), a, b, 1.0);
        assert_relative_eq!(d, 2.0_f32.sqrt(), epsilon = 1.0e-5);
    }

    #[test]
    fn capsule_and_segment() {
        let a = Vec3::zeros();
        let b = Vec3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(segment(Vec3::new(1.0, 1.0, 0.0), a, b), 1.0);
        assert_relative_eq!(segment(Vec3::new(0.0, 4.0, 0.0), a, b), 2.0);
        assert_relative_eq!(capsule(Vec3::new(0.25, 1.0, 0.0), a, b, 0.5), -0.25);
        // Degenerate segment behaves like a sphere.
        assert_relative_eq!(capsule(Vec3::new(2.0, 0.0, 0.0), a, a, 0.5), 1.5);
    }

    #[test]
    fn plane_is_signed_along_normal() {
        let n = Vec3::y();
        assert_relative_eq!(plane(Vec3::new(0.0, 2.0, 0.0), n, 0.0), 2.0);
        assert_relative_eq!(plane(Vec3::new(0.0, -1.0, 0.0), n, 0.5), -0.5);
    }

    #[test]
    fn torus_ring_and_hole() {
        assert_relative_eq!(torus(Vec3::new(2.0, 0.0, 0.0), 2.0, 0.5), -0.5);
        assert_relative_eq!(torus(Vec3::zeros(), 2.0, 0.5), 1.5);
        assert_relative_eq!(torus(Vec3::new(0.0, 1.0, 2.0), 2.0, 0.5), 0.5);
    }

    #[test]
    fn cone_inside_and_outside() {
        assert!(cone(Vec3::new(0.0, 0.5, 0.0), 1.0, 2.0) < 0.0);
        assert!(cone(Vec3::new(0.0, 3.0, 0.0), 1.0, 2.0) > 0.0);
        assert!(cone(Vec3::new(0.0, -1.0, 0.0), 1.0, 2.0) > 0.0);
        assert!(cone(Vec3::new(2.0, 0.1, 0.0), 1.0, 2.0) > 0.0);
    }

    #[test]
    fn hexagonal_prism_and_dodecahedron_contain_origin() {
        assert!(hexagonal_prism(Vec3::zeros(), na::Vector2::new(1.0, 1.0)) < 0.0);
        assert!(hexagonal_prism(Vec3::new(0.0, 2.0, 0.0), na::Vector2::new(1.0, 1.0)) > 0.0);
        assert!(dodecahedron(Vec3::zeros()) < 0.0);
        assert!(dodecahedron(Vec3::new(3.0, 0.0, 0.0)) > 0.0);
    }
}
