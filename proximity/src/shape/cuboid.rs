//! World-space corners, faces and edges of a box.
//!
//! Corner `i` takes the +x half extent when bit 0 of `i` is set, +y for bit 1
//! and +z for bit 2. Geometry is rebuilt from `size` and the placement on
//! every call.

use crate::closest::Triangle;

use super::types::{Transform, Vec3};

/// Quad faces as corner indices, wound counter-clockwise seen from outside.
pub const FACES: [[usize; 4]; 6] = [
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
];

/// The twelve edges as corner index pairs (x edges, then y, then z).
pub const EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Corners of a box placed in the world.
#[derive(Clone, Copy, Debug)]
pub struct CuboidGeometry {
    pub corners: [Vec3; 8],
}

impl CuboidGeometry {
    /// Corners of a box with full extents `size` under `transform` (scale applied).
    pub fn new(size: Vec3, transform: &Transform) -> Self {
        let corners = local_corners(size).map(|c| transform.transform_point_scaled(c));
        Self { corners }
    }

    /// The six faces split into two triangles each.
    pub fn triangles(&self) -> [Triangle; 12] {
        let c = &self.corners;
        let mut out = [Triangle::new(c[0], c[0], c[0]); 12];
        for (i, [q0, q1, q2, q3]) in FACES.into_iter().enumerate() {
            out[2 * i] = Triangle::new(c[q0], c[q1], c[q2]);
            out[2 * i + 1] = Triangle::new(c[q0], c[q2], c[q3]);
        }
        out
    }

    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        EDGES.map(|[a, b]| (self.corners[a], self.corners[b]))
    }

    /// Corner farthest along `direction`; the first corner wins ties.
    pub fn support_point(&self, direction: Vec3) -> Vec3 {
        let mut best = self.corners[0];
        let mut best_dot = best.dot(&direction);
        for c in &self.corners[1..] {
            let d = c.dot(&direction);
            if d > best_dot {
                best = *c;
                best_dot = d;
            }
        }
        best
    }
}

/// Corners of a box with full extents `size`, centered at the origin.
pub fn local_corners(size: Vec3) -> [Vec3; 8] {
    let h = size * 0.5;
    std::array::from_fn(|i| {
        Vec3::new(
            if i & 1 != 0 { h.x } else { -h.x },
            if i & 2 != 0 { h.y } else { -h.y },
            if i & 4 != 0 { h.z } else { -h.z },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Quat;
    use approx::assert_relative_eq;

    #[test]
    fn corners_follow_bit_layout() {
        let c = local_corners(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(c[0], Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(c[7], Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c[5], Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn faces_wind_outward() {
        let g = CuboidGeometry::new(Vec3::new(2.0, 2.0, 2.0), &Transform::default());
        for tri in g.triangles() {
            let centroid = (tri.a + tri.b + tri.c) / 3.0;
            assert!(tri.normal().dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn edges_are_axis_aligned_and_full_length() {
        let size = Vec3::new(2.0, 4.0, 6.0);
        let g = CuboidGeometry::new(size, &Transform::default());
        let lengths: Vec<f32> = g.edges().iter().map(|(a, b)| (b - a).norm()).collect();
        assert_eq!(lengths.iter().filter(|&&l| (l - 2.0).abs() < 1.0e-6).count(), 4);
        assert_eq!(lengths.iter().filter(|&&l| (l - 4.0).abs() < 1.0e-6).count(), 4);
        assert_eq!(lengths.iter().filter(|&&l| (l - 6.0).abs() < 1.0e-6).count(), 4);
    }

    #[test]
    fn placement_scales_then_rotates() {
        let t = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2),
        )
        .with_scale(Vec3::new(2.0, 1.0, 1.0));
        let g = CuboidGeometry::new(Vec3::new(1.0, 1.0, 1.0), &t);
        // Local (+0.5, -0.5, -0.5) scaled to (1, -0.5, -0.5), then x -> y.
        assert_relative_eq!(g.corners[1], Vec3::new(10.5, 1.0, -0.5), epsilon = 1.0e-5);
    }

    #[test]
    fn support_point_picks_farthest_corner() {
        let g = CuboidGeometry::new(Vec3::new(2.0, 2.0, 2.0), &Transform::default());
        assert_eq!(g.support_point(Vec3::new(1.0, -1.0, 1.0)), Vec3::new(1.0, -1.0, 1.0));
    }
}
