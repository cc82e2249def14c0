use crate::constants::RAY_EPS;
use crate::shape::Vec3;

use super::triangle::Triangle;

/// Ray parameter `t` at which `origin + direction * t` hits the triangle, if any.
///
/// Moller-Trumbore. Rays parallel to the triangle's plane never hit, and only
/// hits strictly in front of the origin count.
pub fn ray_triangle_intersection(origin: Vec3, direction: Vec3, tri: &Triangle) -> Option<f32> {
    let e1 = tri.b - tri.a;
    let e2 = tri.c - tri.a;

    let h = direction.cross(&e2);
    let det = e1.dot(&h);
    if det.abs() < RAY_EPS {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - tri.a;
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&e1);
    let v = inv_det * direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * e2.dot(&q);
    (t >= f32::EPSILON).then_some(t)
}

/// Point where the segment `start -> end` crosses the triangle, if it does.
pub fn segment_triangle_intersection(start: Vec3, end: Vec3, tri: &Triangle) -> Option<Vec3> {
    let direction = end - start;
    ray_triangle_intersection(start, direction, tri)
        .filter(|&t| t <= 1.0)
        .map(|t| start + direction * t)
}

/// Number of triangles of an indexed mesh hit by the ray.
///
/// Index triples that point outside `vertices` are skipped.
pub fn ray_mesh_crossings(origin: Vec3, direction: Vec3, vertices: &[Vec3], indices: &[[u32; 3]]) -> usize {
    indices
        .iter()
        .filter_map(|idx| {
            let v = |i: u32| vertices.get(i as usize).copied();
            Some(Triangle::new(v(idx[0])?, v(idx[1])?, v(idx[2])?))
        })
        .filter(|tri| ray_triangle_intersection(origin, direction, tri).is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    fn cube() -> (Vec<Vec3>, Vec<[u32; 3]>) {
        let v = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -1.0 } else { 1.0 },
                    if i & 2 == 0 { -1.0 } else { 1.0 },
                    if i & 4 == 0 { -1.0 } else { 1.0 },
                )
            })
            .collect();
        let idx = vec![
            [0, 2, 1],
            [1, 2, 3],
            [4, 5, 6],
            [5, 7, 6],
            [0, 1, 4],
            [1, 5, 4],
            [2, 6, 3],
            [3, 6, 7],
            [0, 4, 2],
            [2, 4, 6],
            [1, 3, 5],
            [3, 7, 5],
        ];
        (v, idx)
    }

    #[test]
    fn ray_hits_triangle_in_front() {
        let t = ray_triangle_intersection(Vec3::new(0.0, 2.0, 0.0), -Vec3::y(), &floor());
        assert!((t.unwrap_or(-1.0) - 2.0).abs() < 1.0e-6);
    }

    #[test]
    fn ray_behind_or_parallel_misses() {
        assert_eq!(ray_triangle_intersection(Vec3::new(0.0, 2.0, 0.0), Vec3::y(), &floor()), None);
        assert_eq!(ray_triangle_intersection(Vec3::new(0.0, 2.0, 0.0), Vec3::x(), &floor()), None);
        assert_eq!(ray_triangle_intersection(Vec3::new(5.0, 2.0, 0.0), -Vec3::y(), &floor()), None);
    }

    #[test]
    fn segment_must_reach_the_triangle() {
        let hit = segment_triangle_intersection(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), &floor());
        assert!(hit.is_some_and(|p| p.norm() < 1.0e-6));

        let miss = segment_triangle_intersection(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0), &floor());
        assert_eq!(miss, None);
    }

    #[test]
    fn crossing_parity_classifies_cube_interior() {
        let (v, idx) = cube();
        let dir = Vec3::new(1.0, 0.123, 0.271);
        assert_eq!(ray_mesh_crossings(Vec3::new(0.1, 0.2, 0.05), dir, &v, &idx) % 2, 1);
        assert_eq!(ray_mesh_crossings(Vec3::new(3.0, 0.2, 0.05), dir, &v, &idx) % 2, 0);
        assert_eq!(ray_mesh_crossings(Vec3::new(-3.0, 0.2, 0.05), dir, &v, &idx), 2);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let (v, _) = cube();
        assert_eq!(ray_mesh_crossings(Vec3::zeros(), Vec3::x(), &v, &[[0, 1, 99]]), 0);
    }
}
