/*!
Triangle proximity: point projection, contact and triangle/triangle closest points.

The triangle/triangle query runs in two stages:
1) A separating-axis test decides contact. Overlapping triangles report an
   intersecting result with zero points; the contact point is not resolved.
2) Otherwise the closest pair is either between two edges or between a vertex
   and the opposite triangle. Edge pairs are tried first and the search stops
   early once both triangles lie on their own side of the candidate
   separating direction.
*/

use crate::constants::NORM_SQ_EPS;
use crate::result::{DistanceResult, nearest};
use crate::shape::Vec3;

use super::segment::{segment_to_point_nearest_point, segment_to_segment_nearest_points};

/// A triangle by its three world-space vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1` (mod 3).
    #[inline]
    pub fn edge(&self, i: usize) -> (Vec3, Vec3) {
        let v = self.vertices();
        (v[i % 3], v[(i + 1) % 3])
    }

    /// Unnormalized face normal `(b - a) x (c - a)`.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        closest_point_on_triangle(point, self.a, self.b, self.c)
    }
}

/// Nearest point on the triangle `a, b, c` to `point`.
///
/// Projects into the triangle's plane with barycentric coordinates. When the
/// projection falls outside (or the triangle is degenerate) the nearest of the
/// three edge projections is used instead.
pub fn closest_point_on_triangle(point: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let u = b - a;
    let v = c - a;
    let n = u.cross(&v);
    let nn = n.norm_squared();

    if nn > NORM_SQ_EPS {
        let w = point - a;
        let gamma = u.cross(&w).dot(&n) / nn;
        let beta = w.cross(&v).dot(&n) / nn;
        let alpha = 1.0 - gamma - beta;
        let inside = |x: f32| (0.0..=1.0).contains(&x);
        if inside(alpha) && inside(beta) && inside(gamma) {
            return a * alpha + b * beta + c * gamma;
        }
    }

    let mut best = a;
    let mut best_d = f32::INFINITY;
    for (start, end) in [(a, b), (b, c), (c, a)] {
        let (p, _) = segment_to_point_nearest_point(start, end, point);
        let d = (p - point).norm_squared();
        if d < best_d {
            best = p;
            best_d = d;
        }
    }
    best
}

/// True when the triangles touch or overlap.
///
/// Separating-axis test over both face normals, the nine edge/edge cross
/// products and each triangle's edges crossed with its own normal (the
/// coplanar case). Zero-length axes never separate.
pub fn triangles_overlap(t1: &Triangle, t2: &Triangle) -> bool {
    let n1 = t1.normal();
    let n2 = t2.normal();
    let e = [t1.b - t1.a, t1.c - t1.b, t1.a - t1.c];
    let f = [t2.b - t2.a, t2.c - t2.b, t2.a - t2.c];

    let mut axes = Vec::with_capacity(17);
    axes.push(n1);
    axes.push(n2);
    for ei in &e {
        for fj in &f {
            axes.push(ei.cross(fj));
        }
    }
    axes.extend(e.iter().map(|ei| ei.cross(&n1)));
    axes.extend(f.iter().map(|fj| fj.cross(&n2)));

    axes.iter().all(|axis| intervals_overlap(axis, t1, t2))
}

fn intervals_overlap(axis: &Vec3, t1: &Triangle, t2: &Triangle) -> bool {
    let project = |t: &Triangle| {
        let p = t.vertices().map(|v| v.dot(axis));
        (p[0].min(p[1]).min(p[2]), p[0].max(p[1]).max(p[2]))
    };
    let (min1, max1) = project(t1);
    let (min2, max2) = project(t2);
    min1 <= max2 && min2 <= max1
}

/// Closest points between two triangles; `point_a` lies on `t1`.
pub fn closest_points_tri_to_tri(t1: &Triangle, t2: &Triangle) -> DistanceResult {
    if triangles_overlap(t1, t2) {
        return DistanceResult::default().with_intersecting(true);
    }

    let v1 = t1.vertices();
    let v2 = t2.vertices();

    // 1) Edge pairs, with the early exit once the separating direction is proven.
    let mut best: Option<DistanceResult> = None;
    for i in 0..3 {
        let (a0, a1) = t1.edge(i);
        for j in 0..3 {
            let (b0, b1) = t2.edge(j);
            let (p, q) = segment_to_segment_nearest_points(a0, a1, b0, b1);
            let candidate = DistanceResult::new(p, q);
            if best.as_ref().map_or(true, |b| candidate.is_closer_than(b)) {
                best = Some(candidate);
            }

            let sep = q - p;
            let away_a = (v1[(i + 2) % 3] - p).dot(&sep);
            let away_b = (v2[(j + 2) % 3] - q).dot(&sep);
            if away_a <= 0.0 && away_b >= 0.0 {
                return candidate;
            }
        }
    }

    // 2) Vertices of each triangle against the other's face.
    let to_t1 = v2.iter().map(|&v| DistanceResult::new(t1.closest_point(v), v));
    let to_t2 = v1.iter().map(|&v| DistanceResult::new(v, t2.closest_point(v)));

    nearest(best.into_iter().chain(to_t1).chain(to_t2)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn point_above_triangle_projects_inside() {
        let p = closest_point_on_triangle(
            Vec3::new(0.25, 5.0, 0.25),
            Vec3::zeros(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(p, Vec3::new(0.25, 0.0, 0.25), epsilon = 1.0e-6);
    }

    #[test]
    fn point_outside_uses_nearest_edge() {
        let p = closest_point_on_triangle(
            Vec3::new(2.0, 1.0, -1.0),
            Vec3::zeros(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(p, Vec3::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);

        let p = closest_point_on_triangle(
            Vec3::new(0.5, 0.0, -2.0),
            Vec3::zeros(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(p, Vec3::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn degenerate_triangle_falls_back_to_edges() {
        let p = closest_point_on_triangle(
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::zeros(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert!(p.iter().all(|c| c.is_finite()));
        assert_relative_eq!(p, Vec3::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn piercing_triangles_overlap() {
        let t1 = tri([-1.0, 0.0, -1.0], [1.0, 0.0, -1.0], [0.0, 0.0, 1.0]);
        let t2 = tri([0.0, -1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.5]);
        assert!(triangles_overlap(&t1, &t2));

        let r = closest_points_tri_to_tri(&t1, &t2);
        assert!(r.is_intersecting());
        assert_eq!(r.distance(), 0.0);
        assert_eq!(r.point_a(), Vec3::zeros());
    }

    #[test]
    fn coplanar_disjoint_triangles_do_not_overlap() {
        let t1 = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let t2 = tri([3.0, 0.0, 0.0], [4.0, 0.0, 0.0], [3.0, 0.0, 1.0]);
        assert!(!triangles_overlap(&t1, &t2));
        let r = closest_points_tri_to_tri(&t1, &t2);
        assert!(!r.is_intersecting());
        assert!((r.distance() - 2.0).abs() < 1.0e-5);
    }

    #[test]
    fn parallel_stacked_triangles_use_face_distance() {
        let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 2.0]);
        let t2 = tri([0.5, 1.0, 0.5], [1.0, 1.0, 0.5], [0.5, 1.0, 1.0]);
        let r = closest_points_tri_to_tri(&t1, &t2);
        assert!(!r.is_intersecting());
        assert!((r.distance() - 1.0).abs() < 1.0e-5);
        assert!(r.point_a().y.abs() < 1.0e-6);
        assert!((r.point_b().y - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn vertex_above_face_is_found() {
        // t2 points a vertex down at the interior of t1.
        let t1 = tri([-2.0, 0.0, -2.0], [2.0, 0.0, -2.0], [0.0, 0.0, 2.0]);
        let t2 = tri([0.0, 0.5, 0.0], [-1.0, 3.0, 0.0], [1.0, 3.0, 0.0]);
        let r = closest_points_tri_to_tri(&t1, &t2);
        assert!((r.distance() - 0.5).abs() < 1.0e-5);
        assert_relative_eq!(r.point_a(), Vec3::zeros(), epsilon = 1.0e-5);
        assert_relative_eq!(r.point_b(), Vec3::new(0.0, 0.5, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn skew_edges_are_closest() {
        let t1 = tri([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]);
        let t2 = tri([0.0, 1.0, -1.0], [0.0, 1.0, 1.0], [0.0, 2.0, 0.0]);
        let r = closest_points_tri_to_tri(&t1, &t2);
        assert!((r.distance() - 1.0).abs() < 1.0e-5);
        assert_relative_eq!(r.point_a(), Vec3::zeros(), epsilon = 1.0e-5);
        assert_relative_eq!(r.point_b(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1.0e-5);
    }
}
