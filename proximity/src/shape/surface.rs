/*!
Triangulated surfaces behind a provider trait.

The distance engine never inspects surface geometry itself: it asks a
`SurfaceDistanceProvider`, which may run on the CPU, batch work to a compute
backend or answer from a cache. `TriMeshSurface` is the CPU implementation,
built on a parry3d `TriMesh`:

- point queries project onto the mesh with parry's `PointQuery`;
- inside/outside comes from the parity of ray crossings (closed meshes only);
- spheres inflate the point query by their radius;
- surface/surface queries run triangle/triangle over every triangle pair,
  O(n·m) in the triangle counts with no spatial pruning. Providers serving
  dense meshes should override `distance_to_primitive` with a BVH-backed query.
*/

use std::fmt;

use nalgebra as na;
use parry3d::query::PointQuery;
use parry3d::shape::TriMesh;

use crate::closest::{Triangle, closest_points_tri_to_tri, ray_mesh_crossings};
use crate::constants::fallback_axis;
use crate::error::{ShapeError, ShapeResult};
use crate::result::{DistanceResult, nearest};
use crate::utils::normalize_or;

use super::Primitive;
use super::types::{Shape, Transform, Vec3};

/// Answers distance queries for a triangulated surface placed by `transform`.
///
/// Results put `point_a` on the surface.
pub trait SurfaceDistanceProvider: fmt::Debug + Send + Sync {
    /// Nearest surface point to `point`; intersecting when `point` is inside.
    fn distance_to_point(&self, transform: &Transform, point: Vec3) -> DistanceResult;

    /// Distance to another primitive, or `None` when the pairing is not supported.
    ///
    /// Point primitives are always answered through `distance_to_point`.
    fn distance_to_primitive(&self, transform: &Transform, other: &Primitive) -> Option<DistanceResult> {
        match other.shape {
            Shape::Point => Some(self.distance_to_point(transform, other.transform.translation)),
            _ => None,
        }
    }

    /// World-space triangles, when the provider can expose them.
    fn triangles(&self, _transform: &Transform) -> Option<Vec<Triangle>> {
        None
    }
}

/// Direction of the inside/outside parity ray, skewed off the axes so it
/// rarely grazes edges of axis-aligned meshes.
const PARITY_RAY: [f32; 3] = [0.577_215_7, 0.301_029_9, 0.759_134_5];

/// CPU triangle mesh surface.
#[derive(Clone)]
pub struct TriMeshSurface {
    mesh: TriMesh,
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl fmt::Debug for TriMeshSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMeshSurface")
            .field("vertices", &self.vertices.len())
            .field("triangles", &self.indices.len())
            .finish()
    }
}

impl TriMeshSurface {
    /// Build from local-space vertices and triangle indices.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> ShapeResult<Self> {
        if indices.is_empty() {
            return Err(ShapeError::EmptyMesh);
        }
        let points = vertices.iter().map(|v| na::Point3::from(*v)).collect();
        let mesh = TriMesh::new(points, indices.clone())
            .map_err(|err| ShapeError::invalid_mesh(format!("{err:?}")))?;
        Ok(Self {
            mesh,
            vertices,
            indices,
        })
    }

    #[inline]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// Parity inside test in the mesh's local frame.
    ///
    /// Works for any closed mesh. parry's projection only reports `is_inside`
    /// for meshes built with oriented pseudo-normals.
    pub fn contains_local(&self, local: Vec3) -> bool {
        ray_mesh_crossings(local, Vec3::from(PARITY_RAY), &self.vertices, &self.indices) % 2 == 1
    }
}

impl SurfaceDistanceProvider for TriMeshSurface {
    fn distance_to_point(&self, transform: &Transform, point: Vec3) -> DistanceResult {
        let iso = transform.iso();
        let projection = self.mesh.project_point(&iso, &na::Point3::from(point), false);
        let local = iso.inverse_transform_point(&na::Point3::from(point)).coords;
        DistanceResult::new(projection.point.coords, point).with_intersecting(self.contains_local(local))
    }

    fn distance_to_primitive(&self, transform: &Transform, other: &Primitive) -> Option<DistanceResult> {
        match &other.shape {
            Shape::Point => Some(self.distance_to_point(transform, other.transform.translation)),
            Shape::Sphere { radius } => {
                let center = other.transform.translation;
                let hit = self.distance_to_point(transform, center);
                let surface = hit.point_a();
                let dir = normalize_or(surface - center, fallback_axis());
                let intersecting = hit.is_intersecting() || (surface - center).norm() < *radius;
                Some(DistanceResult::new(surface, center + dir * *radius).with_intersecting(intersecting))
            }
            // Every triangle pair; see the module notes on cost.
            Shape::Surface(provider) => {
                let theirs = provider.triangles(&other.transform)?;
                let ours = self.triangles(transform)?;
                let pairs = ours
                    .iter()
                    .flat_map(|a| theirs.iter().map(move |b| closest_points_tri_to_tri(a, b)));
                nearest(pairs)
            }
            _ => None,
        }
    }

    fn triangles(&self, transform: &Transform) -> Option<Vec<Triangle>> {
        let iso = transform.iso();
        Some(
            self.mesh
                .triangles()
                .map(|t| Triangle::new((iso * t.a).coords, (iso * t.b).coords, (iso * t.c).coords))
                .collect(),
        )
    }
}
