/*!
Shape root module.

A `Primitive` is a closed shape kind, its world placement and an `invert`
flag. The code is split for clarity:

- types:   math aliases, `Transform`, `Direction`, the `Shape` enum
- placed:  world-space views resolved from a primitive
- cuboid:  box corners, faces and edges
- surface: the provider trait for triangulated surfaces and a CPU mesh
- group:   point sets and primitive sets with minimum-distance queries
*/

pub mod cuboid;
pub mod group;
pub mod placed;
pub mod surface;
pub mod types;

use std::sync::Arc;

pub use group::{PointSet, PrimitiveSet, ShapeGroup};
pub use placed::Placed;
pub use surface::{SurfaceDistanceProvider, TriMeshSurface};
pub use types::{Direction, Iso, Quat, Shape, ShapeKind, Transform, Vec3};

use crate::error::{ShapeResult, check_non_negative};
use crate::pdq;
use crate::result::DistanceResult;
use crate::sdf;

/// A shape placed in the world.
#[derive(Clone, Debug)]
pub struct Primitive {
    pub shape: Shape,
    pub transform: Transform,
    /// Flip the intersecting polarity of every result involving this shape.
    pub invert: bool,
}

impl Primitive {
    #[inline]
    pub fn new(shape: Shape, transform: Transform) -> Self {
        Self {
            shape,
            transform,
            invert: false,
        }
    }

    #[inline]
    pub fn point(position: Vec3) -> Self {
        Self::new(Shape::Point, Transform::from_translation(position))
    }

    #[inline]
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::new(Shape::Sphere { radius }, Transform::from_translation(center))
    }

    #[inline]
    pub fn cuboid(size: Vec3, transform: Transform) -> Self {
        Self::new(Shape::Cuboid { size }, transform)
    }

    #[inline]
    pub fn capsule(local_start: Vec3, local_end: Vec3, radius: f32, transform: Transform) -> Self {
        Self::new(
            Shape::Capsule {
                local_start,
                local_end,
                radius,
            },
            transform,
        )
    }

    #[inline]
    pub fn cylinder(local_start: Vec3, local_end: Vec3, radius: f32, transform: Transform) -> Self {
        Self::new(
            Shape::Cylinder {
                local_start,
                local_end,
                radius,
            },
            transform,
        )
    }

    #[inline]
    pub fn plane(normal: Direction, height: f32, transform: Transform) -> Self {
        Self::new(Shape::Plane { normal, height }, transform)
    }

    #[inline]
    pub fn torus(radius: f32, thickness: f32, transform: Transform) -> Self {
        Self::new(Shape::Torus { radius, thickness }, transform)
    }

    #[inline]
    pub fn surface(provider: Arc<dyn SurfaceDistanceProvider>, transform: Transform) -> Self {
        Self::new(Shape::Surface(provider), transform)
    }

    #[inline]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Reject negative or non-finite size parameters.
    pub fn validate(&self) -> ShapeResult<()> {
        match &self.shape {
            Shape::Point | Shape::Plane { .. } | Shape::Surface(_) => Ok(()),
            Shape::Sphere { radius } | Shape::Capsule { radius, .. } | Shape::Cylinder { radius, .. } => {
                check_non_negative("radius", *radius)
            }
            Shape::Cuboid { size } => {
                check_non_negative("size.x", size.x)?;
                check_non_negative("size.y", size.y)?;
                check_non_negative("size.z", size.z)
            }
            Shape::Torus { radius, thickness } => {
                check_non_negative("radius", *radius)?;
                check_non_negative("thickness", *thickness)
            }
        }
    }

    /// `point` in this shape's local frame (translation and rotation, no scale).
    #[inline]
    pub fn relative_point(&self, point: Vec3) -> Vec3 {
        self.transform.relative_point(point)
    }

    /// Signed distance from `point` to the shape, negative inside.
    ///
    /// Box scale is not applied here; callers with scaled boxes should use
    /// `distance_to_point`, whose inside test honours scale.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        let local = self.relative_point(point);
        match &self.shape {
            Shape::Point => local.norm(),
            Shape::Sphere { radius } => sdf::sphere(local, *radius),
            Shape::Cuboid { size } => sdf::cuboid(local, *size),
            Shape::Capsule {
                local_start,
                local_end,
                radius,
            } => sdf::capsule(local, *local_start, *local_end, *radius),
            Shape::Cylinder {
                local_start,
                local_end,
                radius,
            } => sdf::capped_cylinder(local, *local_start, *local_end, *radius),
            Shape::Plane { normal, height } => sdf::plane(local, normal.vector(), *height),
            Shape::Torus { radius, thickness } => sdf::torus(local, *radius, *thickness),
            Shape::Surface(provider) => {
                let r = provider.distance_to_point(&self.transform, point);
                if r.is_intersecting() {
                    -r.raw_distance().abs()
                } else {
                    r.raw_distance()
                }
            }
        }
    }

    /// Resolve into world space.
    pub fn placed(&self) -> Placed<'_> {
        let t = &self.transform;
        match &self.shape {
            Shape::Point => Placed::Point(t.translation),
            Shape::Sphere { radius } => Placed::Ball(placed::Ball {
                center: t.translation,
                radius: *radius,
            }),
            Shape::Cuboid { size } => Placed::Cuboid(placed::Cuboid {
                size: *size,
                transform: *t,
            }),
            Shape::Capsule {
                local_start,
                local_end,
                radius,
            } => Placed::Capsule(placed::Capsule {
                start: t.transform_point(*local_start),
                end: t.transform_point(*local_end),
                radius: *radius,
            }),
            Shape::Cylinder {
                local_start,
                local_end,
                radius,
            } => Placed::Cylinder(placed::Cylinder {
                start: t.transform_point(*local_start),
                end: t.transform_point(*local_end),
                radius: *radius,
            }),
            Shape::Plane { normal, height } => {
                let n = t.transform_direction(normal.vector());
                Placed::HalfSpace(placed::HalfSpace {
                    normal: n,
                    origin: t.translation - n * *height,
                })
            }
            Shape::Torus { radius, thickness } => Placed::Torus(placed::Torus {
                center: t.translation,
                up: t.up(),
                radius: *radius,
                thickness: *thickness,
            }),
            Shape::Surface(provider) => Placed::Surface(provider.as_ref(), *t),
        }
    }

    /// Nearest point on this shape to `point`; `point_a` is on the shape.
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> DistanceResult {
        pdq::point_query(self, point)
    }

    /// Distance to `other`; unsupported pairs log a warning and return the default result.
    #[inline]
    pub fn distance_to_primitive(&self, other: &Primitive) -> DistanceResult {
        pdq::pair_query(self, other).unwrap_or_else(|| {
            log::warn!(
                "distance between {:?} and {:?} is not supported",
                self.kind(),
                other.kind()
            );
            DistanceResult::default()
        })
    }

    /// Distance to `other`, or `None` when the pair is not supported.
    #[inline]
    pub fn try_distance_to_primitive(&self, other: &Primitive) -> Option<DistanceResult> {
        pdq::pair_query(self, other)
    }
}
