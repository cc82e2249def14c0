//! World-space views of primitives, resolved from a shape and its placement.
//!
//! The distance functions in `pdq` take these views so they never deal with
//! local frames directly.

use crate::closest::Circle;
use crate::sdf;

use super::cuboid::CuboidGeometry;
use super::surface::SurfaceDistanceProvider;
use super::types::{Transform, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub center: Vec3,
    pub radius: f32,
}

/// Box with full extents `size`; the placement keeps its scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub size: Vec3,
    pub transform: Transform,
}

impl Cuboid {
    #[inline]
    pub fn geometry(&self) -> CuboidGeometry {
        CuboidGeometry::new(self.size, &self.transform)
    }

    /// Inside test against the scaled box.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        sdf::cuboid(self.transform.inverse_transform_point_scaled(point), self.size) < 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

/// Solid half-space behind the plane through `origin` facing `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfSpace {
    /// World-space unit normal.
    pub normal: Vec3,
    /// A point on the bounding plane.
    pub origin: Vec3,
}

impl HalfSpace {
    /// Positive in front of the plane, negative inside the solid.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(&self.normal)
    }

    #[inline]
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    pub center: Vec3,
    /// World-space ring axis.
    pub up: Vec3,
    pub radius: f32,
    pub thickness: f32,
}

impl Torus {
    /// The tube's core circle.
    #[inline]
    pub fn core(&self) -> Circle {
        Circle::new(self.center, self.up, self.radius)
    }
}

/// A primitive resolved into world space.
#[derive(Clone, Copy, Debug)]
pub enum Placed<'a> {
    Point(Vec3),
    Ball(Ball),
    Cuboid(Cuboid),
    Capsule(Capsule),
    Cylinder(Cylinder),
    HalfSpace(HalfSpace),
    Torus(Torus),
    Surface(&'a dyn SurfaceDistanceProvider, Transform),
}
