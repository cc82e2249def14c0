/*!
Core shape types and math aliases shared by the query modules.

This module intentionally contains no distance algorithms. It defines the data
exchanged between:
- shape (the `Primitive` wrapper and its point/pair queries)
- pdq (closed-form distance functions per kind pair)
- closest (segment, circle and triangle helpers)
- group (sets of points and primitives)

Placements are supplied by the caller on every query; nothing here caches
derived world-space data.
*/

use std::sync::Arc;

use nalgebra as na;

use super::surface::SurfaceDistanceProvider;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// World placement of a shape: translation, rotation and (box only) scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    /// Non-uniform world scale. Only boxes honour it; every other shape
    /// is placed by translation and rotation alone.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Quat::identity())
    }
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity())
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to nalgebra `Isometry3` for use with parry3d queries (scale is dropped).
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation,
        )
    }

    /// Local point to world, ignoring scale.
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * local
    }

    /// Local point to world, applying scale before rotation.
    #[inline]
    pub fn transform_point_scaled(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * local.component_mul(&self.scale)
    }

    /// Local direction to world.
    #[inline]
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// World point into the local frame, ignoring scale.
    #[inline]
    pub fn relative_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse_transform_vector(&(world - self.translation))
    }

    /// World point into the local frame, undoing scale as well.
    ///
    /// Zero scale components map to zero instead of dividing by zero.
    pub fn inverse_transform_point_scaled(&self, world: Vec3) -> Vec3 {
        let local = self.relative_point(world);
        local.zip_map(&self.scale, |v, s| if s != 0.0 { v / s } else { 0.0 })
    }

    /// World-space local +Y.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::y()
    }
}

/// One of the six local axis directions (plane normals).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    /// Unit vector in the local frame.
    #[inline]
    pub fn vector(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::y(),
            Direction::Down => -Vec3::y(),
            Direction::Left => -Vec3::x(),
            Direction::Right => Vec3::x(),
            Direction::Forward => Vec3::z(),
            Direction::Back => -Vec3::z(),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
        }
    }
}

/// Shape kinds supported by the distance engine, in local space.
///
/// - Point: the placement translation itself.
/// - Sphere: centered at the placement translation.
/// - Cuboid: box with full extents `size`, scaled by the placement scale.
/// - Capsule/Cylinder: swept around the local segment `local_start -> local_end`.
/// - Plane: half-space whose surface lies `height` behind the placement along `normal`.
/// - Torus: ring in the local XZ plane, axis along local +Y.
/// - Surface: triangulated geometry answered by a provider.
#[derive(Clone, Debug)]
pub enum Shape {
    Point,
    Sphere {
        radius: f32,
    },
    Cuboid {
        /// Full local extents (x, y, z).
        size: Vec3,
    },
    Capsule {
        local_start: Vec3,
        local_end: Vec3,
        radius: f32,
    },
    Cylinder {
        local_start: Vec3,
        local_end: Vec3,
        radius: f32,
    },
    Plane {
        /// Local axis the plane faces.
        normal: Direction,
        /// Offset of the surface behind the placement, also the SDF origin distance.
        height: f32,
    },
    Torus {
        /// Distance from the center to the tube's core circle.
        radius: f32,
        /// Tube radius.
        thickness: f32,
    },
    Surface(Arc<dyn SurfaceDistanceProvider>),
}

/// Kind tag of a [`Shape`], used for dispatch and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Point,
    Sphere,
    Cuboid,
    Capsule,
    Cylinder,
    Plane,
    Torus,
    Surface,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point => ShapeKind::Point,
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cuboid { .. } => ShapeKind::Cuboid,
            Shape::Capsule { .. } => ShapeKind::Capsule,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Plane { .. } => ShapeKind::Plane,
            Shape::Torus { .. } => ShapeKind::Torus,
            Shape::Surface(_) => ShapeKind::Surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn relative_point_undoes_translation_and_rotation() {
        let t = Transform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
        );
        let local = Vec3::new(0.5, -1.0, 2.0);
        let world = t.transform_point(local);
        assert_relative_eq!(t.relative_point(world), local, epsilon = 1.0e-5);
    }

    #[test]
    fn scaled_round_trip_uses_scale() {
        let t = Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)).with_scale(Vec3::new(2.0, 1.0, 4.0));
        let world = t.transform_point_scaled(Vec3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(world, Vec3::new(1.0, 1.5, 2.0), epsilon = 1.0e-6);
        assert_relative_eq!(
            t.inverse_transform_point_scaled(world),
            Vec3::new(0.5, 0.5, 0.5),
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn zero_scale_does_not_produce_nan() {
        let t = Transform::default().with_scale(Vec3::new(0.0, 1.0, 1.0));
        let local = t.inverse_transform_point_scaled(Vec3::new(3.0, 1.0, 1.0));
        assert!(local.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn opposite_directions_are_negated_vectors() {
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Forward,
            Direction::Back,
        ] {
            assert_eq!(d.opposite().vector(), -d.vector());
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
