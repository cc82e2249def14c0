//! Collections of points and primitives queried as one shape.
//!
//! Every query is the minimum over member pairs by effective distance, first
//! minimum wins. `point_a` is always on `self`. Empty operands are a setup
//! mistake: they log a warning and yield the default result.

use crate::result::{DistanceResult, nearest};

use super::Primitive;
use super::types::Vec3;

fn min_or_warn<I>(results: I, what: &str) -> DistanceResult
where
    I: IntoIterator<Item = DistanceResult>,
{
    nearest(results).unwrap_or_else(|| {
        log::warn!("{what} needs at least one member on each side to measure distance");
        DistanceResult::default()
    })
}

/// Loose world-space points, such as tracked joints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pub points: Vec<Vec3>,
}

impl PointSet {
    #[inline]
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn distance_to_points(&self, positions: &[Vec3]) -> DistanceResult {
        let pairs = self
            .points
            .iter()
            .flat_map(|a| positions.iter().map(move |b| DistanceResult::new(*a, *b)));
        min_or_warn(pairs, "point set")
    }

    #[inline]
    pub fn distance_to_point_set(&self, other: &PointSet) -> DistanceResult {
        self.distance_to_points(&other.points)
    }
}

/// Primitives that move together, such as the parts of a prop.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveSet {
    pub primitives: Vec<Primitive>,
}

impl PrimitiveSet {
    #[inline]
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> DistanceResult {
        self.distance_to_points(&[point])
    }

    pub fn distance_to_points(&self, positions: &[Vec3]) -> DistanceResult {
        let pairs = self
            .primitives
            .iter()
            .flat_map(|prim| positions.iter().map(move |p| prim.distance_to_point(*p)));
        min_or_warn(pairs, "primitive set")
    }

    #[inline]
    pub fn distance_to_point_set(&self, points: &PointSet) -> DistanceResult {
        self.distance_to_points(&points.points)
    }

    /// Unsupported member pairs are skipped with a warning rather than
    /// counted as touching.
    pub fn distance_to_set(&self, other: &PrimitiveSet) -> DistanceResult {
        let pairs = self.primitives.iter().flat_map(|a| {
            other.primitives.iter().filter_map(move |b| {
                let r = a.try_distance_to_primitive(b);
                if r.is_none() {
                    log::warn!("skipping unsupported pair {:?} / {:?}", a.kind(), b.kind());
                }
                r
            })
        });
        min_or_warn(pairs, "primitive set")
    }
}

/// Either kind of collection.
#[derive(Clone, Debug)]
pub enum ShapeGroup {
    Points(PointSet),
    Primitives(PrimitiveSet),
}

impl ShapeGroup {
    pub fn distance_to_points(&self, positions: &[Vec3]) -> DistanceResult {
        match self {
            ShapeGroup::Points(set) => set.distance_to_points(positions),
            ShapeGroup::Primitives(set) => set.distance_to_points(positions),
        }
    }

    pub fn distance_to(&self, other: &ShapeGroup) -> DistanceResult {
        match (self, other) {
            (ShapeGroup::Points(a), ShapeGroup::Points(b)) => a.distance_to_point_set(b),
            (ShapeGroup::Primitives(a), ShapeGroup::Points(b)) => a.distance_to_point_set(b),
            (ShapeGroup::Primitives(a), ShapeGroup::Primitives(b)) => a.distance_to_set(b),
            (ShapeGroup::Points(_), ShapeGroup::Primitives(_)) => other.distance_to(self).swap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Transform;
    use approx::assert_relative_eq;

    #[test]
    fn point_set_pairs_every_point() {
        let a = PointSet::new(vec![Vec3::zeros(), Vec3::new(5.0, 0.0, 0.0)]);
        let b = PointSet::new(vec![Vec3::new(-3.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)]);
        let r = a.distance_to_point_set(&b);
        assert_relative_eq!(r.point_a(), Vec3::new(5.0, 0.0, 0.0));
        assert_relative_eq!(r.point_b(), Vec3::new(6.0, 0.0, 0.0));
        assert!((r.distance() - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn empty_sets_return_default() {
        let empty = PointSet::default();
        let r = empty.distance_to_points(&[Vec3::x()]);
        assert_eq!(r, DistanceResult::default());

        let prims = PrimitiveSet::new(vec![Primitive::sphere(Vec3::zeros(), 1.0)]);
        assert_eq!(prims.distance_to_points(&[]), DistanceResult::default());
    }

    #[test]
    fn primitive_set_keeps_first_minimum() {
        let set = PrimitiveSet::new(vec![
            Primitive::sphere(Vec3::new(-3.0, 0.0, 0.0), 1.0),
            Primitive::sphere(Vec3::new(3.0, 0.0, 0.0), 1.0),
        ]);
        // Equidistant from both members.
        let r = set.distance_to_point(Vec3::zeros());
        assert_relative_eq!(r.point_a(), Vec3::new(-2.0, 0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn unsupported_members_do_not_count_as_contact() {
        let a = PrimitiveSet::new(vec![
            Primitive::torus(1.0, 0.2, Transform::default()),
            Primitive::sphere(Vec3::zeros(), 0.5),
        ]);
        let b = PrimitiveSet::new(vec![Primitive::torus(
            1.0,
            0.2,
            Transform::from_translation(Vec3::new(0.0, 10.0, 0.0)),
        )]);
        let r = a.distance_to_set(&b);
        assert!(r.distance() > 1.0);
    }

    #[test]
    fn groups_swap_for_reversed_kinds() {
        let points = ShapeGroup::Points(PointSet::new(vec![Vec3::new(0.0, 4.0, 0.0)]));
        let prims = ShapeGroup::Primitives(PrimitiveSet::new(vec![Primitive::sphere(Vec3::zeros(), 1.0)]));
        let forward = prims.distance_to(&points);
        let reverse = points.distance_to(&prims);
        assert_relative_eq!(forward.point_a(), reverse.point_b());
        assert_relative_eq!(reverse.point_a(), Vec3::new(0.0, 4.0, 0.0));
        assert!((reverse.distance() - 3.0).abs() < 1.0e-6);
    }
}
