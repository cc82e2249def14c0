/*!
Nearest points and overlap between placed primitive shapes.

Shapes are points, spheres, boxes, capsules, flat-capped cylinders, planes
(half-spaces), tori, and triangulated surfaces served through
[`SurfaceDistanceProvider`]. Every query returns one [`DistanceResult`] with
the nearest point on each side and an intersecting flag.

- closest:   segment, circle, triangle and ray primitives
- pdq:       per-pair distance routines and their dispatch
- sdf:       signed distance functions in local frames
- shape:     `Primitive`, placements, surfaces and shape groups
- reset:     height search for adaptive reset placement
*/

pub mod closest;
pub mod constants;
pub mod error;
pub mod pdq;
pub mod reset;
pub mod result;
pub mod sdf;
pub mod shape;
pub mod utils;

pub use constants::{ANTI_PARALLEL_EPS, CIRCLE_EPS, DIST_EPS, NORM_SQ_EPS, RAY_EPS};
pub use error::{ShapeError, ShapeResult};
pub use reset::{
    AdaptiveResetSettings, HeightSearch, HeightSolve, ResetGeometry, TargetPair, Trend, adaptive_reset_height,
    find_height,
};
pub use result::{DistanceResult, RawDistanceResult, nearest};
pub use shape::{
    Direction, PointSet, Primitive, PrimitiveSet, Shape, ShapeGroup, ShapeKind, SurfaceDistanceProvider,
    Transform, TriMeshSurface, Vec3,
};

/// Nearest point on `primitive` to `point`. `point_a` lies on the shape and
/// `point_b` is `point`.
#[inline]
pub fn distance_point_to_primitive(point: Vec3, primitive: &Primitive) -> DistanceResult {
    primitive.distance_to_point(point)
}

/// Nearest points between two primitives, `point_a` on `a`.
///
/// Unsupported kind pairs log a warning and return `DistanceResult::default()`.
#[inline]
pub fn distance_primitive_to_primitive(a: &Primitive, b: &Primitive) -> DistanceResult {
    a.distance_to_primitive(b)
}

/// Signed distance from `point` to `primitive`, negative inside.
#[inline]
pub fn signed_distance(primitive: &Primitive, point: Vec3) -> f32 {
    primitive.signed_distance(point)
}

/// Height satisfying both the angle and translation targets, the larger of
/// the two. Each metric is assumed to grow with height; a constraint whose
/// search finds nothing contributes zero.
pub fn solve_adaptive_height<A, T>(
    angle_eval: A,
    translation_eval: T,
    target_angle: f32,
    target_translation: f32,
    upper_limit: f32,
    tolerance: f32,
) -> f32
where
    A: FnMut(f32) -> f32,
    T: FnMut(f32) -> f32,
{
    solve_adaptive_height_detailed(
        angle_eval,
        translation_eval,
        target_angle,
        target_translation,
        upper_limit,
        tolerance,
    )
    .height()
}

/// As [`solve_adaptive_height`], keeping each search's outcome.
pub fn solve_adaptive_height_detailed<A, T>(
    angle_eval: A,
    translation_eval: T,
    target_angle: f32,
    target_translation: f32,
    upper_limit: f32,
    tolerance: f32,
) -> HeightSolve
where
    A: FnMut(f32) -> f32,
    T: FnMut(f32) -> f32,
{
    reset::solve_heights(
        angle_eval,
        translation_eval,
        target_angle,
        target_translation,
        upper_limit,
        tolerance,
        Trend::Increasing,
        reset::settings::DEFAULT_MAX_ITERATIONS,
    )
}
