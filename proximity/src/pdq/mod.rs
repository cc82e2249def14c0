/*!
Primitive distance queries.

One closed-form routine per supported unordered pair of kinds. Each routine
takes world-space views (`shape::placed`) and names its operands in order:
`x_to_y` puts `point_a` on `x`. The dispatcher below maps every ordered pair
onto a routine, swapping the result for the reversed ordering, and lists the
unsupported pairs explicitly.

- point:   point against every kind
- sphere:  sphere against every kind, inflated from a point query
- cuboid:  box against capsule and plane
- capsule: capsule against capsule, plane and torus
- plane:   segment against plane, plane against plane
*/

pub mod capsule;
pub mod cuboid;
pub mod plane;
pub mod point;
pub mod sphere;

use crate::result::DistanceResult;
use crate::shape::{Placed, Primitive, Vec3};

/// Nearest point on `primitive` to `query`; `point_a` is on the shape,
/// `point_b` is `query`.
pub fn point_query(primitive: &Primitive, query: Vec3) -> DistanceResult {
    let r = match primitive.placed() {
        Placed::Point(p) => point::point_to_point(p, query),
        Placed::Ball(ball) => point::point_to_sphere(query, &ball).swap(),
        Placed::Cuboid(cuboid) => point::point_to_cuboid(query, &cuboid).swap(),
        Placed::Capsule(capsule) => point::point_to_capsule(query, &capsule).swap(),
        Placed::Cylinder(cylinder) => point::point_to_cylinder(query, &cylinder).swap(),
        Placed::HalfSpace(half) => point::point_to_plane(query, &half).swap(),
        Placed::Torus(torus) => point::point_to_torus(query, &torus).swap(),
        Placed::Surface(provider, transform) => provider.distance_to_point(&transform, query),
    };
    if primitive.invert { r.inverted() } else { r }
}

/// Distance from `a` to `b`, or `None` for an unsupported pair.
///
/// The intersecting flag is flipped once for every inverted operand.
pub fn pair_query(a: &Primitive, b: &Primitive) -> Option<DistanceResult> {
    let r = dispatch(a, b)?;
    Some(if a.invert ^ b.invert { r.inverted() } else { r })
}

fn dispatch(a: &Primitive, b: &Primitive) -> Option<DistanceResult> {
    use Placed::*;

    match (a.placed(), b.placed()) {
        // Surfaces answer for themselves.
        (Surface(provider, transform), _) => provider.distance_to_primitive(&transform, b),
        (_, Surface(provider, transform)) => provider.distance_to_primitive(&transform, a).map(DistanceResult::swap),

        (Point(p), Point(q)) => Some(point::point_to_point(p, q)),
        (Point(p), Ball(ball)) => Some(point::point_to_sphere(p, &ball)),
        (Point(p), Cuboid(cuboid)) => Some(point::point_to_cuboid(p, &cuboid)),
        (Point(p), Capsule(capsule)) => Some(point::point_to_capsule(p, &capsule)),
        (Point(p), Cylinder(cylinder)) => Some(point::point_to_cylinder(p, &cylinder)),
        (Point(p), HalfSpace(half)) => Some(point::point_to_plane(p, &half)),
        (Point(p), Torus(torus)) => Some(point::point_to_torus(p, &torus)),

        (Ball(x), Ball(y)) => Some(sphere::sphere_to_sphere(&x, &y)),
        (Ball(ball), Cuboid(cuboid)) => Some(sphere::sphere_to_cuboid(&ball, &cuboid)),
        (Ball(ball), Capsule(capsule)) => Some(sphere::sphere_to_capsule(&ball, &capsule)),
        (Ball(ball), Cylinder(cylinder)) => Some(sphere::sphere_to_cylinder(&ball, &cylinder)),
        (Ball(ball), HalfSpace(half)) => Some(sphere::sphere_to_plane(&ball, &half)),
        (Ball(ball), Torus(torus)) => Some(sphere::sphere_to_torus(&ball, &torus)),

        (Cuboid(cuboid), Capsule(capsule)) => Some(cuboid::cuboid_to_capsule(&cuboid, &capsule)),
        (Cuboid(cuboid), HalfSpace(half)) => Some(cuboid::cuboid_to_plane(&cuboid, &half)),

        (Capsule(x), Capsule(y)) => Some(capsule::capsule_to_capsule(&x, &y)),
        (Capsule(capsule), HalfSpace(half)) => Some(capsule::capsule_to_plane(&capsule, &half)),
        (Capsule(capsule), Torus(torus)) => Some(capsule::capsule_to_torus(&capsule, &torus)),

        (HalfSpace(x), HalfSpace(y)) => Some(plane::plane_to_plane(&x, &y)),

        // Reversed orderings of the pairs above.
        (Ball(_), Point(_))
        | (Cuboid(_), Point(_) | Ball(_))
        | (Capsule(_), Point(_) | Ball(_) | Cuboid(_))
        | (Cylinder(_), Point(_) | Ball(_))
        | (HalfSpace(_), Point(_) | Ball(_) | Cuboid(_) | Capsule(_))
        | (Torus(_), Point(_) | Ball(_) | Capsule(_)) => dispatch(b, a).map(DistanceResult::swap),

        // Unsupported.
        (Cuboid(_), Cuboid(_) | Cylinder(_) | Torus(_))
        | (Cylinder(_) | Torus(_), Cuboid(_))
        | (Capsule(_), Cylinder(_))
        | (Cylinder(_), Capsule(_) | Cylinder(_) | HalfSpace(_) | Torus(_))
        | (HalfSpace(_), Cylinder(_) | Torus(_))
        | (Torus(_), Cylinder(_) | HalfSpace(_) | Torus(_)) => None,
    }
}
