/*!
Geometric tolerances shared by every distance query.

Notes
- Distances are in meters (or whatever unit the caller's placements use).
- Favor practical world-space tolerances over machine epsilon so degenerate
  inputs (coincident centers, parallel segments) take their fallback branch
  instead of producing NaN.
*/

use nalgebra as na;

/// Practical small distance for comparisons (meters).
/// Use for dot-product guards, equality checks in world space, etc.
pub const DIST_EPS: f32 = 1.0e-6;

/// Squared-length threshold below which a vector is treated as zero.
pub const NORM_SQ_EPS: f32 = 1.0e-12;

/// Tolerance used by the segment/circle case split.
///
/// - A cross product shorter than this means the segment's line passes
///   through the circle center.
/// - A |dot| within this of 1.0 means the segment is parallel to the circle normal.
pub const CIRCLE_EPS: f32 = 1.0e-5;

/// Cosine threshold for treating two unit normals as anti-parallel.
pub const ANTI_PARALLEL_EPS: f32 = 1.0e-5;

/// Determinant guard for the ray/triangle test.
pub const RAY_EPS: f32 = 1.0e-7;

/// Fallback direction used when a query direction degenerates to zero
/// (for example, a point exactly at a sphere center).
#[inline]
pub fn fallback_axis() -> na::Vector3<f32> {
    na::Vector3::z()
}
