use std::cmp::Ordering;

use crate::constants::{DIST_EPS, NORM_SQ_EPS, fallback_axis};
use crate::shape::Vec3;

/// Normalize `v`, returning the zero vector when it is too short to normalize.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    normalize_or(v, Vec3::zeros())
}

/// Normalize `v`, returning `fallback` when it is too short to normalize.
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let n2 = v.norm_squared();
    if n2 > NORM_SQ_EPS { v / n2.sqrt() } else { fallback }
}

/// Some unit vector perpendicular to `axis`.
///
/// Picks the world axis least aligned with `axis` so the cross product stays
/// well conditioned. Zero `axis` yields the fallback axis.
pub fn any_perpendicular(axis: Vec3) -> Vec3 {
    let a = normalize_or(axis, Vec3::y());
    let reference = if a.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    normalize_or(a.cross(&reference), fallback_axis())
}

/// `1.0` unless `a` orders after `b`, then `-1.0`.
///
/// Exchanging the keys flips the sign, so a fallback direction scaled by it
/// reverses when a pair query's operands are swapped. Equal keys give `1.0`.
#[inline]
pub fn order_sign(a: &[f32], b: &[f32]) -> f32 {
    match a.partial_cmp(b) {
        Some(Ordering::Greater) => -1.0,
        _ => 1.0,
    }
}

/// Clamp to [0, 1].
#[inline]
pub fn saturate(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Relative float comparison with an absolute floor.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1.0e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

/// Point halfway between `a` and `b`.
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Unsigned angle in degrees between two vectors; 0 if either is degenerate.
pub fn angle_deg(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom < DIST_EPS {
        return 0.0;
    }
    (a.dot(&b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle in degrees between the displacements `a0 -> a1` and `b0 -> b1`.
#[inline]
pub fn displacement_angle_deg(a0: Vec3, b0: Vec3, a1: Vec3, b1: Vec3) -> f32 {
    angle_deg(a1 - a0, b1 - b0)
}

/// Relative translation gain between an applied and a physical offset:
/// `| |applied| - |physical| | / |physical|`, or 0 when `physical` is zero.
pub fn translation_gain(applied: Vec3, physical: Vec3) -> f32 {
    let p = physical.norm();
    if p <= DIST_EPS {
        return 0.0;
    }
    (applied.norm() - p).abs() / p
}
