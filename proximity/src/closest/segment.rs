use crate::shape::Vec3;
use crate::utils::saturate;

/// Which part of a segment a nearest point landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SegmentRegion {
    Interior = 0,
    Start = 1,
    End = 2,
}

/// Nearest point on the segment `start -> end` to `point`, and the region it lies in.
///
/// A zero-length segment reports its start.
pub fn segment_to_point_nearest_point(start: Vec3, end: Vec3, point: Vec3) -> (Vec3, SegmentRegion) {
    let line = end - start;
    let len_sq = line.norm_squared();
    if len_sq <= f32::EPSILON {
        return (start, SegmentRegion::Start);
    }

    let t = (point - start).dot(&line) / len_sq;
    if t <= 0.0 {
        (start, SegmentRegion::Start)
    } else if t > 1.0 {
        (end, SegmentRegion::End)
    } else {
        (start + line * t, SegmentRegion::Interior)
    }
}

/// Closest points between the segments `a0 -> a1` and `b0 -> b1`.
///
/// Solves the 2x2 system in the segment parameters (s, t), clamps s, derives
/// t from it and re-solves s if t had to be clamped. Parallel and zero-length
/// segments fall back to s = 0 so the result is always finite.
pub fn segment_to_segment_nearest_points(a0: Vec3, a1: Vec3, b0: Vec3, b1: Vec3) -> (Vec3, Vec3) {
    let d0 = a1 - a0;
    let d1 = b1 - b0;
    let r = a0 - b0;
    let a = d0.dot(&d0);
    let e = d1.dot(&d1);
    let f = d1.dot(&r);

    // Both segments degenerate to points.
    if a <= f32::EPSILON && e <= f32::EPSILON {
        return (a0, b0);
    }

    let (s, t) = if a <= f32::EPSILON {
        (0.0, saturate(f / e))
    } else {
        let c = d0.dot(&r);
        if e <= f32::EPSILON {
            (saturate(-c / a), 0.0)
        } else {
            let b = d0.dot(&d1);
            let denom = a * e - b * b;
            // Parallel segments: any s works, pick the start of A.
            let s = if denom > 1.0e-6 * a * e {
                saturate((b * f - c * e) / denom)
            } else {
                0.0
            };
            let t = (b * s + f) / e;
            let clamped = saturate(t);
            if clamped != t {
                (saturate((clamped * b - c) / a), clamped)
            } else {
                (s, t)
            }
        }
    };

    (a0 + d0 * s, b0 + d1 * t)
}
