/*!
The value every distance query returns.

A `DistanceResult` carries the nearest point on each operand, a raw distance,
and an intersecting flag. Two readings of the distance exist:

- `raw_distance()`: the stored value. Some queries store a negated distance
  while the operands overlap (point inside a sphere).
- `distance()`: the effective distance used for every comparison. It is 0.0
  whenever the result is intersecting.

Results for a reversed query are obtained with `swap()`, never recomputed.
*/

use crate::shape::Vec3;

/// Nearest points between two operands plus their distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistanceResult {
    point_a: Vec3,
    point_b: Vec3,
    distance: f32,
    intersecting: bool,
}

impl DistanceResult {
    /// Non-intersecting result whose raw distance is `|point_a - point_b|`.
    #[inline]
    pub fn new(point_a: Vec3, point_b: Vec3) -> Self {
        Self {
            point_a,
            point_b,
            distance: (point_a - point_b).norm(),
            intersecting: false,
        }
    }

    /// Overlapping result with both points at `point` and zero distance.
    #[inline]
    pub fn contact(point: Vec3) -> Self {
        Self {
            point_a: point,
            point_b: point,
            distance: 0.0,
            intersecting: true,
        }
    }

    #[inline]
    pub fn with_intersecting(mut self, intersecting: bool) -> Self {
        self.intersecting = intersecting;
        self
    }

    /// Override the stored (possibly signed) distance.
    #[inline]
    pub fn with_raw_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    #[inline]
    pub fn point_a(&self) -> Vec3 {
        self.point_a
    }

    #[inline]
    pub fn point_b(&self) -> Vec3 {
        self.point_b
    }

    /// Effective distance: 0.0 while intersecting, otherwise the stored value.
    #[inline]
    pub fn distance(&self) -> f32 {
        if self.intersecting { 0.0 } else { self.distance }
    }

    /// Stored distance, possibly negative for overlapping operands.
    #[inline]
    pub fn raw_distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// The same result seen from the other operand.
    #[inline]
    pub fn swap(self) -> Self {
        Self {
            point_a: self.point_b,
            point_b: self.point_a,
            ..self
        }
    }

    /// Flip the intersecting polarity (inverted shapes).
    #[inline]
    pub fn inverted(self) -> Self {
        self.with_intersecting(!self.intersecting)
    }

    /// Strictly closer than `other` by effective distance.
    #[inline]
    pub fn is_closer_than(&self, other: &DistanceResult) -> bool {
        self.distance() < other.distance()
    }
}

/// The closest of `results` by effective distance; the first minimum wins.
pub fn nearest<I>(results: I) -> Option<DistanceResult>
where
    I: IntoIterator<Item = DistanceResult>,
{
    let mut best: Option<DistanceResult> = None;
    for r in results {
        if best.as_ref().map_or(true, |b| r.is_closer_than(b)) {
            best = Some(r);
        }
    }
    best
}

/// Flat `#[repr(C)]` layout of a result, matching what compute backends write
/// into their output buffers (`intersecting` is stored as 0/1).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawDistanceResult {
    pub point_a: [f32; 3],
    pub point_b: [f32; 3],
    pub distance: f32,
    pub intersecting: i32,
}

impl From<DistanceResult> for RawDistanceResult {
    fn from(r: DistanceResult) -> Self {
        Self {
            point_a: r.point_a.into(),
            point_b: r.point_b.into(),
            distance: r.distance,
            intersecting: i32::from(r.intersecting),
        }
    }
}

impl From<RawDistanceResult> for DistanceResult {
    fn from(r: RawDistanceResult) -> Self {
        Self {
            point_a: r.point_a.into(),
            point_b: r.point_b.into(),
            distance: r.distance,
            intersecting: r.intersecting != 0,
        }
    }
}
