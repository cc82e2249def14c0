/*!
Adaptive reset placement between two retargeting targets.

A reset moves the hand back toward a neutral spot between the target it
just touched (`previous`) and the one it heads for next (`next`). Raising
that spot along a normal makes the virtual and tracked paths to `next` more
alike: both the angle between them and their relative length difference
(translation gain) shrink as the height grows. The adaptive height is the
lowest raise that brings each metric back within its limit.

- When the two tracked targets coincide, the angle height has a right
  triangle closed form and no search runs.
- The shared-target translation height is always zero. Its closed form was
  never settled, so callers relying on a translation limit with a shared
  tracked target get no raise from it.
*/

use crate::constants::DIST_EPS;
use crate::shape::Vec3;
use crate::utils::{displacement_angle_deg, midpoint, normalize_or, translation_gain};

use super::bisect::{HeightSearch, Trend, find_height};
use super::settings::AdaptiveResetSettings;

/// A tracked (physical) target and the virtual target it is retargeted onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPair {
    pub tracked: Vec3,
    pub virtual_target: Vec3,
}

impl TargetPair {
    #[inline]
    pub fn new(tracked: Vec3, virtual_target: Vec3) -> Self {
        Self {
            tracked,
            virtual_target,
        }
    }
}

/// The two target pairs around a reset and the direction it may be raised in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetGeometry {
    pub previous: TargetPair,
    pub next: TargetPair,
    /// Unit raise direction.
    pub normal: Vec3,
}

/// Per-constraint heights of one adaptive reset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResetHeights {
    pub angle: f32,
    pub translation: f32,
}

impl ResetHeights {
    /// The larger magnitude wins.
    #[inline]
    pub fn height(&self) -> f32 {
        self.angle.abs().max(self.translation.abs())
    }
}

impl ResetGeometry {
    /// A zero normal falls back to +Y.
    pub fn new(previous: TargetPair, next: TargetPair, normal: Vec3) -> Self {
        Self {
            previous,
            next,
            normal: normalize_or(normal, Vec3::y()),
        }
    }

    #[inline]
    pub fn virtual_midpoint(&self) -> Vec3 {
        midpoint(self.previous.virtual_target, self.next.virtual_target)
    }

    #[inline]
    pub fn tracked_midpoint(&self) -> Vec3 {
        midpoint(self.previous.tracked, self.next.tracked)
    }

    /// Both pairs share one tracked target.
    #[inline]
    pub fn shares_tracked_target(&self) -> bool {
        (self.previous.tracked - self.next.tracked).norm() <= DIST_EPS
    }

    /// Angle in degrees between the virtual and tracked paths to `next`,
    /// starting from both midpoints raised by `height`.
    pub fn angle_at(&self, height: f32) -> f32 {
        let raise = self.normal * height;
        displacement_angle_deg(
            self.virtual_midpoint() + raise,
            self.tracked_midpoint() + raise,
            self.next.virtual_target,
            self.next.tracked,
        )
    }

    /// Translation gain of the virtual path over the tracked path to `next`,
    /// starting from both midpoints raised by `height`.
    pub fn translation_at(&self, height: f32) -> f32 {
        let raise = self.normal * height;
        let applied = self.next.virtual_target - (self.virtual_midpoint() + raise);
        let physical = self.next.tracked - (self.tracked_midpoint() + raise);
        translation_gain(applied, physical)
    }

    /// Search for the height at which the angle reaches `target_angle`.
    pub fn angle_height(&self, target_angle: f32, settings: &AdaptiveResetSettings) -> HeightSearch {
        let search = find_height(
            |h| self.angle_at(h),
            target_angle,
            settings.tolerance,
            settings.max_height,
            Trend::Decreasing,
            settings.max_iterations,
        );
        if !search.found {
            log::debug!("no reset height brings the angle to {target_angle} degrees");
        }
        search
    }

    /// Search for the height at which the translation gain reaches `target_translation`.
    pub fn translation_height(&self, target_translation: f32, settings: &AdaptiveResetSettings) -> HeightSearch {
        let search = find_height(
            |h| self.translation_at(h),
            target_translation,
            settings.tolerance,
            settings.max_height,
            Trend::Decreasing,
            settings.max_iterations,
        );
        if !search.found {
            log::debug!("no reset height brings the translation gain to {target_translation}");
        }
        search
    }

    /// Right triangle with the virtual half-span as base and `target_angle`
    /// opposite it: `height = base / tan(target_angle)`.
    ///
    /// Unclamped: small angles can exceed any height limit and a zero angle
    /// gives an infinite height. [`adaptive_reset_heights`] clamps the
    /// result to `max_height`.
    pub fn shared_angle_height(&self, target_angle: f32) -> f32 {
        let base = (self.next.virtual_target - self.virtual_midpoint()).norm();
        base / target_angle.to_radians().tan()
    }

    /// Shared-target translation height. Always `0.0`; see the module docs.
    pub fn shared_translation_height(&self, target_translation: f32) -> f32 {
        log::debug!("shared-target translation height for gain {target_translation} is not solved; using 0");
        0.0
    }
}

/// Heights needed by each constraint.
///
/// A constraint only gets a search when its unraised metric is over the limit.
/// When both pairs share a tracked target the closed forms are used instead,
/// and the angle height is clamped to `settings.max_height` (a non-finite
/// closed form becomes exactly `max_height`).
pub fn adaptive_reset_heights(geometry: &ResetGeometry, settings: &AdaptiveResetSettings) -> ResetHeights {
    if geometry.shares_tracked_target() {
        let angle = geometry.shared_angle_height(settings.max_angle);
        return ResetHeights {
            angle: if angle.is_finite() { angle.min(settings.max_height) } else { settings.max_height },
            translation: geometry.shared_translation_height(settings.max_translation),
        };
    }

    let mut heights = ResetHeights::default();
    if geometry.angle_at(0.0) > settings.max_angle {
        heights.angle = geometry.angle_height(settings.max_angle, settings).height;
    }
    if geometry.translation_at(0.0) > settings.max_translation {
        heights.translation = geometry.translation_height(settings.max_translation, settings).height;
    }
    heights
}

/// Lowest raise that keeps both the angle and translation gain within limits.
#[inline]
pub fn adaptive_reset_height(geometry: &ResetGeometry, settings: &AdaptiveResetSettings) -> f32 {
    adaptive_reset_heights(geometry, settings).height()
}

/// Raise direction from the virtual midpoint toward the user's head.
#[inline]
pub fn head_direction(geometry: &ResetGeometry, head: Vec3) -> Vec3 {
    normalize_or(head - geometry.virtual_midpoint(), geometry.normal)
}

/// A point reset hovers `distance` from the virtual midpoint toward the head.
#[inline]
pub fn point_reset_position(geometry: &ResetGeometry, head: Vec3, distance: f32) -> Vec3 {
    geometry.virtual_midpoint() + head_direction(geometry, head) * distance
}

/// A threshold plane sits `distance` from the virtual midpoint, away from the head.
#[inline]
pub fn threshold_plane_position(geometry: &ResetGeometry, head: Vec3, distance: f32) -> Vec3 {
    geometry.virtual_midpoint() - head_direction(geometry, head) * distance
}

/// Point reset placed at the adaptive height along the head direction.
pub fn adaptive_point_reset_position(geometry: &ResetGeometry, head: Vec3, settings: &AdaptiveResetSettings) -> Vec3 {
    let raised = ResetGeometry::new(geometry.previous, geometry.next, head_direction(geometry, head));
    point_reset_position(&raised, head, adaptive_reset_height(&raised, settings))
}

/// Threshold plane placed at the adaptive height, on the side away from the head.
pub fn adaptive_threshold_plane_position(
    geometry: &ResetGeometry,
    head: Vec3,
    settings: &AdaptiveResetSettings,
) -> Vec3 {
    let raised = ResetGeometry::new(geometry.previous, geometry.next, head_direction(geometry, head));
    threshold_plane_position(&raised, head, adaptive_reset_height(&raised, settings))
}

/// The hand has reached a point reset of `radius` around `center`.
#[inline]
pub fn within_point_reset(center: Vec3, contact: Vec3, radius: f32) -> bool {
    (contact - center).norm() < radius
}

/// Unsigned distance of `point` from `origin` along `direction`.
#[inline]
pub fn distance_along(origin: Vec3, point: Vec3, direction: Vec3) -> f32 {
    let n = normalize_or(direction, Vec3::zeros());
    (point - origin).dot(&n).abs()
}

/// The tracked hand is farther from the next tracked target, along the
/// normal, than the adaptive height requires.
pub fn beyond_dynamic_threshold(geometry: &ResetGeometry, hand: Vec3, settings: &AdaptiveResetSettings) -> bool {
    distance_along(geometry.next.tracked, hand, geometry.normal) > adaptive_reset_height(geometry, settings)
}

/// The hand is farther than `threshold` from `target` along `normal`.
#[inline]
pub fn beyond_static_threshold(target: Vec3, hand: Vec3, normal: Vec3, threshold: f32) -> bool {
    distance_along(target, hand, normal) > threshold
}
