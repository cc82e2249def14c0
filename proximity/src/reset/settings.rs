/*!
Adaptive reset tunables.

Defaults for the height search that places a reset between two retargeting
targets. Angles are in degrees, heights in meters, translation limits are
unitless gains (`0.25` allows the virtual hand to travel 25% farther or
shorter than the tracked hand).

Notes
- The search stops at whichever comes first: landing in the tolerance band,
  the interval collapsing, or the iteration cap.
- Override per reset from your scene data; these are the fallbacks.
*/

/// Largest angle between virtual and tracked travel directions (degrees).
pub const DEFAULT_MAX_ANGLE: f32 = 20.0;

/// Largest relative difference between virtual and tracked travel lengths.
pub const DEFAULT_MAX_TRANSLATION: f32 = 0.25;

/// Highest a reset may be raised off the target midpoint (meters).
pub const DEFAULT_MAX_HEIGHT: f32 = 10.0;

/// Half width of the accepted band around the target metric.
pub const DEFAULT_TOLERANCE: f32 = 0.01;

/// Bisection steps before giving up. Interval collapse usually ends the
/// search long before this; it only guards against rounding stalls.
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Lower and upper edge of the accepted band around `target`.
///
/// Negative tolerances are treated as zero.
#[inline]
pub const fn tolerance_band(target: f32, tolerance: f32) -> (f32, f32) {
    let t = if tolerance < 0.0 { 0.0 } else { tolerance };
    (target - t, target + t)
}

/// Limits for one adaptive reset placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveResetSettings {
    /// Solve for height only when the unraised angle exceeds this (degrees).
    pub max_angle: f32,
    /// Solve for height only when the unraised translation gain exceeds this.
    pub max_translation: f32,
    /// Upper end of the search interval (meters).
    pub max_height: f32,
    pub tolerance: f32,
    pub max_iterations: u32,
}

impl AdaptiveResetSettings {
    #[inline]
    pub const fn with_defaults() -> Self {
        Self {
            max_angle: DEFAULT_MAX_ANGLE,
            max_translation: DEFAULT_MAX_TRANSLATION,
            max_height: DEFAULT_MAX_HEIGHT,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Default for AdaptiveResetSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
