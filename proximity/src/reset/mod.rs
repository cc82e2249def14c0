/*!
Reset height solving.

- settings: tunables and defaults
- bisect:   bounded bisection over a height metric
- adaptive: target geometry, metrics, closed forms and placements
*/

pub mod adaptive;
pub mod bisect;
pub mod settings;

pub use adaptive::{
    ResetGeometry, ResetHeights, TargetPair, adaptive_point_reset_position, adaptive_reset_height,
    adaptive_reset_heights, adaptive_threshold_plane_position, beyond_dynamic_threshold, beyond_static_threshold,
    distance_along, point_reset_position, threshold_plane_position, within_point_reset,
};
pub use bisect::{HeightSearch, Trend, find_height};
pub use settings::AdaptiveResetSettings;

/// Results of the paired angle and translation searches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSolve {
    pub angle: HeightSearch,
    pub translation: HeightSearch,
}

impl HeightSolve {
    /// The larger magnitude of the two heights; unfound searches count as zero.
    #[inline]
    pub fn height(&self) -> f32 {
        self.angle.height.abs().max(self.translation.height.abs())
    }
}

/// Run the angle and translation searches independently over `[0, upper_limit]`.
#[allow(clippy::too_many_arguments)]
pub fn solve_heights<A, T>(
    angle_eval: A,
    translation_eval: T,
    target_angle: f32,
    target_translation: f32,
    upper_limit: f32,
    tolerance: f32,
    trend: Trend,
    max_iterations: u32,
) -> HeightSolve
where
    A: FnMut(f32) -> f32,
    T: FnMut(f32) -> f32,
{
    let angle = find_height(angle_eval, target_angle, tolerance, upper_limit, trend, max_iterations);
    if !angle.found {
        log::debug!("no height within {upper_limit} reaches angle {target_angle}");
    }
    let translation = find_height(
        translation_eval,
        target_translation,
        tolerance,
        upper_limit,
        trend,
        max_iterations,
    );
    if !translation.found {
        log::debug!("no height within {upper_limit} reaches translation {target_translation}");
    }
    HeightSolve { angle, translation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_constraint_wins() {
        let solve = solve_heights(|h| h, |h| 2.0 * h, 4.0, 2.0, 10.0, 0.01, Trend::Increasing, 64);
        assert!(solve.angle.found && solve.translation.found);
        assert!((solve.height() - 4.0).abs() <= 0.01);
    }

    #[test]
    fn unfound_constraint_counts_as_zero() {
        let solve = solve_heights(|h| h, |_| 100.0, 5.0, 1.0, 10.0, 0.01, Trend::Increasing, 64);
        assert!(!solve.translation.found);
        assert!((solve.height() - 5.0).abs() <= 0.01);
    }
}
