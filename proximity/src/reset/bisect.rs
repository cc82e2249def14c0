//! Bounded bisection for the height at which a metric enters a tolerance band.

use crate::utils::approximately;

use super::settings::tolerance_band;

/// How the metric responds as the height grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
    /// Larger heights give larger metrics.
    #[default]
    Increasing,
    /// Larger heights give smaller metrics, as with the reset angle and gain.
    Decreasing,
}

/// Outcome of one height search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSearch {
    /// The accepted height, or `0.0` when nothing was found.
    pub height: f32,
    /// Whether the metric landed inside the band. A zero height can be a real answer.
    pub found: bool,
    pub iterations: u32,
}

impl HeightSearch {
    const NOT_FOUND: Self = Self {
        height: 0.0,
        found: false,
        iterations: 0,
    };
}

/// Search `[0, upper_limit]` for a height whose metric lies within
/// `target ± tolerance`.
///
/// Stops on the first height inside the band, when the interval collapses,
/// or after `max_iterations` evaluations.
pub fn find_height<F>(
    mut metric: F,
    target: f32,
    tolerance: f32,
    upper_limit: f32,
    trend: Trend,
    max_iterations: u32,
) -> HeightSearch
where
    F: FnMut(f32) -> f32,
{
    let (lower_band, upper_band) = tolerance_band(target, tolerance);
    let mut lo = 0.0_f32;
    let mut hi = upper_limit;
    let mut search = HeightSearch::NOT_FOUND;

    while lo < hi && !approximately(lo, hi) && search.iterations < max_iterations {
        let m = 0.5 * (lo + hi);
        let value = metric(m);
        search.iterations += 1;

        // Too small a metric means climbing for an increasing trend.
        let climb = match trend {
            Trend::Increasing => value < lower_band,
            Trend::Decreasing => value > upper_band,
        };
        let descend = match trend {
            Trend::Increasing => value > upper_band,
            Trend::Decreasing => value < lower_band,
        };

        if climb {
            lo = m;
        } else if descend {
            hi = m;
        } else if value.is_nan() {
            break;
        } else {
            search.height = m;
            search.found = true;
            break;
        }
    }
    search
}
