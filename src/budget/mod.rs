//! Package budget decides how many candidates to request per provider category
//!
//! `ceil(base_per_day * days * diversity * area_factor)`, clamped to
//! `[min_results, max_results]`. Diversity comes from a [`DestinationProfiler`],
//! the area factor from the geocode viewport when one is known.
pub mod profile;

#[cfg(test)]
mod profile_test;

pub use profile::{DestinationKind, DestinationProfiler, KeywordProfiler};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::geo::Bounds;

/// Result budget configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default = "default_base_per_day")]
    pub base_per_day: u32,

    #[serde(default = "default_min_results")]
    pub min_results: usize,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_base_per_day() -> u32 {
    10
}

fn default_min_results() -> usize {
    10
}

fn default_max_results() -> usize {
    200
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            base_per_day: default_base_per_day(),
            min_results: default_min_results(),
            max_results: default_max_results(),
        }
    }
}

/// Area multiplier: sprawling viewports need more candidates
pub fn area_factor(bounds: Option<&Bounds>) -> f64 {
    let Some(bounds) = bounds else {
        return 1.0;
    };

    let area = bounds.area_km2();
    if !area.is_finite() {
        1.0
    } else if area > 5000.0 {
        1.2
    } else if area > 2000.0 {
        1.1
    } else if area > 500.0 {
        1.05
    } else if area < 100.0 {
        0.9
    } else {
        1.0
    }
}

pub struct ResultBudgetCalculator {
    profiler: Arc<dyn DestinationProfiler>,
    config: BudgetConfig,
}

impl ResultBudgetCalculator {
    pub fn new(profiler: Arc<dyn DestinationProfiler>, config: BudgetConfig) -> Self {
        Self { profiler, config }
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Kind of `destination` according to the configured profiler
    pub fn profile(&self, destination: &str) -> DestinationKind {
        self.profiler.profile(destination)
    }

    /// Number of results to request per category
    pub fn max_results_per_category(&self, duration_days: u32, destination: &str, bounds: Option<&Bounds>) -> usize {
        let (lo, hi) = (self.config.min_results, self.config.max_results.max(self.config.min_results));
        if duration_days == 0 {
            return lo;
        }

        let kind = self.profiler.profile(destination);
        let raw = self.config.base_per_day as f64
            * duration_days as f64
            * kind.diversity_factor()
            * area_factor(bounds);
        // Guard against float noise such as 15.000000000000002 rounding up to 16
        let budget = ((raw - 1e-9).ceil().max(0.0) as usize).clamp(lo, hi);

        debug!(
            %destination,
            %duration_days,
            ?kind,
            %raw,
            %budget,
            "ResultBudgetCalculator::max_results_per_category"
        );
        budget
    }
}
