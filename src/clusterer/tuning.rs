//! DBSCAN parameter selection
//!
//! Explicit parameters are used as given. Otherwise `eps` starts at
//! `radius / sqrt(target)` and is searched until the cluster count is within
//! tolerance of the target: geometric steps until the target is bracketed,
//! geometric-mean bisection afterwards.

use tracing::debug;

use crate::cluster::{DbscanResult, dbscan};
use crate::geo::GeoPoint;

/// Smallest eps ever tried, in km
pub const MIN_EPS_KM: f64 = 0.1;

/// Upper bound on DBSCAN runs while tuning
pub const MAX_TUNING_ITERATIONS: usize = 12;

const STEP_UP: f64 = 1.5;
const STEP_DOWN: f64 = 0.6;

/// Parameters chosen for a run along with the clustering they produced
#[derive(Debug, Clone)]
pub struct Tuned {
    pub eps_km: f64,
    pub min_samples: usize,
    pub iterations: usize,
    pub result: DbscanResult,
}

/// Accepted distance between the cluster count and the target
pub fn tolerance(target: usize) -> usize {
    ((0.2 * target as f64).ceil() as usize).max(1)
}

/// Core-point threshold derived from points per requested cluster
pub fn default_min_samples(valid: usize, target: usize) -> usize {
    if valid >= 5 * target.max(1) { 3 } else { 2 }
}

/// Picks eps and min_samples for `points` and runs DBSCAN with them
pub fn tune(
    points: &[GeoPoint],
    search_radius_km: f64,
    target: usize,
    eps_km: Option<f64>,
    min_samples: Option<usize>,
) -> Tuned {
    let target = target.max(1);
    let min_samples = min_samples.unwrap_or_else(|| default_min_samples(points.len(), target));

    if let Some(eps_km) = eps_km {
        return Tuned {
            eps_km,
            min_samples,
            iterations: 1,
            result: dbscan(points, eps_km, min_samples),
        };
    }

    let max_eps = search_radius_km.max(MIN_EPS_KM);
    let tol = tolerance(target);
    let mut eps = (search_radius_km / (target as f64).sqrt()).clamp(MIN_EPS_KM, max_eps);

    // eps values known to be too small / too large
    let mut low: Option<f64> = None;
    let mut high: Option<f64> = None;
    let mut best: Option<(usize, f64, DbscanResult)> = None;
    let mut iterations = 0;

    while iterations < MAX_TUNING_ITERATIONS {
        iterations += 1;
        let result = dbscan(points, eps, min_samples);
        let count = result.clusters.len();
        let deviation = count.abs_diff(target);
        debug!(
            %eps,
            %count,
            noise = %result.noise.len(),
            %deviation,
            "tune: iteration {}",
            iterations
        );

        // Noise dominating means eps is too small even if the count is low
        let too_small = count > target || 2 * result.noise.len() > points.len();
        let done = deviation <= tol;

        if best.as_ref().is_none_or(|(d, _, _)| deviation < *d) {
            best = Some((deviation, eps, result));
        }
        if done {
            break;
        }

        if too_small {
            low = Some(low.map_or(eps, |l| l.max(eps)));
        } else {
            high = Some(high.map_or(eps, |h| h.min(eps)));
        }

        let next = match (low, high) {
            (Some(l), Some(h)) => (l * h).sqrt(),
            (Some(l), None) => l * STEP_UP,
            (None, Some(h)) => h * STEP_DOWN,
            (None, None) => eps,
        }
        .clamp(MIN_EPS_KM, max_eps);

        if (next - eps).abs() <= 1e-9 * eps.max(1.0) {
            debug!(%eps, "tune: eps cannot move further");
            break;
        }
        eps = next;
    }

    match best {
        Some((_, eps_km, result)) => Tuned {
            eps_km,
            min_samples,
            iterations,
            result,
        },
        // No iteration ran
        None => Tuned {
            eps_km: eps,
            min_samples,
            iterations,
            result: dbscan(points, eps, min_samples),
        },
    }
}
