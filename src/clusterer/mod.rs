//! Package clusterer groups POIs into day-sized geographic clusters
//!
//! The pipeline runs in fixed stages, each logged and counted in the
//! [`ClusterReport`]:
//!
//! 1. drop POIs without usable coordinates
//! 2. pick DBSCAN parameters (see [`tuning`]) and cluster
//! 3. reassign noise (see [`noise`]), then optionally merge down to the
//!    target (see [`merge`])
//! 4. cap cluster size, best quality first
//! 5. cap restaurants per cluster
//! 6. worth-visiting filter on clusters large enough to afford it
//! 7. drop empty clusters, renumber, pick anchors
//!
//! Members keep their input order within a cluster.
pub mod anchor;
pub mod config;
pub mod enrich;
pub mod merge;
pub mod noise;
pub mod report;
pub mod tuning;

#[cfg(test)]
mod anchor_test;
#[cfg(test)]
mod merge_test;
#[cfg(test)]
mod noise_test;
#[cfg(test)]
pub(crate) mod testdata;

pub use anchor::select_anchor;
pub use config::{AnchorMethod, ClusterConfig};
pub use enrich::{PlaceDetails, PlaceDetailsEnhancer, apply_details};
pub use report::{ClusterReport, ClusterSummary, DropReason, DroppedPoi, EnrichmentOutcome};

use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::geo::GeoPoint;
use crate::poi::Poi;

/// Clusters, anchors and diagnostics of one run
///
/// `clusters` and `anchors` have the same keys, contiguous from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterResult {
    pub clusters: BTreeMap<usize, Vec<Poi>>,
    pub anchors: BTreeMap<usize, Poi>,
    pub report: ClusterReport,
}

impl ClusterResult {
    pub fn into_parts(self) -> (BTreeMap<usize, Vec<Poi>>, BTreeMap<usize, Poi>) {
        (self.clusters, self.anchors)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Runs the clustering pipeline over a fixed set of POIs
pub struct PoiClusterer {
    pois: Vec<Poi>,
    config: ClusterConfig,
}

impl PoiClusterer {
    pub fn new(pois: Vec<Poi>, config: ClusterConfig) -> Self {
        Self { pois, config }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Clusters the POIs and picks one anchor per cluster
    ///
    /// Never fails: degenerate input yields an empty result.
    pub fn cluster(&self) -> ClusterResult {
        let cfg = &self.config;
        let mut report = ClusterReport {
            input: self.pois.len(),
            ..ClusterReport::default()
        };

        if let Err(e) = cfg.validate() {
            warn!(error = %e, "PoiClusterer::cluster: invalid config, substituting defaults");
        }
        let defaults = ClusterConfig::default();
        let search_radius_km = Some(cfg.search_radius_km)
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(defaults.search_radius_km);
        let eps_km = cfg.eps_km.filter(|e| e.is_finite() && *e > 0.0);
        let min_samples = cfg.min_samples.map(|m| m.max(1));
        let target = cfg.target_clusters.max(1);

        // Stage 1: validity
        let mut valid: Vec<&Poi> = Vec::with_capacity(self.pois.len());
        let mut points: Vec<GeoPoint> = Vec::with_capacity(self.pois.len());
        for poi in &self.pois {
            match poi.coordinates() {
                Some(p) => {
                    valid.push(poi);
                    points.push(p);
                }
                None => report.drop_poi(poi, DropReason::MissingCoordinates),
            }
        }
        report.missing_coordinates = report.dropped.len();
        report.valid = valid.len();
        debug!(
            input = %report.input,
            valid = %report.valid,
            "PoiClusterer::cluster: validity filter"
        );

        if valid.is_empty() {
            info!(input = %report.input, "PoiClusterer::cluster: no POIs with coordinates");
            return ClusterResult {
                report,
                ..ClusterResult::default()
            };
        }

        // Stage 2: spatial clustering
        let tuned = tuning::tune(&points, search_radius_km, target, eps_km, min_samples);
        report.eps_km = tuned.eps_km;
        report.min_samples = tuned.min_samples;
        report.tuning_iterations = tuned.iterations;
        report.clustered = tuned.result.clustered();
        debug!(
            eps_km = %tuned.eps_km,
            min_samples = %tuned.min_samples,
            clusters = %tuned.result.clusters.len(),
            noise = %tuned.result.noise.len(),
            "PoiClusterer::cluster: dbscan"
        );

        // Stage 3: noise
        let outcome = noise::reassign_noise(
            &points,
            tuned.result.clusters,
            tuned.result.noise,
            tuned.eps_km,
            target,
        );
        report.noise_attached = outcome.attached;
        report.noise_promoted = outcome.promoted;
        report.noise_dropped = outcome.dropped.len();
        for &i in &outcome.dropped {
            report.drop_poi(valid[i], DropReason::Noise);
        }
        let mut clusters = outcome.clusters;
        report.after_noise = member_count(&clusters);

        if cfg.merge_to_target {
            report.merged = merge::merge_to_target(&points, &mut clusters, target);
            debug!(merged = %report.merged, clusters = %clusters.len(), "PoiClusterer::cluster: merged to target");
        }

        // Stage 4: size cap
        if let Some(cap) = cfg.size_cap() {
            for members in &mut clusters {
                for i in keep_best(members, cap, &valid, |_| true) {
                    report.drop_poi(valid[i], DropReason::SizeCap);
                }
            }
        }
        report.after_size_cap = member_count(&clusters);

        // Stage 5: restaurant cap
        if let Some(cap) = cfg.restaurant_cap() {
            for members in &mut clusters {
                for i in keep_best(members, cap, &valid, Poi::is_restaurant) {
                    report.drop_poi(valid[i], DropReason::RestaurantCap);
                }
            }
        }
        report.after_restaurant_cap = member_count(&clusters);

        // Stage 6: worth-visiting filter
        if cfg.filter_worth_visiting {
            for members in &mut clusters {
                if members.len() < cfg.min_cluster_size_for_filtering {
                    continue;
                }
                let (keep, drop): (Vec<usize>, Vec<usize>) =
                    members.iter().partition(|&&i| cfg.quality_gate.passes(valid[i]));
                for &i in &drop {
                    report.drop_poi(valid[i], DropReason::QualityFilter);
                }
                *members = keep;
            }
        }
        report.after_quality_filter = member_count(&clusters);

        // Stage 7: renumber and anchor
        let mut result = ClusterResult::default();
        for members in clusters.into_iter().filter(|m| !m.is_empty()) {
            let members: Vec<Poi> = members.iter().map(|&i| valid[i].clone()).collect();
            let Some(pos) = select_anchor(&members, cfg.anchor_method) else {
                continue;
            };
            let id = result.clusters.len();
            let anchor = members[pos].clone();
            if let Some(summary) = ClusterSummary::describe(id, &members, &anchor) {
                report.summaries.push(summary);
            }
            result.anchors.insert(id, anchor);
            result.clusters.insert(id, members);
        }

        report.output = result.clusters.values().map(Vec::len).sum();
        report.clusters = result.clusters.len();
        info!(
            input = %report.input,
            valid = %report.valid,
            clustered = %report.clustered,
            after_noise = %report.after_noise,
            after_size_cap = %report.after_size_cap,
            after_restaurant_cap = %report.after_restaurant_cap,
            after_quality_filter = %report.after_quality_filter,
            clusters = %report.clusters,
            target = %target,
            "PoiClusterer::cluster: done"
        );

        result.report = report;
        result
    }

    /// [`cluster`](Self::cluster), then fetch details for every anchor
    ///
    /// Lookups run concurrently, each under `enrich_timeout`. A failed or
    /// timed-out lookup leaves its anchor as it was.
    pub async fn cluster_and_enrich(&self, enhancer: &dyn PlaceDetailsEnhancer) -> ClusterResult {
        let mut result = self.cluster();
        if !self.config.enrich_anchors || result.is_empty() {
            return result;
        }

        let ids: Vec<usize> = result.anchors.keys().copied().collect();
        let anchors: Vec<&Poi> = result.anchors.values().collect();
        let fetched = enrich::fetch_details(enhancer, &anchors, self.config.enrich_timeout()).await;

        let mut enriched = 0;
        for (id, outcome) in ids.into_iter().zip(fetched) {
            let status = match outcome {
                Ok(details) => {
                    if let Some(anchor) = result.anchors.get_mut(&id) {
                        apply_details(anchor, &details);
                        if let Some(member) = result
                            .clusters
                            .get_mut(&id)
                            .and_then(|members| members.iter_mut().find(|p| p.id == anchor.id))
                        {
                            *member = anchor.clone();
                        }
                    }
                    enriched += 1;
                    EnrichmentOutcome::Enriched
                }
                Err(status) => status,
            };
            if let Some(summary) = result.report.summaries.iter_mut().find(|s| s.id == id) {
                summary.enrichment = Some(status);
            }
        }

        info!(
            anchors = %result.anchors.len(),
            %enriched,
            "PoiClusterer::cluster_and_enrich: done"
        );
        result
    }
}

fn member_count(clusters: &[Vec<usize>]) -> usize {
    clusters.iter().map(Vec::len).sum()
}

/// Keeps at most `cap` eligible members, best quality score first, ties by
/// input order; ineligible members are untouched. Returns the removed
/// members in input order.
fn keep_best(members: &mut Vec<usize>, cap: usize, valid: &[&Poi], eligible: impl Fn(&Poi) -> bool) -> Vec<usize> {
    let mut ranked: Vec<usize> = members.iter().copied().filter(|&i| eligible(valid[i])).collect();
    if ranked.len() <= cap {
        return Vec::new();
    }

    ranked.sort_by(|&a, &b| {
        valid[b]
            .quality_score()
            .partial_cmp(&valid[a].quality_score())
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    let mut removed = ranked.split_off(cap);
    removed.sort_unstable();

    members.retain(|i| removed.binary_search(i).is_err());
    removed
}
