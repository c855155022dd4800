//! Clustering configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::poi::QualityGate;

/// How the representative POI of a cluster is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMethod {
    /// Member nearest to the cluster centroid
    #[default]
    Centroid,
    /// Member with the highest rating
    HighestRated,
    /// Member with the most reviews
    MostPopular,
}

/// Inputs of one clustering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Radius the POIs were fetched with, in km
    #[serde(default = "default_search_radius_km")]
    pub search_radius_km: f64,

    /// Desired number of clusters, usually the trip length in days
    #[serde(default = "default_target_clusters")]
    pub target_clusters: usize,

    #[serde(default)]
    pub anchor_method: AnchorMethod,

    /// Members kept per cluster, best quality first; `None` or 0 disables the cap
    #[serde(default = "default_max_pois_per_cluster", deserialize_with = "deserialize_cap")]
    pub max_pois_per_cluster: Option<usize>,

    /// DBSCAN radius in km; tuned automatically when absent
    #[serde(default)]
    pub eps_km: Option<f64>,

    /// DBSCAN core-point threshold; derived from the POI density when absent
    #[serde(default)]
    pub min_samples: Option<usize>,

    #[serde(default = "default_filter_worth_visiting")]
    pub filter_worth_visiting: bool,

    /// Clusters smaller than this are exempt from the worth-visiting filter
    #[serde(default = "default_min_cluster_size_for_filtering")]
    pub min_cluster_size_for_filtering: usize,

    /// Restaurant-category members kept per cluster; `None` or 0 disables the cap
    #[serde(default = "default_max_restaurants_per_cluster", deserialize_with = "deserialize_cap")]
    pub max_restaurants_per_cluster: Option<usize>,

    #[serde(default)]
    pub quality_gate: QualityGate,

    /// Merge nearest clusters after noise handling until at most
    /// `target_clusters` remain
    #[serde(default)]
    pub merge_to_target: bool,

    /// Fetch place details for anchors in `cluster_and_enrich`
    #[serde(default = "default_enrich_anchors")]
    pub enrich_anchors: bool,

    #[serde(default = "default_enrich_timeout_secs")]
    pub enrich_timeout_secs: u64,
}

/// A cap of 0 means "no cap"
fn deserialize_cap<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    Ok(Option::<usize>::deserialize(deserializer)?.filter(|&n| n > 0))
}

fn default_search_radius_km() -> f64 {
    30.0
}

fn default_target_clusters() -> usize {
    5
}

fn default_max_pois_per_cluster() -> Option<usize> {
    Some(15)
}

fn default_filter_worth_visiting() -> bool {
    true
}

fn default_min_cluster_size_for_filtering() -> usize {
    5
}

fn default_max_restaurants_per_cluster() -> Option<usize> {
    Some(5)
}

fn default_enrich_anchors() -> bool {
    true
}

fn default_enrich_timeout_secs() -> u64 {
    10
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            search_radius_km: default_search_radius_km(),
            target_clusters: default_target_clusters(),
            anchor_method: AnchorMethod::default(),
            max_pois_per_cluster: default_max_pois_per_cluster(),
            eps_km: None,
            min_samples: None,
            filter_worth_visiting: default_filter_worth_visiting(),
            min_cluster_size_for_filtering: default_min_cluster_size_for_filtering(),
            max_restaurants_per_cluster: default_max_restaurants_per_cluster(),
            quality_gate: QualityGate::default(),
            merge_to_target: false,
            enrich_anchors: default_enrich_anchors(),
            enrich_timeout_secs: default_enrich_timeout_secs(),
        }
    }
}

impl ClusterConfig {
    pub fn new(search_radius_km: f64, target_clusters: usize) -> Self {
        Self {
            search_radius_km,
            target_clusters,
            ..Self::default()
        }
    }

    /// Effective size cap; `Some(0)` set in code disables it like `None`
    pub fn size_cap(&self) -> Option<usize> {
        self.max_pois_per_cluster.filter(|&n| n > 0)
    }

    /// Effective restaurant cap, 0 meaning none
    pub fn restaurant_cap(&self) -> Option<usize> {
        self.max_restaurants_per_cluster.filter(|&n| n > 0)
    }

    pub fn enrich_timeout(&self) -> Duration {
        Duration::from_secs(self.enrich_timeout_secs)
    }

    /// Checks values that would make a run meaningless
    pub fn validate(&self) -> Result<(), String> {
        if !self.search_radius_km.is_finite() || self.search_radius_km <= 0.0 {
            return Err(format!("search_radius_km must be positive, got {}", self.search_radius_km));
        }
        if let Some(eps) = self.eps_km
            && (!eps.is_finite() || eps <= 0.0)
        {
            return Err(format!("eps_km must be positive, got {}", eps));
        }
        if self.min_samples == Some(0) {
            return Err("min_samples must be at least 1".to_string());
        }
        Ok(())
    }
}
