//! Stage diagnostics for a clustering run

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, centroid_and_bounds, haversine_km};
use crate::poi::Poi;

/// Why a POI is missing from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingCoordinates,
    Noise,
    SizeCap,
    RestaurantCap,
    QualityFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedPoi {
    pub id: String,
    pub reason: DropReason,
}

/// Enrichment outcome for one anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum EnrichmentOutcome {
    Enriched,
    Failed(String),
    TimedOut,
}

/// Shape of one output cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: usize,
    pub size: usize,
    pub restaurants: usize,
    pub centroid: GeoPoint,
    /// Diagonal of the members' bounding box, in km
    pub span_km: f64,
    pub anchor_id: String,
    #[serde(default)]
    pub enrichment: Option<EnrichmentOutcome>,
}

impl ClusterSummary {
    pub(crate) fn describe(id: usize, members: &[Poi], anchor: &Poi) -> Option<Self> {
        let points: Vec<GeoPoint> = members.iter().filter_map(Poi::coordinates).collect();
        let (centroid, bounds) = centroid_and_bounds(&points)?;
        Some(Self {
            id,
            size: members.len(),
            restaurants: members.iter().filter(|p| p.is_restaurant()).count(),
            centroid,
            span_km: haversine_km(&bounds.southwest, &bounds.northeast),
            anchor_id: anchor.id.clone(),
            enrichment: None,
        })
    }
}

/// Counts after every stage, plus the fate of each dropped POI
///
/// `input == output + dropped.len()` holds for every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub input: usize,
    pub missing_coordinates: usize,
    pub valid: usize,
    /// Points DBSCAN put in some cluster
    pub clustered: usize,
    pub noise_attached: usize,
    pub noise_promoted: usize,
    pub noise_dropped: usize,
    pub after_noise: usize,
    /// Merges done to bring the cluster count down to the target
    pub merged: usize,
    pub after_size_cap: usize,
    pub after_restaurant_cap: usize,
    pub after_quality_filter: usize,
    pub output: usize,
    pub clusters: usize,

    /// DBSCAN parameters actually used; zero when there was nothing to cluster
    pub eps_km: f64,
    pub min_samples: usize,
    pub tuning_iterations: usize,

    pub dropped: Vec<DroppedPoi>,
    pub summaries: Vec<ClusterSummary>,
}

impl ClusterReport {
    pub(crate) fn drop_poi(&mut self, poi: &Poi, reason: DropReason) {
        self.dropped.push(DroppedPoi {
            id: poi.id.clone(),
            reason,
        });
    }

    /// Number of POIs dropped for `reason`
    pub fn dropped_for(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason == reason).count()
    }

    /// Whether every input POI is accounted for
    pub fn is_balanced(&self) -> bool {
        self.input == self.output + self.dropped.len()
    }
}
