//! One-call façade over radius resolution, budgeting and clustering

use std::sync::Arc;
use tracing::info;

use crate::budget::{DestinationKind, KeywordProfiler, ResultBudgetCalculator};
use crate::cache::Cache;
use crate::clusterer::{ClusterConfig, ClusterResult, PlaceDetailsEnhancer, PoiClusterer};
use crate::config::PlannerConfig;
use crate::geo::Bounds;
use crate::poi::Poi;
use crate::radius::{Classifier, RadiusResolution, SearchRadiusResolver};

/// What to ask the place-data providers for
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub destination: String,
    pub duration_days: u32,
    pub radius: RadiusResolution,
    pub max_results_per_category: usize,
    pub kind: DestinationKind,
    /// Provider place types to query
    pub categories: Vec<String>,
}

impl SearchPlan {
    pub fn radius_km(&self) -> f64 {
        self.radius.radius_km
    }
}

/// Wires the resolver, the budget calculator and the clusterer together
///
/// Holds no per-request state; one instance serves any number of requests.
pub struct ClusterOrchestrator {
    resolver: SearchRadiusResolver,
    budget: ResultBudgetCalculator,
    enhancer: Option<Arc<dyn PlaceDetailsEnhancer>>,
    defaults: ClusterConfig,
}

impl ClusterOrchestrator {
    pub fn new(resolver: SearchRadiusResolver, budget: ResultBudgetCalculator) -> Self {
        Self {
            resolver,
            budget,
            enhancer: None,
            defaults: ClusterConfig::default(),
        }
    }

    /// Builds every component from `config` with the keyword profiler
    pub fn from_config(config: &PlannerConfig, classifier: Arc<dyn Classifier>, cache: Arc<dyn Cache>) -> Self {
        let resolver = SearchRadiusResolver::new(classifier, cache, config.radius.clone());
        let budget = ResultBudgetCalculator::new(Arc::new(KeywordProfiler::new()), config.budget);
        Self::new(resolver, budget).with_cluster_defaults(config.clustering.clone())
    }

    pub fn with_enhancer(mut self, enhancer: Arc<dyn PlaceDetailsEnhancer>) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    /// Config used when a call does not bring its own
    pub fn with_cluster_defaults(mut self, defaults: ClusterConfig) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn resolver(&self) -> &SearchRadiusResolver {
        &self.resolver
    }

    pub fn budget(&self) -> &ResultBudgetCalculator {
        &self.budget
    }

    /// Radius, per-category budget and categories for a destination
    pub async fn plan_search(&self, destination: &str, duration_days: u32, bounds: Option<&Bounds>) -> SearchPlan {
        let radius = self.resolver.resolve_detailed(destination, duration_days, bounds).await;
        let max_results_per_category = self.budget.max_results_per_category(duration_days, destination, bounds);
        let kind = self.budget.profile(destination);
        let categories = kind.search_categories().into_iter().map(String::from).collect();

        info!(
            %destination,
            %duration_days,
            radius_km = %radius.radius_km,
            source = ?radius.source,
            %max_results_per_category,
            ?kind,
            "ClusterOrchestrator::plan_search"
        );

        SearchPlan {
            destination: destination.to_string(),
            duration_days,
            radius,
            max_results_per_category,
            kind,
            categories,
        }
    }

    /// Clusters `pois` and picks anchors
    ///
    /// `search_radius_km` and `target_clusters` override whatever `config`
    /// (or the orchestrator's defaults when `None`) says.
    pub fn cluster_and_anchor(
        &self,
        pois: Vec<Poi>,
        search_radius_km: f64,
        target_clusters: usize,
        config: Option<ClusterConfig>,
    ) -> ClusterResult {
        self.clusterer(pois, search_radius_km, target_clusters, config).cluster()
    }

    /// Like [`cluster_and_anchor`](Self::cluster_and_anchor), then enriches
    /// anchors when an enhancer is configured
    pub async fn cluster_and_anchor_enriched(
        &self,
        pois: Vec<Poi>,
        search_radius_km: f64,
        target_clusters: usize,
        config: Option<ClusterConfig>,
    ) -> ClusterResult {
        let clusterer = self.clusterer(pois, search_radius_km, target_clusters, config);
        match &self.enhancer {
            Some(enhancer) => clusterer.cluster_and_enrich(enhancer.as_ref()).await,
            None => clusterer.cluster(),
        }
    }

    fn clusterer(
        &self,
        pois: Vec<Poi>,
        search_radius_km: f64,
        target_clusters: usize,
        config: Option<ClusterConfig>,
    ) -> PoiClusterer {
        let config = ClusterConfig {
            search_radius_km,
            target_clusters,
            ..config.unwrap_or_else(|| self.defaults.clone())
        };
        PoiClusterer::new(pois, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::clusterer::PlaceDetails;
    use crate::clusterer::testdata::tokyo_pois;
    use crate::error::{ClassificationError, EnhancementError};
    use crate::geo::GeoPoint;
    use crate::radius::{ClassificationRequest, DestinationCharacteristics, RadiusSource};
    use async_trait::async_trait;

    struct OfflineClassifier;

    #[async_trait]
    impl Classifier for OfflineClassifier {
        async fn classify(
            &self,
            _request: &ClassificationRequest,
        ) -> Result<DestinationCharacteristics, ClassificationError> {
            Err(ClassificationError::Unavailable("offline".to_string()))
        }
    }

    struct StarEnhancer;

    #[async_trait]
    impl PlaceDetailsEnhancer for StarEnhancer {
        async fn enhance(&self, _poi: &Poi) -> Result<PlaceDetails, EnhancementError> {
            Ok(PlaceDetails {
                rating: Some(5.0),
                ..PlaceDetails::default()
            })
        }
    }

    fn orchestrator() -> ClusterOrchestrator {
        ClusterOrchestrator::from_config(
            &PlannerConfig::default(),
            Arc::new(OfflineClassifier),
            Arc::new(MemoryCache::new()),
        )
    }

    #[tokio::test]
    async fn test_plan_search_fallback() {
        let plan = orchestrator().plan_search("Grand Canyon, USA", 2, None).await;

        assert_eq!(plan.radius_km(), 15.0);
        assert_eq!(plan.radius.source, RadiusSource::DurationBuckets);
        assert_eq!(plan.kind, DestinationKind::NaturalArea);
        assert_eq!(plan.max_results_per_category, 20);
        assert!(plan.categories.contains(&"park".to_string()));
    }

    #[tokio::test]
    async fn test_plan_search_with_bounds() {
        let bounds = Bounds::new(GeoPoint::new(35.8986, 139.9199), GeoPoint::new(35.5014, 139.5629));
        let plan = orchestrator().plan_search("Tokyo, Japan", 5, Some(&bounds)).await;

        assert_eq!(plan.radius_km(), 30.0);
        assert_eq!(plan.radius.source, RadiusSource::BoundsHeuristic);
        assert_eq!(plan.kind, DestinationKind::MajorCity);
        assert_eq!(plan.max_results_per_category, 79);
    }

    #[test]
    fn test_cluster_and_anchor_overrides_radius_and_target() {
        let config = ClusterConfig {
            max_pois_per_cluster: None,
            max_restaurants_per_cluster: Some(5),
            filter_worth_visiting: false,
            ..ClusterConfig::new(1.0, 1)
        };
        let result = orchestrator().cluster_and_anchor(tokyo_pois(), 30.0, 5, Some(config));

        assert_eq!(result.len(), 5);
        assert_eq!(result.report.output, 23);
    }

    #[tokio::test]
    async fn test_enriched_without_enhancer_is_plain() {
        let o = orchestrator();
        let plain = o.cluster_and_anchor(tokyo_pois(), 30.0, 5, None);
        let enriched = o.cluster_and_anchor_enriched(tokyo_pois(), 30.0, 5, None).await;
        assert_eq!(plain, enriched);
    }

    #[tokio::test]
    async fn test_enriched_with_enhancer() {
        let o = orchestrator().with_enhancer(Arc::new(StarEnhancer));
        let result = o.cluster_and_anchor_enriched(tokyo_pois(), 30.0, 5, None).await;

        assert_eq!(result.len(), 5);
        assert!(result.anchors.values().all(|a| a.rating == Some(5.0)));
    }
}
