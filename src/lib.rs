//! Search radius resolution and POI clustering for multi-day itineraries
//!
//! Given a destination and a trip length, the crate decides how wide an area
//! to search, how many candidates to request per category, and finally groups
//! the fetched points of interest into day-sized geographic clusters, each
//! with a representative anchor.
//!
//! # Modules
//!
//! - [`geo`] - haversine distance, centroids and geocode bounds
//! - [`cluster`] - DBSCAN over (lat, lon) backed by a 2-d tree
//! - [`poi`] - the POI value type, category lookup and quality scoring
//! - [`cache`] - injected cache service used for radius memoization
//! - [`radius`] - search radius resolution with heuristic fallback
//! - [`budget`] - per-category result budget
//! - [`clusterer`] - the full clustering pipeline with caps, filters and anchors
//! - [`orchestrator`] - one-call façade over the pieces above
//! - [`config`] - YAML-loadable configuration

pub mod budget;
pub mod cache;
pub mod cluster;
pub mod clusterer;
pub mod config;
pub mod error;
pub mod geo;
pub mod orchestrator;
pub mod poi;
pub mod radius;

pub use budget::{BudgetConfig, DestinationKind, DestinationProfiler, KeywordProfiler, ResultBudgetCalculator};
pub use cache::{Cache, CacheType, MemoryCache};
pub use clusterer::{
    AnchorMethod, ClusterConfig, ClusterReport, ClusterResult, ClusterSummary, DropReason, EnrichmentOutcome,
    PlaceDetails, PlaceDetailsEnhancer, PoiClusterer,
};
pub use config::PlannerConfig;
pub use error::{CacheError, ClassificationError, ConfigError, EnhancementError};
pub use geo::{Bounds, GeoPoint};
pub use orchestrator::{ClusterOrchestrator, SearchPlan};
pub use poi::{CategoryGroup, Poi, QualityGate};
pub use radius::{
    ClassificationRequest, Classifier, DestinationCharacteristics, RadiusResolution, RadiusSource, ResolverConfig,
    SearchRadiusResolver,
};
