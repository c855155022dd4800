//! Search radius resolution: cache, then classifier, then heuristics

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::classifier::{
    ClassificationRequest, Classifier, DestinationCharacteristics, MAX_RADIUS_KM, MIN_RADIUS_KM,
};
use super::heuristic::{RadiusClamp, TravelMode, TripPace, bounds_radius_km, duration_bucket_km};
use crate::cache::{Cache, CacheType, normalize_key_part};
use crate::error::ClassificationError;
use crate::geo::Bounds;

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upper bound on a single classifier call, in seconds
    #[serde(default = "default_classify_timeout_secs")]
    pub classify_timeout_secs: u64,

    /// Travel mode assumed by the bounding-box fallback
    #[serde(default)]
    pub mode: TravelMode,

    /// Trip pace assumed by the bounding-box fallback
    #[serde(default)]
    pub pace: TripPace,

    #[serde(default)]
    pub clamp: RadiusClamp,
}

fn default_classify_timeout_secs() -> u64 {
    20
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            classify_timeout_secs: default_classify_timeout_secs(),
            mode: TravelMode::default(),
            pace: TripPace::default(),
            clamp: RadiusClamp::default(),
        }
    }
}

impl ResolverConfig {
    pub fn classify_timeout(&self) -> Duration {
        Duration::from_secs(self.classify_timeout_secs)
    }
}

/// Where a resolved radius came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusSource {
    Cache,
    Classifier,
    BoundsHeuristic,
    DurationBuckets,
}

impl RadiusSource {
    pub fn is_fallback(self) -> bool {
        matches!(self, RadiusSource::BoundsHeuristic | RadiusSource::DurationBuckets)
    }
}

/// Outcome of a resolution: the radius plus how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusResolution {
    /// Always within `[5, 100]` km
    pub radius_km: f64,
    pub source: RadiusSource,
    pub characteristics: DestinationCharacteristics,
}

/// Decides how far around a destination to search for POIs
///
/// Classifier results are cached through the injected [`Cache`] under the
/// normalized `(destination, duration_days)` key. Heuristic fallbacks are
/// never cached, so a classifier outage does not mask later successes.
pub struct SearchRadiusResolver {
    classifier: Arc<dyn Classifier>,
    cache: Arc<dyn Cache>,
    config: ResolverConfig,
}

impl SearchRadiusResolver {
    pub fn new(classifier: Arc<dyn Classifier>, cache: Arc<dyn Cache>, config: ResolverConfig) -> Self {
        Self {
            classifier,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Search radius in km for `destination` over `duration_days`
    ///
    /// Never fails; the value is always within `[5, 100]`.
    pub async fn resolve(&self, destination: &str, duration_days: u32, bounds: Option<&Bounds>) -> f64 {
        self.resolve_detailed(destination, duration_days, bounds)
            .await
            .radius_km
    }

    /// Like [`resolve`](Self::resolve), reporting the source of the value
    pub async fn resolve_detailed(
        &self,
        destination: &str,
        duration_days: u32,
        bounds: Option<&Bounds>,
    ) -> RadiusResolution {
        let dest_key = normalize_key_part(destination);
        let days_key = duration_days.to_string();
        let key_parts = [dest_key.as_str(), days_key.as_str()];

        if let Some(characteristics) = self.cached(&key_parts) {
            info!(
                %destination,
                %duration_days,
                radius_km = %characteristics.recommended_radius_km,
                "SearchRadiusResolver::resolve: cache hit"
            );
            return RadiusResolution {
                radius_km: characteristics.recommended_radius_km,
                source: RadiusSource::Cache,
                characteristics,
            };
        }

        info!(%destination, %duration_days, "SearchRadiusResolver::resolve: cache miss, classifying");
        let request = ClassificationRequest {
            destination: destination.to_string(),
            duration_days,
        };

        match self.classify(&request).await {
            Ok(characteristics) => {
                info!(
                    %destination,
                    radius_km = %characteristics.recommended_radius_km,
                    city_size = %characteristics.city_size,
                    density = %characteristics.density,
                    destination_type = %characteristics.destination_type,
                    "SearchRadiusResolver::resolve: classified"
                );
                self.store(&key_parts, &characteristics);
                RadiusResolution {
                    radius_km: characteristics.recommended_radius_km,
                    source: RadiusSource::Classifier,
                    characteristics,
                }
            }
            Err(e) => {
                let resolution = self.fallback(duration_days, bounds);
                warn!(
                    %destination,
                    error = %e,
                    transient = %e.is_transient(),
                    radius_km = %resolution.radius_km,
                    source = ?resolution.source,
                    "SearchRadiusResolver::resolve: classification failed, using fallback"
                );
                resolution
            }
        }
    }

    /// Evicts every cached radius
    pub fn clear_cache(&self) {
        debug!("SearchRadiusResolver::clear_cache: called");
        self.cache.clear(Some(CacheType::DestinationRadius));
    }

    fn cached(&self, key_parts: &[&str]) -> Option<DestinationCharacteristics> {
        let payload = self.cache.get(CacheType::DestinationRadius, key_parts)?;
        match serde_json::from_value::<DestinationCharacteristics>(payload) {
            Ok(c) => match c.validate() {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!(error = %e, "SearchRadiusResolver::cached: invalid cached entry, ignoring");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "SearchRadiusResolver::cached: undecodable cached entry, ignoring");
                None
            }
        }
    }

    fn store(&self, key_parts: &[&str], characteristics: &DestinationCharacteristics) {
        let payload = match serde_json::to_value(characteristics) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "SearchRadiusResolver::store: serialization failed");
                return;
            }
        };
        match self.cache.set(CacheType::DestinationRadius, payload, key_parts) {
            Ok(()) => debug!(?key_parts, "SearchRadiusResolver::store: cached"),
            Err(e) => warn!(error = %e, "SearchRadiusResolver::store: cache write failed"),
        }
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<DestinationCharacteristics, ClassificationError> {
        let timeout = self.config.classify_timeout();
        match tokio::time::timeout(timeout, self.classifier.classify(request)).await {
            Ok(result) => result?.validate(),
            Err(_) => Err(ClassificationError::Timeout(timeout)),
        }
    }

    fn fallback(&self, duration_days: u32, bounds: Option<&Bounds>) -> RadiusResolution {
        let (raw_km, source, method) = match bounds {
            Some(b) => (
                bounds_radius_km(b, duration_days, self.config.mode, self.config.pace, &self.config.clamp),
                RadiusSource::BoundsHeuristic,
                "bounding-box heuristic",
            ),
            None => (
                duration_bucket_km(duration_days),
                RadiusSource::DurationBuckets,
                "duration-based estimate",
            ),
        };

        let radius_km = if raw_km.is_finite() {
            raw_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
        } else {
            duration_bucket_km(duration_days)
        };

        RadiusResolution {
            radius_km,
            source,
            characteristics: DestinationCharacteristics::fallback(radius_km, method),
        }
    }
}
