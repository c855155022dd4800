//! Optional anchor enrichment through a place-details service

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

use super::report::EnrichmentOutcome;
use crate::error::EnhancementError;
use crate::poi::Poi;

/// Extra facts about a place, as returned by a details lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub editorial_summary: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<Value>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Fetches details for a single POI
#[async_trait]
pub trait PlaceDetailsEnhancer: Send + Sync {
    async fn enhance(&self, poi: &Poi) -> Result<PlaceDetails, EnhancementError>;
}

/// Merges `details` into `poi`
///
/// Rating and review count are overwritten when present. The full details
/// are stored under `enhanced_details` in the source payload, and a phone
/// number is copied to `phone_number` unless one is already there.
pub fn apply_details(poi: &mut Poi, details: &PlaceDetails) {
    if let Some(rating) = details.rating {
        poi.rating = Some(rating);
    }
    if let Some(count) = details.review_count {
        poi.review_count = Some(count);
    }

    let mut source = match std::mem::take(&mut poi.source) {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("raw".to_string(), other);
            map
        }
    };

    if let Some(phone) = &details.phone_number {
        source
            .entry("phone_number")
            .or_insert_with(|| Value::String(phone.clone()));
    }
    match serde_json::to_value(details) {
        Ok(v) => {
            source.insert("enhanced_details".to_string(), v);
        }
        Err(e) => warn!(poi = %poi.id, error = %e, "apply_details: could not serialize details"),
    }

    poi.source = Value::Object(source);
}

/// Looks up every POI concurrently, each call bounded by `timeout`
pub async fn fetch_details(
    enhancer: &dyn PlaceDetailsEnhancer,
    pois: &[&Poi],
    timeout: Duration,
) -> Vec<Result<PlaceDetails, EnrichmentOutcome>> {
    let calls = pois.iter().map(|poi| async move {
        match tokio::time::timeout(timeout, enhancer.enhance(poi)).await {
            Ok(Ok(details)) => {
                debug!(poi = %poi.id, "fetch_details: enriched");
                Ok(details)
            }
            Ok(Err(e)) => {
                warn!(poi = %poi.id, error = %e, "fetch_details: lookup failed");
                Err(EnrichmentOutcome::Failed(e.to_string()))
            }
            Err(_) => {
                warn!(poi = %poi.id, ?timeout, "fetch_details: lookup timed out");
                Err(EnrichmentOutcome::TimedOut)
            }
        }
    });

    join_all(calls).await
}
