//! Destination classifier seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClassificationError;

/// Smallest radius a classifier may recommend, in km
pub const MIN_RADIUS_KM: f64 = 5.0;

/// Largest radius a classifier may recommend, in km
pub const MAX_RADIUS_KM: f64 = 100.0;

/// What the classifier is asked about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub destination: String,
    pub duration_days: u32,
}

/// Structured classifier output, cached per (destination, duration)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationCharacteristics {
    /// small, medium, large or mega
    pub city_size: String,
    /// sparse, moderate, dense or very_dense
    pub density: String,
    /// urban, suburban, resort, rural, island or multiple_areas
    pub destination_type: String,
    #[serde(rename = "search_radius_km")]
    pub recommended_radius_km: f64,
    #[serde(rename = "reasoning")]
    pub rationale: String,
}

impl DestinationCharacteristics {
    /// Rejects output whose radius is not finite or outside `[5, 100]` km
    pub fn validate(self) -> Result<Self, ClassificationError> {
        let r = self.recommended_radius_km;
        if !r.is_finite() || !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&r) {
            return Err(ClassificationError::Malformed(format!(
                "search_radius_km {} outside [{}, {}]",
                r, MIN_RADIUS_KM, MAX_RADIUS_KM
            )));
        }
        Ok(self)
    }

    /// Placeholder characteristics describing a heuristic fallback
    pub(crate) fn fallback(radius_km: f64, method: &str) -> Self {
        Self {
            city_size: "medium".to_string(),
            density: "moderate".to_string(),
            destination_type: "urban".to_string(),
            recommended_radius_km: radius_km,
            rationale: format!("Fallback using {} because classification was unavailable", method),
        }
    }
}

/// Classifies a destination, typically by asking a language model
///
/// Implementations may be slow; the resolver wraps every call in a timeout.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<DestinationCharacteristics, ClassificationError>;
}
