//! Error types for the collaborator seams
//!
//! None of these reach the caller of `resolve()` or `cluster()`: classifier and
//! enhancer failures are recovered locally, and cache failures are logged.
//! They exist so that collaborator implementations can say what went wrong.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a destination [`Classifier`](crate::radius::Classifier)
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("Classifier timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed classifier output: {0}")]
    Malformed(String),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by a [`PlaceDetailsEnhancer`](crate::clusterer::PlaceDetailsEnhancer)
#[derive(Debug, Error)]
pub enum EnhancementError {
    #[error("Place details timed out after {0:?}")]
    Timeout(Duration),

    #[error("No details found for place {0}")]
    NotFound(String),

    #[error("Place details unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by a [`Cache`](crate::cache::Cache) implementation
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache lock poisoned")]
    Poisoned,

    #[error("Cache payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ClassificationError {
    /// Whether a later retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ClassificationError::Timeout(_) | ClassificationError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_error_is_transient() {
        assert!(ClassificationError::Timeout(Duration::from_secs(5)).is_transient());
        assert!(ClassificationError::Unavailable("503".to_string()).is_transient());
        assert!(!ClassificationError::Malformed("missing radius".to_string()).is_transient());
    }

    #[test]
    fn test_error_messages() {
        let err = EnhancementError::NotFound("ChIJ123".to_string());
        assert_eq!(err.to_string(), "No details found for place ChIJ123");

        let err = ConfigError::Invalid("target_clusters must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: target_clusters must be positive");
    }
}
