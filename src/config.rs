//! Planner configuration types and loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::budget::BudgetConfig;
use crate::clusterer::ClusterConfig;
use crate::error::ConfigError;
use crate::radius::ResolverConfig;

/// Project-local config file picked up when no path is given
pub const LOCAL_CONFIG_FILE: &str = "poi_cluster.yml";

/// Complete planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Clustering pipeline defaults
    pub clustering: ClusterConfig,

    /// Search radius resolution
    pub radius: ResolverConfig,

    /// Per-category result budget
    pub budget: BudgetConfig,
}

impl PlannerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates the file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, else `./poi_cluster.yml` when present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load(&local) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Failed to load config from {}: {}", local.display(), e),
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Rejects values no run could use
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clustering.validate().map_err(ConfigError::Invalid)?;

        if self.radius.classify_timeout_secs == 0 {
            return Err(ConfigError::Invalid("radius.classify_timeout_secs must be positive".to_string()));
        }
        let clamp = &self.radius.clamp;
        if !(clamp.soft_min_km <= clamp.soft_max_km && clamp.soft_max_km <= clamp.hard_max_km) {
            return Err(ConfigError::Invalid(format!(
                "radius.clamp must satisfy soft_min_km <= soft_max_km <= hard_max_km, got {} / {} / {}",
                clamp.soft_min_km, clamp.soft_max_km, clamp.hard_max_km
            )));
        }
        if self.budget.min_results > self.budget.max_results {
            return Err(ConfigError::Invalid(format!(
                "budget.min_results ({}) exceeds budget.max_results ({})",
                self.budget.min_results, self.budget.max_results
            )));
        }
        Ok(())
    }
}
