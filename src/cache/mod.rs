//! Injected cache service
//!
//! The cache is created by the application, shared as `Arc<dyn Cache>`, and
//! cleared or evicted explicitly. Keys are derived deterministically from a
//! cache type and normalized key parts (trimmed, lower-cased) so that
//! `"Tokyo, Japan"` and `" TOKYO, JAPAN"` address the same entry.
pub mod memory;


pub use memory::MemoryCache;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::error::CacheError;

/// Kind of cached payload; each kind has its own TTL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheType {
    /// Destination characteristics keyed by (destination, duration_days)
    DestinationRadius,
}

impl CacheType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheType::DestinationRadius => "destination_radius",
        }
    }

    /// Default time-to-live for entries of this type
    pub fn default_ttl(&self) -> Duration {
        match self {
            // Destination characteristics rarely change
            CacheType::DestinationRadius => Duration::from_secs(90 * 24 * 60 * 60),
        }
    }
}

impl fmt::Display for CacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value cache with typed namespaces
///
/// `get` never fails: a backend problem is indistinguishable from a miss for
/// callers. `set` reports failure so callers can log it.
pub trait Cache: Send + Sync {
    fn get(&self, cache_type: CacheType, key_parts: &[&str]) -> Option<Value>;

    fn set(&self, cache_type: CacheType, payload: Value, key_parts: &[&str]) -> Result<(), CacheError>;

    /// Removes one entry, returning whether it existed
    fn delete(&self, cache_type: CacheType, key_parts: &[&str]) -> bool;

    /// Removes every entry of `cache_type`, or everything when `None`
    fn clear(&self, cache_type: Option<CacheType>);
}

/// Builds the storage key for `key_parts` under `cache_type`
pub fn cache_key(cache_type: CacheType, key_parts: &[&str]) -> String {
    let parts: Vec<String> = key_parts.iter().map(|p| normalize_key_part(p)).collect();
    format!("{}:{}", cache_type.as_str(), parts.join("|"))
}

/// Trims and lower-cases a key part
pub fn normalize_key_part(part: &str) -> String {
    part.trim().to_lowercase()
}
