//! In-process cache with per-type TTL

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::{Cache, CacheType, cache_key};
use crate::error::CacheError;

struct Entry {
    payload: Value,
    /// `None` when the TTL overflows `Instant`
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|t| now >= t)
    }
}

/// Thread-safe in-memory [`Cache`]
///
/// Read-mostly: lookups take a shared lock, writes replace the whole entry
/// (last writer wins). Expired entries are invisible to `get` and are
/// evicted on the next `set`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
    ttl_overrides: HashMap<CacheType, Duration>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the TTL of one cache type
    pub fn with_ttl(mut self, cache_type: CacheType, ttl: Duration) -> Self {
        self.ttl_overrides.insert(cache_type, ttl);
        self
    }

    pub fn ttl(&self, cache_type: CacheType) -> Duration {
        self.ttl_overrides
            .get(&cache_type)
            .copied()
            .unwrap_or_else(|| cache_type.default_ttl())
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cache for MemoryCache {
    fn get(&self, cache_type: CacheType, key_parts: &[&str]) -> Option<Value> {
        let key = cache_key(cache_type, key_parts);
        let Ok(entries) = self.entries.read() else {
            warn!(%key, "MemoryCache::get: lock poisoned, treating as miss");
            return None;
        };

        match entries.get(&key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                debug!(%key, "MemoryCache::get: hit");
                Some(entry.payload.clone())
            }
            Some(_) => {
                debug!(%key, "MemoryCache::get: expired");
                None
            }
            None => {
                debug!(%key, "MemoryCache::get: miss");
                None
            }
        }
    }

    fn set(&self, cache_type: CacheType, payload: Value, key_parts: &[&str]) -> Result<(), CacheError> {
        let key = cache_key(cache_type, key_parts);
        let expires_at = Instant::now().checked_add(self.ttl(cache_type));
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;

        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let evicted = before - entries.len();

        debug!(%key, %evicted, "MemoryCache::set: upsert");
        entries.insert(key, Entry { payload, expires_at });
        Ok(())
    }

    fn delete(&self, cache_type: CacheType, key_parts: &[&str]) -> bool {
        let key = cache_key(cache_type, key_parts);
        match self.entries.write() {
            Ok(mut entries) => entries.remove(&key).is_some(),
            Err(_) => {
                warn!(%key, "MemoryCache::delete: lock poisoned");
                false
            }
        }
    }

    fn clear(&self, cache_type: Option<CacheType>) {
        let Ok(mut entries) = self.entries.write() else {
            warn!("MemoryCache::clear: lock poisoned");
            return;
        };
        match cache_type {
            Some(t) => {
                let prefix = format!("{}:", t.as_str());
                entries.retain(|key, _| !key.starts_with(&prefix));
            }
            None => entries.clear(),
        }
        debug!(?cache_type, "MemoryCache::clear: done");
    }
}
