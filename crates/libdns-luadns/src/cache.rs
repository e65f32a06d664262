// # Zone ID Cache
//
// Maps normalized zone names to LuaDNS zone IDs for the lifetime of one
// provider. Entries are only inserted after the zone was found in a
// `GET /zones` response and are never evicted, so a zone renamed or deleted
// upstream stays cached until the provider is dropped.
//
// Lookups share a read lock; inserts take the write lock. The lock is only
// held for the map access itself, never across a request.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Concurrency-safe zone name to zone ID map
#[derive(Debug, Default)]
pub struct ZoneCache {
    inner: RwLock<HashMap<String, u64>>,
}

impl ZoneCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached ID for an already normalized zone name
    pub fn get(&self, zone: &str) -> Option<u64> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(zone).copied()
    }

    /// Record the ID of a zone
    ///
    /// Concurrent misses for the same zone both insert; the value comes from
    /// the same listing, so the last write is equivalent to the first.
    pub fn insert(&self, zone: impl Into<String>, zone_id: u64) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(zone.into(), zone_id);
    }

    /// Number of cached zones
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no zone has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
