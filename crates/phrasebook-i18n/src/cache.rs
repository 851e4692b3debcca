//! Resolved-template cache
//!
//! Entries are keyed by the culture name as requested, so a repeat lookup for
//! `fr-CA` skips the fallback walk even when the template came from `fr` or
//! `en`. Entries are never evicted and failed resolutions are never stored.

use crate::domain::ResourceKey;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

type CacheKey = (String, ResourceKey);

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Concurrent (culture, key) to template memo
#[derive(Debug)]
pub struct ResolvedCache {
    entries: DashMap<CacheKey, Arc<str>>,
    enabled: bool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolvedCache {
    /// Create an empty cache; a disabled cache resolves on every call
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: DashMap::new(),
            enabled,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cached template, if present
    pub fn get(&self, culture: &str, key: &ResourceKey) -> Option<Arc<str>> {
        if !self.enabled {
            return None;
        }
        let entry = self.entries.get(&(culture.to_string(), key.clone()))?;
        self.hits.fetch_add(1, Ordering::Relaxed);
        trace!("Cache hit for {} in '{}'", key, culture);
        Some(Arc::clone(entry.value()))
    }

    /// Cached template, or the result of `resolve` stored for next time
    ///
    /// `resolve` runs outside any shard lock. When two callers race on the
    /// same miss, both compute but both return the value that was stored.
    pub fn get_or_resolve<E, F>(&self, culture: &str, key: &ResourceKey, resolve: F) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        if let Some(hit) = self.get(culture, key) {
            return Ok(hit);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let resolved: Arc<str> = Arc::from(resolve()?);
        if !self.enabled {
            return Ok(resolved);
        }

        let stored = self
            .entries
            .entry((culture.to_string(), key.clone()))
            .or_insert(resolved);
        Ok(Arc::clone(stored.value()))
    }

    /// Optional variant of [`get_or_resolve`](Self::get_or_resolve) for probing lookups
    pub fn get_or_probe<F>(&self, culture: &str, key: &ResourceKey, probe: F) -> Option<Arc<str>>
    where
        F: FnOnce() -> Option<String>,
    {
        self.get_or_resolve(culture, key, || probe().ok_or(())).ok()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop every entry and reset counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for ResolvedCache {
    fn default() -> Self {
        Self::new(true)
    }
}
