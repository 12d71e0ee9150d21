// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! TTL-based search result caching
//!
//! Entries are keyed by the lowercased query plus the requested result
//! count, expire on read once past the TTL, and are evicted oldest-first
//! (by insertion time, not recency of access) when at capacity.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::types::SearchResult;

/// TTL-based cache for search results
pub struct SearchCache {
    cache: RwLock<HashMap<String, CachedEntry>>,
    ttl: Duration,
    max_entries: usize,
}

struct CachedEntry {
    results: Vec<SearchResult>,
    inserted_at: Instant,
}

impl SearchCache {
    /// Create a new search cache
    ///
    /// # Arguments
    /// * `ttl_secs` - Time-to-live for cache entries in seconds
    /// * `max_entries` - Maximum number of entries to store
    pub fn new(ttl_secs: u64, max_entries: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_secs),
            max_entries,
        }
    }

    /// Get cached results for a query
    ///
    /// Returns None if not found. An entry found expired is removed at
    /// discovery time rather than waiting for a background sweep.
    pub fn get(&self, query: &str, max_results: usize) -> Option<Vec<SearchResult>> {
        let mut cache = self.cache.write().ok()?;
        let key = Self::cache_key(query, max_results);

        match cache.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() <= self.ttl => Some(entry.results.clone()),
            Some(_) => {
                cache.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Insert results into the cache
    ///
    /// Empty result sets are never cached; only successful non-empty
    /// searches populate an entry.
    pub fn insert(&self, query: &str, max_results: usize, results: &[SearchResult]) {
        if results.is_empty() {
            return;
        }

        let mut cache = match self.cache.write() {
            Ok(c) => c,
            Err(_) => return,
        };

        // Evict the oldest-inserted entry when at capacity
        if cache.len() >= self.max_entries {
            Self::evict_oldest(&mut cache);
        }

        let key = Self::cache_key(query, max_results);
        cache.insert(
            key,
            CachedEntry {
                results: results.to_vec(),
                inserted_at: Instant::now(),
            },
        );
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Number of entries currently stored (expired-but-unread included)
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cache_key(query: &str, max_results: usize) -> String {
        format!("{}_{}", query.trim().to_lowercase(), max_results)
    }

    fn evict_oldest(cache: &mut HashMap<String, CachedEntry>) {
        if let Some(oldest_key) = cache
            .iter()
            .min_by_key(|(_, v)| v.inserted_at)
            .map(|(k, _)| k.clone())
        {
            cache.remove(&oldest_key);
        }
    }
}
