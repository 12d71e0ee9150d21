// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search gateway orchestration
//!
//! Coordinates query validation, per-client rate limiting, result caching,
//! and the upstream fetch-and-parse pipeline.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::cache::SearchCache;
use super::config::SearchConfig;
use super::fetch::{HttpFetcher, PageFetcher};
use super::parser::{FallbackParser, PrimaryParser, ResultParser};
use super::rate_limiter::ClientRateLimiter;
use super::types::{SearchError, SearchOutcome, PROVIDER_NAME};

/// Scraping method reported by `status()`
const SEARCH_METHOD: &str = "HTML scraping (no API key required)";

/// Point-in-time gateway status report
#[derive(Debug, Clone)]
pub struct GatewayStatus {
    /// Provider identity
    pub provider: &'static str,
    /// Human-readable description of the search method
    pub method: &'static str,
    /// Entries currently in the result cache
    pub cache_size: usize,
    /// Client keys currently tracked by the rate limiter
    pub rate_limit_entries: usize,
}

/// Search gateway over DuckDuckGo's HTML results page
///
/// Owns the result cache and the rate-limit state exclusively; both are
/// process-lifetime in-memory structures.
pub struct SearchGateway {
    fetcher: Box<dyn PageFetcher>,
    primary: PrimaryParser,
    fallback: FallbackParser,
    cache: SearchCache,
    rate_limiter: ClientRateLimiter,
    config: SearchConfig,
}

impl SearchGateway {
    /// Create a gateway backed by the real upstream endpoint
    pub fn new(config: SearchConfig) -> Self {
        let fetcher = Box::new(HttpFetcher::new(config.request_timeout_secs));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a gateway with an injected fetcher
    pub fn with_fetcher(config: SearchConfig, fetcher: Box<dyn PageFetcher>) -> Self {
        let cache = SearchCache::new(config.cache_ttl_secs, config.cache_max_entries);
        let rate_limiter = ClientRateLimiter::new(
            config.rate_limit_window_secs,
            config.rate_limit_max_requests,
        );

        Self {
            fetcher,
            primary: PrimaryParser::new(),
            fallback: FallbackParser::new(),
            cache,
            rate_limiter,
            config,
        }
    }

    /// Perform a search on behalf of `client_id`
    ///
    /// Validation and rate limiting run before any cache or network
    /// access. Cache hits short-circuit with `cached: true`; misses go
    /// through the fetch-and-parse pipeline, and non-empty result sets
    /// are cached before returning. A zero-result outcome is not an
    /// error.
    ///
    /// Concurrent identical queries are not deduplicated: both fetch,
    /// and the last writer overwrites the cache entry.
    pub async fn search(
        &self,
        query: &str,
        max_results: Option<usize>,
        client_id: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "query cannot be empty".to_string(),
            });
        }

        let max_results = max_results.unwrap_or(self.config.default_num_results);

        self.rate_limiter.check(client_id).map_err(|e| {
            warn!("Rate limited client {}", client_id);
            e
        })?;

        if let Some(results) = self.cache.get(query, max_results) {
            debug!("Cache hit for query: {}", query);
            return Ok(SearchOutcome {
                query: query.to_string(),
                result_count: results.len(),
                results,
                cached: true,
                search_time_ms: 0,
            });
        }

        let start = Instant::now();
        let html = self.fetcher.fetch(query).await?;

        let mut results = self.primary.parse(&html, max_results);
        if results.is_empty() {
            debug!("Structural pattern matched nothing, trying link-harvest fallback");
            results = self.fallback.parse(&html, max_results);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;

        if !results.is_empty() {
            self.cache.insert(query, max_results, &results);
        }

        info!(
            "Search complete: {} results for '{}' in {}ms",
            results.len(),
            query,
            elapsed_ms
        );

        Ok(SearchOutcome {
            query: query.to_string(),
            result_count: results.len(),
            results,
            cached: false,
            search_time_ms: elapsed_ms,
        })
    }

    /// Empty the result cache and the rate-limit map unconditionally
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.rate_limiter.clear();
        info!("Search cache and rate-limit history cleared");
    }

    /// Report provider identity and current map sizes, with no side effects
    pub fn status(&self) -> GatewayStatus {
        GatewayStatus {
            provider: PROVIDER_NAME,
            method: SEARCH_METHOD,
            cache_size: self.cache.len(),
            rate_limit_entries: self.rate_limiter.entry_count(),
        }
    }
}
