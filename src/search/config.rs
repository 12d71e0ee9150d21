// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the search gateway

use std::env;

/// Configuration for the search gateway
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Cache TTL in seconds
    pub cache_ttl_secs: u64,
    /// Maximum number of cached result sets
    pub cache_max_entries: usize,
    /// Rate-limit trailing window in seconds
    pub rate_limit_window_secs: u64,
    /// Maximum requests per client within the window
    pub rate_limit_max_requests: u32,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
    /// Default number of results per search
    pub default_num_results: usize,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("SEARCH_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: env::var("SEARCH_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            rate_limit_window_secs: env::var("SEARCH_RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            rate_limit_max_requests: env::var("SEARCH_RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            request_timeout_secs: env::var("SEARCH_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            default_num_results: env::var("SEARCH_DEFAULT_NUM_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }
        if self.cache_max_entries == 0 {
            return Err("Cache capacity must be greater than 0".to_string());
        }
        if self.rate_limit_window_secs == 0 {
            return Err("Rate limit window must be greater than 0".to_string());
        }
        if self.rate_limit_max_requests == 0 {
            return Err("Rate limit ceiling must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            cache_max_entries: 100,
            rate_limit_window_secs: 60,
            rate_limit_max_requests: 10,
            request_timeout_secs: 15,
            default_num_results: 5,
        }
    }
}
