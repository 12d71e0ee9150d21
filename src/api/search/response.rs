// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API response types

use serde::{Deserialize, Serialize};

use crate::search::gateway::GatewayStatus;
use crate::search::types::SearchResult;
use crate::search::SearchOutcome;

/// Response body for POST /v1/search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchApiResponse {
    /// Always true; failures use the error envelope instead
    pub success: bool,

    /// The original search query
    pub query: String,

    /// List of search results
    pub results: Vec<SearchResult>,

    /// Whether the result set was served from cache
    pub cached: bool,

    /// Number of results returned
    pub result_count: usize,
}

impl From<SearchOutcome> for SearchApiResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            query: outcome.query,
            results: outcome.results,
            cached: outcome.cached,
            result_count: outcome.result_count,
        }
    }
}

/// Response body for POST /v1/search/clear-cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCacheApiResponse {
    /// Always true
    pub success: bool,
    /// Confirmation message
    pub message: String,
}

/// Response body for GET /v1/search/status
///
/// Field names are snake_case on the wire, matching the status contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusApiResponse {
    /// Always true
    pub success: bool,
    /// Provider identity
    pub provider: String,
    /// Search method description
    pub method: String,
    /// Entries currently in the result cache
    pub cache_size: usize,
    /// Client keys currently tracked by the rate limiter
    pub rate_limit_entries: usize,
    /// The provider stores no user search history
    pub privacy_first: bool,
}

impl From<GatewayStatus> for StatusApiResponse {
    fn from(status: GatewayStatus) -> Self {
        Self {
            success: true,
            provider: status.provider.to_string(),
            method: status.method.to_string(),
            cache_size: status.cache_size,
            rate_limit_entries: status.rate_limit_entries,
            privacy_first: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_serialization() {
        let outcome = SearchOutcome {
            query: "test".to_string(),
            results: vec![SearchResult::web(
                "Title".to_string(),
                "https://example.com".to_string(),
                "Snippet".to_string(),
                "example.com".to_string(),
            )],
            cached: false,
            result_count: 1,
            search_time_ms: 42,
        };

        let response = SearchApiResponse::from(outcome);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"resultCount\":1"));
        assert!(json.contains("\"cached\":false"));
    }

    #[test]
    fn test_status_response_wire_names() {
        let response = StatusApiResponse {
            success: true,
            provider: "DuckDuckGo HTML".to_string(),
            method: "HTML scraping".to_string(),
            cache_size: 2,
            rate_limit_entries: 1,
            privacy_first: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"cache_size\":2"));
        assert!(json.contains("\"rate_limit_entries\":1"));
        assert!(json.contains("\"privacy_first\":true"));
    }

    #[test]
    fn test_clear_cache_response() {
        let response = ClearCacheApiResponse {
            success: true,
            message: "Search cache cleared".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("cleared"));
    }
}
