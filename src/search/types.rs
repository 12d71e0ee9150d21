// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the search gateway

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provider identity reported by the status endpoint
pub const PROVIDER_NAME: &str = "DuckDuckGo HTML";

/// Source tag attached to every emitted result
pub const RESULT_SOURCE: &str = "duckduckgo";

/// Kind marker attached to every emitted result
pub const RESULT_TYPE: &str = "web_result";

/// A single organic search result scraped from the upstream HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Title of the search result, entity-decoded
    pub title: String,
    /// Absolute destination URL, unwrapped from any redirect wrapper
    pub url: String,
    /// Snippet text, tag-stripped and entity-decoded
    pub snippet: String,
    /// Display string for the URL (host-based fallback if not explicit)
    pub display_url: String,
    /// Source provider tag
    pub source: String,
    /// Result kind marker
    #[serde(rename = "type")]
    pub kind: String,
}

impl SearchResult {
    /// Build a web result carrying the provider constants
    pub fn web(title: String, url: String, snippet: String, display_url: String) -> Self {
        Self {
            title,
            url,
            snippet,
            display_url,
            source: RESULT_SOURCE.to_string(),
            kind: RESULT_TYPE.to_string(),
        }
    }
}

/// Outcome of a gateway search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// The original search query (trimmed)
    pub query: String,
    /// List of search results
    pub results: Vec<SearchResult>,
    /// Whether the result set was served from cache
    pub cached: bool,
    /// Number of results returned
    pub result_count: usize,
    /// Time taken for the upstream fetch and parse in milliseconds
    pub search_time_ms: u64,
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid search query
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the query is invalid
        reason: String,
    },

    /// Client exceeded the per-window request ceiling
    #[error("Rate limited, try again in {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the trailing window frees a slot
        retry_after_secs: u64,
    },

    /// Upstream request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream {
        /// HTTP status code (0 when no response was received)
        status: u16,
        /// Error message
        message: String,
    },

    /// Transport-level failure (connection, DNS, body read)
    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult::web(
            "Test Title".to_string(),
            "https://example.com".to_string(),
            "Test snippet".to_string(),
            "example.com".to_string(),
        );

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"displayUrl\":\"example.com\""));
        assert!(json.contains("\"type\":\"web_result\""));
        assert!(json.contains("\"source\":\"duckduckgo\""));
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{
            "title": "Test",
            "url": "https://example.com",
            "snippet": "A test",
            "displayUrl": "example.com",
            "source": "duckduckgo",
            "type": "web_result"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.title, "Test");
        assert_eq!(result.kind, "web_result");
    }

    #[test]
    fn test_search_outcome_serialization() {
        let outcome = SearchOutcome {
            query: "test query".to_string(),
            results: vec![],
            cached: false,
            result_count: 0,
            search_time_ms: 100,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"resultCount\":0"));
        assert!(json.contains("\"cached\":false"));
    }

    #[test]
    fn test_search_error_display() {
        let error = SearchError::RateLimited {
            retry_after_secs: 60,
        };
        assert!(error.to_string().contains("60"));

        let error = SearchError::Timeout { timeout_ms: 15000 };
        assert!(error.to_string().contains("15000"));

        let error = SearchError::Upstream {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_invalid_query_display() {
        let error = SearchError::InvalidQuery {
            reason: "query cannot be empty".to_string(),
        };
        assert!(error.to_string().contains("empty"));
    }
}
