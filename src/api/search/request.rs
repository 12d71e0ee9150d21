// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /v1/search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchApiRequest {
    /// Search query string (required, non-empty after trimming)
    pub query: String,

    /// Number of results to return; omitted means the server default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl SearchApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Query is required".to_string());
        }
        if let Some(n) = self.max_results {
            if n < 1 {
                return Err("maxResults must be at least 1".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "query": "test query",
            "maxResults": 3
        }"#;

        let request: SearchApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.query, "test query");
        assert_eq!(request.max_results, Some(3));
    }

    #[test]
    fn test_omitted_max_results_stays_none() {
        let json = r#"{"query": "test"}"#;

        let request: SearchApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.max_results, None);
    }

    #[test]
    fn test_validation_empty_query() {
        let request = SearchApiRequest {
            query: "".to_string(),
            max_results: Some(5),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_whitespace_query() {
        let request = SearchApiRequest {
            query: "   ".to_string(),
            max_results: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_results() {
        let request = SearchApiRequest {
            query: "test".to_string(),
            max_results: Some(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_success_without_max_results() {
        let request = SearchApiRequest {
            query: "valid query".to_string(),
            max_results: None,
        };
        assert!(request.validate().is_ok());
    }
}
