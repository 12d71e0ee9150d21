// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! JSON error envelope and status mapping

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Error body returned on every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Always false
    pub success: bool,
    /// Human-readable failure message
    pub error: String,
}

/// Build a failed-response pair from a status and message
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiErrorBody>) {
    (
        status,
        Json(ApiErrorBody {
            success: false,
            error: message.into(),
        }),
    )
}

/// Map a search error onto its HTTP status code
pub fn status_for(error: &SearchError) -> StatusCode {
    match error {
        SearchError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        SearchError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        SearchError::Timeout { .. } | SearchError::Upstream { .. } | SearchError::Network(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serialization() {
        let (status, Json(body)) = error_response(StatusCode::BAD_REQUEST, "Query is required");
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("Query is required"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&SearchError::InvalidQuery {
                reason: "empty".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&SearchError::RateLimited {
                retry_after_secs: 60
            }),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_for(&SearchError::Timeout { timeout_ms: 15_000 }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&SearchError::Network("dns".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&SearchError::Upstream {
                status: 503,
                message: "down".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
