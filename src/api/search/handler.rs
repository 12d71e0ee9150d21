// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API endpoint handlers

use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::Json;
use std::net::SocketAddr;
use tracing::{debug, warn};

use super::request::SearchApiRequest;
use super::response::{ClearCacheApiResponse, SearchApiResponse, StatusApiResponse};
use crate::api::errors::{error_response, status_for, ApiErrorBody};
use crate::api::http_server::AppState;

/// POST /v1/search - Perform a web search
///
/// # Request
/// - `query`: Search query string (required)
/// - `maxResults`: Number of results (optional; server default when omitted)
///
/// # Response
/// - `success`, `query`, `results`, `cached`, `resultCount`
///
/// # Errors
/// - 400 Bad Request: Missing or empty query
/// - 429 Too Many Requests: Client exceeded the rate-limit window
/// - 500 Internal Server Error: Upstream fetch or parse failed
pub async fn search_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<SearchApiRequest>,
) -> Result<Json<SearchApiResponse>, (StatusCode, Json<ApiErrorBody>)> {
    debug!("Search request: {:?}", request.query);

    if let Err(e) = request.validate() {
        warn!("Search validation failed: {}", e);
        return Err(error_response(StatusCode::BAD_REQUEST, e));
    }

    // Rate limiting keys on the connection's remote address
    let client_id = addr.ip().to_string();

    let outcome = state
        .gateway
        .search(&request.query, request.max_results, &client_id)
        .await
        .map_err(|e| error_response(status_for(&e), e.to_string()))?;

    Ok(Json(SearchApiResponse::from(outcome)))
}

/// POST /v1/search/clear-cache - Empty the result cache and rate-limit map
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheApiResponse> {
    state.gateway.clear_cache();

    Json(ClearCacheApiResponse {
        success: true,
        message: "Search cache and rate-limit history cleared".to_string(),
    })
}

/// GET /v1/search/status - Report provider identity and map sizes
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusApiResponse> {
    Json(StatusApiResponse::from(state.gateway.status()))
}
