// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring
//!
//! Builds the axum router and serves it. Connections are served with
//! remote-address info attached so handlers can key rate limiting on the
//! client address.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::search::{clear_cache_handler, search_handler, status_handler};
use crate::search::SearchGateway;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// The single gateway instance owning cache and rate-limit maps
    pub gateway: Arc<SearchGateway>,
}

/// Build the application router
pub fn build_router(gateway: Arc<SearchGateway>) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/search/clear-cache", post(clear_cache_handler))
        .route("/v1/search/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process exits
pub async fn run_server(gateway: Arc<SearchGateway>, port: u16) -> anyhow::Result<()> {
    let app = build_router(gateway);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Search gateway listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.gateway.status();
    Json(json!({
        "status": "ok",
        "provider": status.provider,
    }))
}
