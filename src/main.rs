// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};

use ddg_search_gateway::api::run_server;
use ddg_search_gateway::search::{SearchConfig, SearchGateway};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let port = env::var("API_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);

    let config = SearchConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid search configuration: {}", e))?;

    let gateway = Arc::new(SearchGateway::new(config));
    run_server(gateway, port).await
}
