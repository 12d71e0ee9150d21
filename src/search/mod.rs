// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search gateway module
//!
//! Scrapes DuckDuckGo's HTML-only results page and serves the parsed
//! results through `/v1/search`, with:
//! - two independent parsing strategies (structural blocks, link-harvest
//!   fallback) to tolerate upstream markup drift
//! - TTL + capacity bounded result caching
//! - per-client sliding-window rate limiting

pub mod cache;
pub mod config;
pub mod fetch;
pub mod gateway;
pub mod html;
pub mod parser;
pub mod rate_limiter;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use fetch::{HttpFetcher, PageFetcher};
pub use gateway::{GatewayStatus, SearchGateway};
pub use types::{SearchError, SearchOutcome, SearchResult};
