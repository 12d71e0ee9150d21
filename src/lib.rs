// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo HTML search gateway
//!
//! Receives search queries over HTTP, applies per-client rate limiting
//! and an in-memory result cache, and on a miss scrapes DuckDuckGo's
//! HTML-only results page with two independent regex parsing strategies.

pub mod api;
pub mod search;

pub use search::{
    SearchConfig, SearchError, SearchGateway, SearchOutcome, SearchResult,
};
