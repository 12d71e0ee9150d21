// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search API endpoints
//!
//! `/v1/search`, `/v1/search/clear-cache`, and `/v1/search/status`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{clear_cache_handler, search_handler, status_handler};
pub use request::SearchApiRequest;
pub use response::{ClearCacheApiResponse, SearchApiResponse, StatusApiResponse};
