// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API layer
//!
//! JSON-over-HTTP surface for the search gateway.

pub mod errors;
pub mod http_server;
pub mod search;

pub use errors::ApiErrorBody;
pub use http_server::{build_router, run_server, AppState};
