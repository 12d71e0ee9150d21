// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-client rate limiting for search requests
//!
//! Sliding-window admission: timestamps within the trailing window are
//! counted per client key; a request is admitted and recorded only while
//! the count is strictly below the ceiling. Pure admission check, no
//! queuing or backoff. Stale client keys persist until `clear()`.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::types::SearchError;

/// Sliding-window rate limiter keyed by client identifier
pub struct ClientRateLimiter {
    clients: RwLock<HashMap<String, Vec<Instant>>>,
    window: Duration,
    max_requests: usize,
}

impl ClientRateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `window_secs` - Length of the trailing window in seconds
    /// * `max_requests` - Maximum requests per client within the window
    pub fn new(window_secs: u64, max_requests: u32) -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            window: Duration::from_secs(window_secs),
            max_requests: max_requests as usize,
        }
    }

    /// Check whether a request from `client` is admitted
    ///
    /// Discards timestamps older than the window, then admits and records
    /// the request if the remaining count is below the ceiling.
    pub fn check(&self, client: &str) -> Result<(), SearchError> {
        let mut clients = match self.clients.write() {
            Ok(c) => c,
            // A poisoned map carries no admission history worth trusting;
            // admit rather than lock every client out.
            Err(_) => return Ok(()),
        };

        let now = Instant::now();
        let stamps = clients.entry(client.to_string()).or_default();
        stamps.retain(|t| now.duration_since(*t) < self.window);

        if stamps.len() < self.max_requests {
            stamps.push(now);
            Ok(())
        } else {
            Err(SearchError::RateLimited {
                retry_after_secs: self.window.as_secs(),
            })
        }
    }

    /// Number of client keys currently tracked
    pub fn entry_count(&self) -> usize {
        self.clients.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Drop all recorded client history
    pub fn clear(&self) {
        if let Ok(mut clients) = self.clients.write() {
            clients.clear();
        }
    }
}
