// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream page fetching
//!
//! GET against DuckDuckGo's HTML-only endpoint with a browser User-Agent
//! and `Accept-Encoding: identity` (the upstream answers with plain HTML,
//! so no decompression is needed before parsing). Automatic redirects are
//! disabled; a single redirect hop is followed explicitly and a second
//! one is reported as an upstream error.

use async_trait::async_trait;
use reqwest::{header, redirect, Client};
use std::time::Duration;
use url::Url;

use super::types::SearchError;

/// Fixed upstream search endpoint
pub const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Realistic browser User-Agent; the endpoint blocks obvious bots
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetch the raw search-results page for a query
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the full HTML body for `query`
    async fn fetch(&self, query: &str) -> Result<String, SearchError>;
}

/// HTTPS fetcher against the fixed search endpoint
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
    timeout_ms: u64,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout_secs: u64) -> Self {
        Self::with_endpoint(timeout_secs, SEARCH_ENDPOINT)
    }

    /// Create a fetcher against an arbitrary endpoint URL
    pub(crate) fn with_endpoint(timeout_secs: u64, endpoint: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
            timeout_ms: timeout_secs * 1000,
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, SearchError> {
        self.client
            .get(url)
            .header(header::ACCEPT_ENCODING, "identity")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SearchError::Network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, query: &str) -> Result<String, SearchError> {
        let url = Url::parse_with_params(&self.endpoint, &[("q", query)])
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let mut response = self.get(url.as_str()).await?;

        if response.status().is_redirection() {
            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
                .ok_or_else(|| SearchError::Upstream {
                    status,
                    message: "redirect without Location header".to_string(),
                })?;

            // Relative Location resolves against the endpoint URL
            let next = url
                .join(&location)
                .map_err(|e| SearchError::Network(e.to_string()))?;

            response = self.get(next.as_str()).await?;

            if response.status().is_redirection() {
                return Err(SearchError::Upstream {
                    status: response.status().as_u16(),
                    message: "redirect chain exceeded one hop".to_string(),
                });
            }
        }

        if !response.status().is_success() {
            return Err(SearchError::Upstream {
                status: response.status().as_u16(),
                message: "DuckDuckGo request failed".to_string(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                SearchError::Network(e.to_string())
            }
        })
    }
}
