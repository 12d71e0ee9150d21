// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result extraction from raw search markup
//!
//! Two independent strategies behind a common trait: a structural scan of
//! result blocks, and a link-harvesting fallback used only when the
//! structural pattern matches nothing. Keeping the seam here means a
//! structural HTML-parser backend could replace either strategy without
//! touching cache or rate-limit code.

use regex::Regex;

use super::html;
use super::types::SearchResult;

/// Placeholder snippet used by the fallback strategy when no snippet
/// exists at a link's position.
const FALLBACK_SNIPPET: &str = "No description available";

/// Extract search results from raw markup
pub trait ResultParser: Send + Sync {
    /// Parse up to `max_results` results out of `document`
    ///
    /// Yielding zero results is not an error; callers decide whether to
    /// try another strategy.
    fn parse(&self, document: &str, max_results: usize) -> Vec<SearchResult>;
}

/// Structural parser over the upstream's result-block markup
///
/// Scans for `class="result ..."` container divs, treating the text
/// between consecutive container starts (or end of document) as one
/// result block.
pub struct PrimaryParser {
    block_start: Regex,
    title_anchor: Regex,
    href_attr: Regex,
    snippet_anchor: Regex,
    display_url_span: Regex,
}

impl PrimaryParser {
    /// Compile the block and field patterns
    pub fn new() -> Self {
        Self {
            block_start: Regex::new(r#"<div[^>]*class="result\b[^"]*""#)
                .expect("valid block pattern"),
            title_anchor: Regex::new(r#"(?s)<a([^>]*class="[^"]*result__a[^"]*"[^>]*)>(.*?)</a>"#)
                .expect("valid title pattern"),
            href_attr: Regex::new(r#"href="([^"]*)""#).expect("valid href pattern"),
            snippet_anchor: Regex::new(
                r#"(?s)<a[^>]*class="[^"]*result__snippet[^"]*"[^>]*>(.*?)</a>"#,
            )
            .expect("valid snippet pattern"),
            display_url_span: Regex::new(
                r#"(?s)<span[^>]*class="[^"]*result__url[^"]*"[^>]*>(.*?)</span>"#,
            )
            .expect("valid display-url pattern"),
        }
    }

    /// Extract one result from a block, or None if the block is an ad,
    /// malformed, or fails the non-empty field invariant.
    fn parse_block(&self, block: &str) -> Option<SearchResult> {
        // Sponsored entries contribute nothing
        if block.contains("result--ad") || block.contains("sponsored") {
            return None;
        }

        let caps = self.title_anchor.captures(block)?;
        let attrs = caps.get(1)?.as_str();
        let raw_href = self.href_attr.captures(attrs)?.get(1)?.as_str();

        let url = html::unwrap_redirect(raw_href);
        if !url.starts_with("http") {
            return None;
        }

        let title = html::clean_text(caps.get(2)?.as_str());

        let snippet = self
            .snippet_anchor
            .captures(block)
            .map(|c| html::clean_text(&c[1]))
            .unwrap_or_default();

        let display_url = self
            .display_url_span
            .captures(block)
            .map(|c| html::clean_text(&c[1]))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| html::host_display(&url));

        if title.is_empty() || snippet.is_empty() {
            return None;
        }

        Some(SearchResult::web(title, url, snippet, display_url))
    }
}

impl Default for PrimaryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser for PrimaryParser {
    fn parse(&self, document: &str, max_results: usize) -> Vec<SearchResult> {
        let starts: Vec<usize> = self
            .block_start
            .find_iter(document)
            .map(|m| m.start())
            .collect();

        let mut results = Vec::new();
        for (i, &start) in starts.iter().enumerate() {
            if results.len() >= max_results {
                break;
            }

            let end = starts.get(i + 1).copied().unwrap_or(document.len());
            if let Some(result) = self.parse_block(&document[start..end]) {
                results.push(result);
            }
        }

        results
    }
}

/// Link-harvesting fallback for when the structural pattern yields nothing
///
/// Collects every redirect-wrapped anchor and every snippet table cell
/// independently, then pairs the Nth link with the Nth snippet by
/// position. Positional pairing is a known-fragile heuristic inherited
/// from the upstream markup's flat layout; the markup offers no stronger
/// signal to pair on.
pub struct FallbackParser {
    wrapped_anchor: Regex,
    snippet_cell: Regex,
}

impl FallbackParser {
    /// Compile the harvest patterns
    pub fn new() -> Self {
        Self {
            wrapped_anchor: Regex::new(r#"(?s)<a[^>]*href="([^"]*uddg=[^"]*)"[^>]*>(.*?)</a>"#)
                .expect("valid anchor pattern"),
            snippet_cell: Regex::new(
                r#"(?s)<td[^>]*class="[^"]*result-snippet[^"]*"[^>]*>(.*?)</td>"#,
            )
            .expect("valid cell pattern"),
        }
    }
}

impl Default for FallbackParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser for FallbackParser {
    fn parse(&self, document: &str, max_results: usize) -> Vec<SearchResult> {
        let links: Vec<(String, String)> = self
            .wrapped_anchor
            .captures_iter(document)
            .map(|c| (html::unwrap_redirect(&c[1]), html::clean_text(&c[2])))
            .collect();

        let snippets: Vec<String> = self
            .snippet_cell
            .captures_iter(document)
            .map(|c| html::clean_text(&c[1]))
            .collect();

        let mut results = Vec::new();
        for (i, (url, title)) in links.into_iter().enumerate() {
            if results.len() >= max_results {
                break;
            }
            if !url.starts_with("http") || title.len() <= 3 {
                continue;
            }

            let snippet = snippets
                .get(i)
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| FALLBACK_SNIPPET.to_string());

            let display_url = html::host_display(&url);
            results.push(SearchResult::web(title, url, snippet, display_url));
        }

        results
    }
}
