// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{HttpSettings, SearchSettings};
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

static RESULT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.result").expect("valid result selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.result__a").expect("valid title selector"));
static SNIPPET_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".result__snippet").expect("valid snippet selector"));
static NO_RESULTS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.no-results").expect("valid no-results selector"));

/// Upper bound on result pages requested for a single query
const MAX_PAGES: usize = 5;

/// DuckDuckGo search engine backed by the JavaScript-free HTML endpoint.
///
/// Results are scraped with CSS selectors; DuckDuckGo redirect links
/// (`//duckduckgo.com/l/?uddg=...`) are decoded to their destination.
/// Pagination uses the `s` offset parameter until enough results are
/// collected or a page comes back empty.
pub struct DuckDuckGoSearchEngine {
    client: reqwest::Client,
    endpoint: Url,
    region: String,
}

impl DuckDuckGoSearchEngine {
    pub fn new(search: &SearchSettings, http: &HttpSettings) -> Result<Self, SearchError> {
        let endpoint = Url::parse(&search.endpoint).map_err(|e| {
            SearchError::EngineError(format!("Invalid search endpoint {}: {}", search.endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(http.timeout())
            .build()
            .map_err(|e| SearchError::EngineError(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            region: search.region.clone(),
        })
    }

    /// Build query parameters for one result page
    pub fn build_params(&self, query: &str, offset: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string()), ("kl", self.region.clone())];
        if offset > 0 {
            params.push(("s", offset.to_string()));
            params.push(("dc", (offset + 1).to_string()));
        }
        params
    }

    /// Resolve a result link to its destination URL
    ///
    /// * `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2F` → `https://example.com/`
    /// * `https://example.com/page` → unchanged
    /// * anything that is not http(s) after resolution → `None`
    pub fn decode_result_url(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        let resolved = self.endpoint.join(href).ok()?;
        let is_redirect = resolved
            .host_str()
            .is_some_and(|h| h.ends_with("duckduckgo.com"))
            && resolved.path().starts_with("/l/");

        let target = if is_redirect {
            let (_, uddg) = resolved.query_pairs().find(|(key, _)| key == "uddg")?;
            Url::parse(&uddg).ok()?
        } else {
            resolved
        };

        matches!(target.scheme(), "http" | "https").then(|| target.to_string())
    }

    /// Parse one HTML result page
    ///
    /// Ads are skipped. Returns `RateLimitExceeded` for the bot challenge page.
    pub fn parse_search_results(&self, html: &str) -> Result<Vec<SearchResult>, SearchError> {
        if html.contains("anomaly-modal") || html.contains("bots use DuckDuckGo too") {
            return Err(SearchError::RateLimitExceeded);
        }

        let document = Html::parse_document(html);
        if document.select(&NO_RESULTS_SELECTOR).next().is_some() {
            return Ok(Vec::new());
        }

        let results = document
            .select(&RESULT_SELECTOR)
            .filter(|element| !is_ad(element))
            .filter_map(|element| {
                let anchor = element.select(&TITLE_SELECTOR).next()?;
                let title = clean_text(&anchor);
                let href = anchor
                    .value()
                    .attr("href")
                    .and_then(|h| self.decode_result_url(h));
                let body = element
                    .select(&SNIPPET_SELECTOR)
                    .next()
                    .map(|s| clean_text(&s));

                if title.is_none() && body.is_none() && href.is_none() {
                    return None;
                }
                Some(SearchResult::new(title, body.flatten(), href, self.name().to_string()))
            })
            .collect();

        Ok(results)
    }

    async fn fetch_page(&self, query: &str, offset: usize) -> Result<String, SearchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&self.build_params(query, offset))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 202 || status.as_u16() == 429 {
            return Err(SearchError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(SearchError::EngineError(format!(
                "DuckDuckGo returned HTTP {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::NetworkError(format!("Failed to read response body: {}", e)))
    }
}

fn is_ad(element: &ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|c| c == "result--ad" || c == "result--ad--small")
}

/// Collapse whitespace in the element's text; `None` when nothing remains
fn clean_text(element: &ElementRef<'_>) -> Option<String> {
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

#[async_trait]
impl SearchEngine for DuckDuckGoSearchEngine {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EngineError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let limit = limit as usize;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut results: Vec<SearchResult> = Vec::with_capacity(limit);
        let mut seen_urls: HashSet<String> = HashSet::new();
        // Raw result positions already served, duplicates included
        let mut consumed = 0usize;

        for page in 0..MAX_PAGES {
            let page_results = match self
                .fetch_page(query, consumed)
                .await
                .and_then(|html| self.parse_search_results(&html))
            {
                Ok(page_results) => page_results,
                // Keep what earlier pages produced
                Err(e) if page > 0 => {
                    debug!("DuckDuckGo page {} failed, stopping: {}", page + 1, e);
                    break;
                }
                Err(e) => return Err(e),
            };

            consumed += page_results.len();
            let before = results.len();
            for result in page_results {
                let is_new = match result.url() {
                    Some(url) => seen_urls.insert(url.to_string()),
                    None => true,
                };
                if is_new {
                    results.push(result);
                }
            }

            debug!(
                "DuckDuckGo page {}: {} new results, total: {}",
                page + 1,
                results.len() - before,
                results.len()
            );

            if results.len() >= limit || results.len() == before {
                break;
            }
        }

        results.truncate(limit);
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

#[cfg(test)]
#[path = "duckduckgo_test.rs"]
mod tests;
