//! Unsplash photo-search client.
//!
//! Thin HTTP wrapper for `GET /search/photos`. Pure parsing in
//! `parse_search_response` for testability.

use crate::config::UnsplashConfig;
use crate::error::SearchError;
use crate::pin::Pin;
use crate::search::ImageSearch;

#[cfg(test)]
#[path = "unsplash_test.rs"]
mod tests;

const SEARCH_PATH: &str = "/search/photos";
const API_VERSION: &str = "v1";

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone, Debug)]
pub struct UnsplashClient {
    http: reqwest::Client,
    access_key: String,
    search_url: String,
    per_page: u32,
}

impl UnsplashClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: UnsplashConfig) -> Result<Self, SearchError> {
        let http = build_http(&config)?;
        Ok(Self {
            http,
            access_key: config.access_key,
            search_url: search_url(&config.base_url),
            per_page: config.per_page,
        })
    }

    /// Full search endpoint this client calls.
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    async fn fetch(&self, term: &str) -> Result<Vec<Pin>, SearchError> {
        let per_page = self.per_page.to_string();
        let response = self
            .http
            .get(&self.search_url)
            .query(&[("query", term), ("per_page", per_page.as_str())])
            .header("Authorization", authorization_header(&self.access_key))
            .header("Accept-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Response { status: status.as_u16(), body: text });
        }

        parse_search_response(&text)
    }
}

#[async_trait::async_trait(?Send)]
impl ImageSearch for UnsplashClient {
    async fn search(&self, term: &str) -> Result<Vec<Pin>, SearchError> {
        tracing::debug!(%term, per_page = self.per_page, "unsplash search");
        let pins = self.fetch(term).await?;
        tracing::debug!(%term, count = pins.len(), "unsplash search done");
        Ok(pins)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &UnsplashConfig) -> Result<reqwest::Client, SearchError> {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .build()
        .map_err(|e| SearchError::HttpClientBuild(e.to_string()))
}

// The browser fetch backend has no client-level timeouts.
#[cfg(target_arch = "wasm32")]
fn build_http(_config: &UnsplashConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| SearchError::HttpClientBuild(e.to_string()))
}

fn search_url(base_url: &str) -> String {
    format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/'))
}

fn authorization_header(access_key: &str) -> String {
    format!("Client-ID {access_key}")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct SearchPage {
    #[serde(default)]
    results: Vec<Pin>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_search_response(json: &str) -> Result<Vec<Pin>, SearchError> {
    let page: SearchPage = serde_json::from_str(json).map_err(|e| SearchError::Parse(e.to_string()))?;
    Ok(page.results)
}
