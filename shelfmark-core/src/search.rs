//! Catalog search client for the Google Books volumes API
//!
//! Stateless: one request per query. The store never calls this directly;
//! the UI layer hands successful results to the store as plain [`Book`]
//! values.

use crate::error::SearchError;
use crate::types::Book;
use serde::Deserialize;

/// Production API root
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Results requested per query
const MAX_RESULTS: u32 = 40;

/// Top-level volumes API response; `items` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<Book>>,
}

/// Client for free-text catalog searches
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Client against the production API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate API root (for tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search the catalog; returns zero or more matching books.
    ///
    /// A blank query returns an empty result without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<Book>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let max_results = MAX_RESULTS.to_string();
        let response = self
            .http
            .get(format!("{}/volumes", self.base_url))
            .query(&[("q", query), ("maxResults", max_results.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let decoded: SearchResponse = response.json().await?;
        Ok(decoded.items.unwrap_or_default())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
