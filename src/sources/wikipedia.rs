//! Wikipedia source using the MediaWiki Action API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{SearchHit, SearchQuery};
use crate::sources::{Source, SourceError};

/// English Wikipedia's Action API endpoint
pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Wikipedia research source
///
/// Issues plain GET requests against `api.php`. Every request carries
/// `origin=*`, which the API accepts for anonymous cross-origin calls.
#[derive(Debug, Clone)]
pub struct WikipediaSource {
    client: Arc<Client>,
    api_url: String,
}

impl WikipediaSource {
    /// Create a source pointed at English Wikipedia
    pub fn new() -> Result<Self, SourceError> {
        Self::with_endpoint(WIKIPEDIA_API_URL, DEFAULT_USER_AGENT)
    }

    /// Create a source for any MediaWiki `api.php` endpoint
    pub fn with_endpoint(
        api_url: impl Into<String>,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client: Arc::new(client),
            api_url: api_url.into(),
        })
    }

    async fn get_json<T>(&self, params: &[(&str, &str)]) -> Result<T, SourceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to query Wikipedia: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Wikipedia API returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse JSON: {}", e)))
    }
}

#[async_trait]
impl Source for WikipediaSource {
    fn id(&self) -> &str {
        "wikipedia"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SourceError> {
        let limit = query.max_results.to_string();
        tracing::debug!(query = %query.query, limit = %limit, "searching {}", self.api_url);

        let data: WikiSearchResponse = self
            .get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query.query.as_str()),
                ("srlimit", limit.as_str()),
                ("origin", "*"),
            ])
            .await?;

        if let Some(err) = &data.error {
            tracing::warn!(code = %err.code, "Wikipedia API error: {}", err.info);
        }

        Ok(data.query.map(|q| q.search).unwrap_or_default())
    }

    async fn fetch_extract(&self, page_id: u64) -> Result<String, SourceError> {
        let id = page_id.to_string();
        tracing::debug!(page_id, "fetching extract");

        let data: WikiPagesResponse = self
            .get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("pageids", id.as_str()),
                ("prop", "extracts"),
                ("exintro", "true"),
                ("explaintext", "true"),
                ("origin", "*"),
            ])
            .await?;

        if let Some(err) = &data.error {
            tracing::warn!(code = %err.code, page_id, "Wikipedia API error: {}", err.info);
        }

        Ok(data
            .query
            .and_then(|mut q| q.pages.remove(&id))
            .and_then(|page| page.extract)
            .unwrap_or_default())
    }
}

// ===== MediaWiki API Types =====

#[derive(Debug, Deserialize)]
struct WikiSearchResponse {
    #[serde(default)]
    query: Option<WikiSearchQuery>,
    #[serde(default)]
    error: Option<WikiApiError>,
}

#[derive(Debug, Deserialize)]
struct WikiSearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct WikiPagesResponse {
    #[serde(default)]
    query: Option<WikiPagesQuery>,
    #[serde(default)]
    error: Option<WikiApiError>,
}

#[derive(Debug, Deserialize)]
struct WikiPagesQuery {
    #[serde(default)]
    pages: HashMap<String, WikiPage>,
}

#[derive(Debug, Deserialize)]
struct WikiPage {
    #[serde(default)]
    extract: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WikiApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}
