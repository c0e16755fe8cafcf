//! Encyclopedia sources behind a small trait-based seam.
//!
//! The pipeline only needs two calls from a source: a first-page search that
//! yields [`SearchHit`]s, and a plain-text introductory extract per page.
//! [`WikipediaSource`] talks to a MediaWiki Action API over HTTP;
//! [`MockSource`] serves canned data for tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikisearch::models::SearchQuery;
//! use wikisearch::sources::{Source, WikipediaSource};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = WikipediaSource::new()?;
//! let hits = source.search(&SearchQuery::new("Alan Turing")).await?;
//! for hit in hits {
//!     let extract = source.fetch_extract(hit.page_id).await?;
//!     println!("{}: {} chars", hit.title, extract.len());
//! }
//! # Ok(())
//! # }
//! ```

mod mock;
mod wikipedia;

pub use mock::MockSource;
pub use wikipedia::{WikipediaSource, DEFAULT_USER_AGENT, WIKIPEDIA_API_URL};

use crate::models::{SearchHit, SearchQuery};
use async_trait::async_trait;

/// The interface the search-and-filter pipeline drives.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Search for pages matching the query, first page only, in relevance order
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SourceError>;

    /// Fetch the plain-text introductory extract of a page.
    ///
    /// A page without an extract yields an empty string.
    async fn fetch_extract(&self, page_id: u64) -> Result<String, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// JSON decoding error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success status from the API
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
