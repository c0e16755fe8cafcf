//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use crate::models::{SearchHit, SearchQuery};
use crate::sources::{Source, SourceError};

/// A mock source that serves predefined hits and extracts.
///
/// Every call is recorded so tests can check which requests were made and in
/// what order.
#[derive(Debug, Default)]
pub struct MockSource {
    hits: Mutex<Vec<SearchHit>>,
    extracts: Mutex<HashMap<u64, String>>,
    failing_pages: Mutex<HashSet<u64>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create a new mock source with no hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hit together with the extract served for its page.
    pub fn with_page(self, title: &str, page_id: u64, extract: &str) -> Self {
        lock(&self.hits).push(SearchHit::new(title, page_id));
        lock(&self.extracts).insert(page_id, extract.to_string());
        self
    }

    /// Make `fetch_extract` fail for this page.
    pub fn fail_extract(self, page_id: u64) -> Self {
        lock(&self.failing_pages).insert(page_id);
        self
    }

    /// Calls made so far, as `search:<query>` or `extract:<page id>`.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SourceError> {
        lock(&self.calls).push(format!("search:{}", query.query));
        Ok(lock(&self.hits)
            .iter()
            .take(query.max_results)
            .cloned()
            .collect())
    }

    async fn fetch_extract(&self, page_id: u64) -> Result<String, SourceError> {
        lock(&self.calls).push(format!("extract:{}", page_id));
        if lock(&self.failing_pages).contains(&page_id) {
            return Err(SourceError::Network(format!(
                "mock failure fetching page {}",
                page_id
            )));
        }
        Ok(lock(&self.extracts)
            .get(&page_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let source = MockSource::new().with_page("Rust", 7, "A language.");

        let hits = source.search(&SearchQuery::new("rust")).await.unwrap();
        assert_eq!(hits, vec![SearchHit::new("Rust", 7)]);
        assert_eq!(source.fetch_extract(7).await.unwrap(), "A language.");
        assert_eq!(source.fetch_extract(8).await.unwrap(), "");
        assert_eq!(source.calls(), vec!["search:rust", "extract:7", "extract:8"]);
    }

    #[tokio::test]
    async fn test_mock_respects_max_results() {
        let source = MockSource::new()
            .with_page("A", 1, "")
            .with_page("B", 2, "")
            .with_page("C", 3, "");

        let hits = source
            .search(&SearchQuery::new("x").max_results(2))
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_failing_extract() {
        let source = MockSource::new().with_page("A", 1, "x").fail_extract(1);
        assert!(matches!(
            source.fetch_extract(1).await,
            Err(SourceError::Network(_))
        ));
    }
}
