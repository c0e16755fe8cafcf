//! Core data models for search hits, report entries and search parameters.

mod article;
mod search;

pub use article::{ResultEntry, SearchHit};
pub use search::{SearchQuery, YearRange, YearRangeError, DEFAULT_MAX_RESULTS};
