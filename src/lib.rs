//! # wikisearch
//!
//! Search Wikipedia, optionally keep only articles whose introduction
//! mentions a year inside a given range, and save the matches as a static
//! HTML report.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (SearchHit, ResultEntry, YearRange, SearchQuery)
//! - [`sources`]: The [`Source`] trait with the Wikipedia and mock implementations
//! - [`search`]: Search-and-filter pipeline
//! - [`report`]: HTML report rendering
//! - [`app`]: The command-line pipeline tying the above together
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal status lines and progress

pub mod app;
pub mod config;
pub mod models;
pub mod report;
pub mod search;
pub mod sources;
pub mod ui;

// Re-export commonly used types
pub use models::{ResultEntry, SearchHit, SearchQuery, YearRange};
pub use sources::{Source, SourceError};
