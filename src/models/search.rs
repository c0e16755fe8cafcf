//! Search request models and the year range filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Default number of hits requested from the search endpoint
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Inclusive range of years used to filter hits.
///
/// Parsed from the `start-end` form, e.g. `1930-1950`. A range whose start
/// is after its end is accepted as written; it simply matches no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether `year` lies in `[start, end]`
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Why a year range string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearRangeError {
    #[error("expected exactly two years separated by '-', got {0} part(s)")]
    PartCount(usize),

    #[error("invalid year '{value}': {source}")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for YearRange {
    type Err = YearRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(YearRangeError::PartCount(parts.len()));
        }

        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<i32>()
                .map_err(|source| YearRangeError::InvalidYear {
                    value: part.to_string(),
                    source,
                })
        };

        Ok(Self {
            start: parse(parts[0])?,
            end: parse(parts[1])?,
        })
    }
}

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query passed to the search endpoint
    pub query: String,

    /// Maximum number of hits to request (first page only)
    pub max_results: usize,

    /// Optional year filter applied to each hit's extract
    pub year_range: Option<YearRange>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            year_range: None,
        }
    }
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Set the year filter
    pub fn year_range(mut self, range: YearRange) -> Self {
        self.year_range = Some(range);
        self
    }
}
