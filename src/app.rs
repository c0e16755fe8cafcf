//! The command-line pipeline: parse the year range, search and filter,
//! render, write the report.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{SearchQuery, YearRange, YearRangeError, DEFAULT_MAX_RESULTS};
use crate::report::{render_html, OUTPUT_FILE};
use crate::search::search_and_filter;
use crate::sources::Source;
use crate::ui::{self, Status};

/// Message shown when the year range argument cannot be parsed
pub const INVALID_YEAR_RANGE_MSG: &str = "Invalid year range format. Use 'start-year-end-year'.";

/// Arguments of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub query: String,
    /// Raw `start-end` argument, parsed by [`run`]
    pub year_range: Option<String>,
    pub max_results: usize,
}

impl RunArgs {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            year_range: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn year_range(mut self, range: impl Into<String>) -> Self {
        self.year_range = Some(range.into());
        self
    }

    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// The year range did not parse; nothing was requested or written
    InvalidYearRange(YearRangeError),
    /// Nothing to report; no file was written
    NoResults,
    /// The report was written to this path
    Saved(PathBuf),
}

/// Parse the optional year range argument. An empty string counts as absent.
pub fn parse_year_range(raw: Option<&str>) -> Result<Option<YearRange>, YearRangeError> {
    match raw {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some),
        _ => Ok(None),
    }
}

/// Run the whole pipeline, writing the report into `output_dir`.
///
/// Source and file-system failures are returned as errors; a bad year range
/// and an empty result set are reported through [`RunOutcome`].
pub async fn run(source: &dyn Source, args: &RunArgs, output_dir: &Path) -> Result<RunOutcome> {
    let year_range = match parse_year_range(args.year_range.as_deref()) {
        Ok(range) => range,
        Err(e) => {
            tracing::debug!("rejected year range: {}", e);
            ui::print_status(Status::Error, INVALID_YEAR_RANGE_MSG);
            return Ok(RunOutcome::InvalidYearRange(e));
        }
    };

    let mut query = SearchQuery::new(&args.query).max_results(args.max_results);
    if let Some(range) = year_range {
        query = query.year_range(range);
    }

    let results = search_and_filter(source, &query)
        .await
        .with_context(|| format!("Search for {:?} failed", args.query))?;

    if results.is_empty() {
        tracing::info!("no entries left after filtering; not writing a report");
        return Ok(RunOutcome::NoResults);
    }

    let html = render_html(&results, &args.query, year_range);
    let path = output_dir.join(OUTPUT_FILE);
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(entries = results.len(), path = %path.display(), "report written");
    ui::print_status(Status::Success, &format!("Results saved to {}", OUTPUT_FILE));

    Ok(RunOutcome::Saved(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_range_absent() {
        assert_eq!(parse_year_range(None), Ok(None));
        assert_eq!(parse_year_range(Some("")), Ok(None));
    }

    #[test]
    fn test_parse_year_range_present() {
        assert_eq!(
            parse_year_range(Some("1930-1950")),
            Ok(Some(YearRange::new(1930, 1950)))
        );
        assert!(parse_year_range(Some("1930")).is_err());
    }

    #[test]
    fn test_run_args_builder() {
        let args = RunArgs::new("Turing").year_range("1930-1950").max_results(3);
        assert_eq!(args.query, "Turing");
        assert_eq!(args.year_range.as_deref(), Some("1930-1950"));
        assert_eq!(args.max_results, 3);
    }
}
