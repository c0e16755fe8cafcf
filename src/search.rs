//! Search-and-filter pipeline.
//!
//! One search request, then one extract request per hit, strictly in the
//! order the API ranked them. When a [`YearRange`] is given, each extract is
//! scanned for its first four-digit run, which is taken as the article's
//! year. Entries whose year falls outside the range are dropped; entries
//! with no four-digit run at all are kept.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{ResultEntry, SearchQuery, YearRange};
use crate::sources::{Source, SourceError};
use crate::ui::{self, FetchProgress, Status};

static YEAR_PATTERN: OnceLock<Regex> = OnceLock::new();
static DIGIT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn year_pattern() -> &'static Regex {
    YEAR_PATTERN.get_or_init(|| Regex::new(r"\d{4}").expect("year pattern is valid"))
}

fn is_decimal_digit(c: char) -> bool {
    let pattern =
        DIGIT_PATTERN.get_or_init(|| Regex::new(r"\A\d\z").expect("digit pattern is valid"));
    let mut buf = [0u8; 4];
    pattern.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of any Unicode decimal digit (`\d`), not only ASCII.
///
/// Decimal digits are encoded in contiguous runs of ten, zero first, so the
/// value is the offset from the start of the surrounding run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// The first run of four decimal digits in `text`, read as a year.
///
/// Digits from any script count, so `"१९६९"` yields `1969`. Longer digit
/// runs match on their first four digits, so `"12345"` yields `1234`.
pub fn first_year(text: &str) -> Option<i32> {
    let m = year_pattern().find(text)?;
    m.as_str()
        .chars()
        .try_fold(0i32, |year, c| Some(year * 10 + decimal_value(c)? as i32))
}

/// Whether an extract survives the optional year filter.
pub fn passes_year_filter(extract: &str, year_range: Option<YearRange>) -> bool {
    let Some(range) = year_range else {
        return true;
    };

    match first_year(extract) {
        Some(year) => range.contains(year),
        None => true,
    }
}

/// Run the search and return the entries that pass the year filter, in
/// relevance order.
///
/// Prints "No results found." and returns an empty list when the search has
/// no hits. Any error from the source aborts the whole run.
pub async fn search_and_filter(
    source: &dyn Source,
    query: &SearchQuery,
) -> Result<Vec<ResultEntry>, SourceError> {
    let hits = source.search(query).await?;
    tracing::info!(
        source = source.id(),
        hits = hits.len(),
        "search for {:?} returned",
        query.query
    );

    if hits.is_empty() {
        ui::print_status(Status::Warning, "No results found.");
        return Ok(Vec::new());
    }

    let progress = FetchProgress::new(hits.len());
    let mut results = Vec::with_capacity(hits.len());

    for hit in hits {
        progress.fetching(&hit.title);
        let extract = match source.fetch_extract(hit.page_id).await {
            Ok(extract) => extract,
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        };
        progress.inc();

        if !passes_year_filter(&extract, query.year_range) {
            tracing::debug!(
                title = %hit.title,
                year = ?first_year(&extract),
                "dropped by year filter"
            );
            continue;
        }

        results.push(ResultEntry::new(hit.title, extract));
    }
    progress.finish();

    tracing::info!(kept = results.len(), "filtering done");
    Ok(results)
}
