//! Article models: search hits and the entries that make it into a report.

use serde::{Deserialize, Serialize};

/// One entry of the search API's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Article title as reported by the API
    pub title: String,

    /// Page identifier used to fetch the extract
    #[serde(rename = "pageid")]
    pub page_id: u64,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, page_id: u64) -> Self {
        Self {
            title: title.into(),
            page_id,
        }
    }
}

/// A hit combined with its plain-text introductory extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub title: String,
    pub extract: String,
}

impl ResultEntry {
    pub fn new(title: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
        }
    }

    /// Non-blank paragraphs of the extract, trimmed.
    ///
    /// Paragraphs are separated by a blank line (`"\n\n"`).
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.extract
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_deserializes_pageid() {
        let hit: SearchHit =
            serde_json::from_str(r#"{"ns":0,"title":"Alan Turing","pageid":1208,"size":42}"#)
                .unwrap();
        assert_eq!(hit, SearchHit::new("Alan Turing", 1208));
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let entry = ResultEntry::new(
            "Rust",
            "  First paragraph.\n\nSecond\nstill second.\n\n   \n\nThird.  ",
        );
        let paragraphs: Vec<_> = entry.paragraphs().collect();
        assert_eq!(
            paragraphs,
            vec!["First paragraph.", "Second\nstill second.", "Third."]
        );
    }

    #[test]
    fn test_paragraphs_empty_extract() {
        let entry = ResultEntry::new("Empty", "");
        assert_eq!(entry.paragraphs().count(), 0);
    }
}
