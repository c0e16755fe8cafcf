//! Static HTML report rendering.
//!
//! The report is one self-contained page: a dark stylesheet inlined in the
//! head, a banner with the query (and the year range when one was given),
//! then one heading per article followed by its extract paragraphs. All text
//! coming from the user or the API is HTML-escaped.

use crate::models::{ResultEntry, YearRange};

/// File the CLI writes the report to, relative to the working directory
pub const OUTPUT_FILE: &str = "wikipedia_search_results.html";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Wikipedia Search Results</title>
    <style>
        body {
            background-color: #232323;
            color: #bac1c9;
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
        }
        h1, h2, h3 {
            margin: 0;
            padding: 15px 5px 15px 0px;
            font-weight: normal;
            display: inline;
            background: linear-gradient(to bottom, #bac1c9 0%, #8f99a9 60%, #797d83 70%, #63676c 80%, #4d5156 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            text-shadow: 0 0 5px rgba(186, 193, 201, 0.5), 0 0 10px rgba(186, 193, 201, 0.3), 0 0 15px rgba(186, 193, 201, 0.2);
        }
        h1 {
            font-size: 2em;
        }
        h2 {
            font-size: 1.5em;
        }
        h3 {
            font-size: 1.25em;
        }
        p {
            font-size: 1em;
            line-height: 1.6;
        }
    </style>
</head>
<body>
"#;

const PAGE_TAIL: &str = "\n</body>\n</html>\n";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the report page.
///
/// Output depends only on the arguments.
pub fn render_html(results: &[ResultEntry], query: &str, year_range: Option<YearRange>) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&format!(
        "<h1>Search Results for \"{}\"</h1><br><br>\n",
        escape_html(query)
    ));

    if let Some(range) = year_range {
        html.push_str(&format!("<h2>Year Range: {}</h2><br><br>\n", range));
    }

    for entry in results {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&entry.title)));
        for paragraph in entry.paragraphs() {
            html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }
    }

    html.push_str(PAGE_TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turing() -> ResultEntry {
        ResultEntry::new(
            "Alan Turing",
            "Alan Turing (1912-1954) was a mathematician.\n\nHe is considered the father of computer science.",
        )
    }

    #[test]
    fn test_render_is_deterministic() {
        let results = vec![turing()];
        let range = Some(YearRange::new(1900, 1960));
        let first = render_html(&results, "Turing", range);
        let second = render_html(&results, "Turing", range);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_page_shell() {
        let html = render_html(&[], "Turing", None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>Wikipedia Search Results</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<h1>Search Results for \"Turing\"</h1><br><br>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_year_range_banner() {
        let with_range = render_html(&[], "Turing", Some(YearRange::new(1930, 1950)));
        assert!(with_range.contains("<h2>Year Range: 1930 - 1950</h2><br><br>"));

        let without = render_html(&[], "Turing", None);
        assert!(!without.contains("Year Range"));
    }

    #[test]
    fn test_render_entry_paragraphs() {
        let html = render_html(&[turing()], "Turing", None);
        assert!(html.contains("<h2>Alan Turing</h2>"));
        assert!(html.contains("<p>Alan Turing (1912-1954) was a mathematician.</p>"));
        assert!(html.contains("<p>He is considered the father of computer science.</p>"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_render_body_layout() {
        let html = render_html(&[turing()], "Turing", Some(YearRange::new(1900, 1960)));
        let body = html
            .strip_prefix(PAGE_HEAD)
            .and_then(|rest| rest.strip_suffix(PAGE_TAIL))
            .unwrap();
        assert_eq!(
            body,
            "<h1>Search Results for \"Turing\"</h1><br><br>\n\
             <h2>Year Range: 1900 - 1960</h2><br><br>\n\
             <h2>Alan Turing</h2>\n\
             <p>Alan Turing (1912-1954) was a mathematician.</p>\n\
             <p>He is considered the father of computer science.</p>\n"
        );
    }

    #[test]
    fn test_render_skips_blank_paragraphs() {
        let entry = ResultEntry::new("Gaps", "\n\n  One  \n\n\n\n   \n\nTwo\n\n");
        let html = render_html(&[entry], "gaps", None);
        assert!(html.contains("<p>One</p>"));
        assert!(html.contains("<p>Two</p>"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_render_escapes_markup() {
        let entry = ResultEntry::new("<script>alert(1)</script>", "Fish & <b>chips</b>");
        let html = render_html(&[entry], "\"quoted\" & <tag>", None);

        assert!(!html.contains("<script>"));
        assert!(html.contains("<h2>&lt;script&gt;alert(1)&lt;/script&gt;</h2>"));
        assert!(html.contains("<p>Fish &amp; &lt;b&gt;chips&lt;/b&gt;</p>"));
        assert!(html.contains("Search Results for \"&quot;quoted&quot; &amp; &lt;tag&gt;\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
        assert_eq!(escape_html("a<b>c&d\"e"), "a&lt;b&gt;c&amp;d&quot;e");
    }
}
