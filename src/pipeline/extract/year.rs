//! Graduation-year extraction.

use std::sync::LazyLock;

use regex::Regex;

static CLASS_OF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Class of (\d{4})").unwrap());
static BARE_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

/// Search `summary + " " + title` for "Class of YYYY" first, then for any
/// standalone year in 1900..=2099. First match wins; plausibility against the
/// other fields is not checked.
pub fn find(summary: &str, title: &str) -> String {
    let haystack = format!("{} {}", summary, title);
    CLASS_OF_RE
        .captures(&haystack)
        .or_else(|| BARE_YEAR_RE.captures(&haystack))
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_of_beats_bare_year() {
        // A bare year appearing earlier must still lose to "Class of".
        assert_eq!(find("Opened a bistro in 2005. Class of 1999.", ""), "1999");
    }

    #[test]
    fn bare_year_fallback() {
        assert_eq!(find("Graduated in 1987 with honors.", ""), "1987");
    }

    #[test]
    fn year_found_in_title() {
        assert_eq!(find("", "Class of 2010 Distinguished Alumna"), "2010");
    }

    #[test]
    fn out_of_range_tokens_ignored() {
        assert_eq!(find("Room 1845, est. 2150", ""), "");
    }

    #[test]
    fn digits_inside_words_ignored() {
        assert_eq!(find("item A2004B", ""), "");
    }
}
