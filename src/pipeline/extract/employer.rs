//! Employer extraction from the title line.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered first-match-wins pattern list. Kept as data so the precedence is a
/// testable fact: "at X" is tried before the venue-suffix patterns even when a
/// suffix pattern would also match.
const EMPLOYER_PATTERNS: &[&str] = &[
    r"at\s+([^,\.]+)",
    r"of\s+([^,\.]+)",
    r"([^,\.]+?)\s+Restaurant",
    r"([^,\.]+?)\s+Bakery",
    r"([^,\.]+?)\s+Café",
    r"([^,\.]+?)\s+Bistro",
    r"([^,\.]+?)\s+Kitchen",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EMPLOYER_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Match the title (only — never the summary) against the pattern list.
pub fn find(title: &str) -> String {
    PATTERNS
        .iter()
        .find_map(|re| re.captures(title))
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}
