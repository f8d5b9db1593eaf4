//! Career-summary extraction.

use scraper::ElementRef;

use crate::dom;

/// Space-joined paragraph texts from a "content"-classed sub-div when one
/// exists, else from the whole block. If no paragraphs yield text, fall back
/// to the scope's flattened text with the name and title each removed (first
/// occurrence only). The fallback is deliberately coarse and may keep stray
/// markup-adjacent text.
///
/// The result is NOT truncated here; year extraction runs on the full text.
pub fn text(block: ElementRef<'_>, name: &str, title: &str) -> String {
    let scope = dom::tags(block, "div")
        .find(|d| dom::class_contains(*d, "content"))
        .unwrap_or(block);

    let joined = dom::tags(scope, "p")
        .map(dom::text_of)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    let mut flat = dom::text_of(scope);
    if !name.is_empty() && flat.contains(name) {
        flat = flat.replacen(name, "", 1);
    }
    if !title.is_empty() && flat.contains(title) {
        flat = flat.replacen(title, "", 1);
    }
    flat.trim().to_string()
}
