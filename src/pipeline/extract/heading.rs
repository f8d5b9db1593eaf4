//! Name and title extraction from a candidate block's headings.

use scraper::ElementRef;

use crate::dom;

/// Placeholder when no heading is present. Records carrying it are dropped
/// by the emission guard.
pub const NAME_SENTINEL: &str = "Unknown";

/// First h2 text, else first h3 text, else the sentinel. The matched node is
/// returned so title extraction can skip it.
pub fn name(block: ElementRef<'_>) -> (String, Option<ElementRef<'_>>) {
    match dom::first_tag(block, "h2").or_else(|| dom::first_tag(block, "h3")) {
        Some(el) => (dom::text_of(el), Some(el)),
        None => (NAME_SENTINEL.to_string(), None),
    }
}

/// First h3 distinct from the name node, else first h4, else a "title"-classed
/// div. An empty result falls through to the first strong/b element.
pub fn title<'a>(block: ElementRef<'a>, name_node: Option<ElementRef<'a>>) -> String {
    let is_name = |el: &ElementRef| name_node.is_some_and(|n| n.id() == el.id());

    let element = dom::tags(block, "h3")
        .find(|e| !is_name(e))
        .or_else(|| dom::first_tag(block, "h4"))
        .or_else(|| dom::tags(block, "div").find(|d| dom::class_contains(*d, "title")));

    let title = element.map(dom::text_of).unwrap_or_default();
    if !title.is_empty() {
        return title;
    }

    dom::first_tag(block, "strong")
        .or_else(|| dom::first_tag(block, "b"))
        .map(dom::text_of)
        .unwrap_or_default()
}
