//! Portrait image extraction.

use scraper::ElementRef;

use crate::dom;

/// `src` of the first image in the block, empty if none. A root-relative path
/// (leading "/") is absolutized against the site origin; any other relative
/// form passes through unchanged, matching existing downstream expectations.
pub fn url(block: ElementRef<'_>, origin: &str) -> String {
    let Some(img) = dom::first_tag(block, "img") else {
        return String::new();
    };
    let Some(src) = dom::attr(img, "src") else {
        return String::new();
    };
    if src.starts_with('/') {
        return format!("{}{}", origin, src);
    }
    src.to_string()
}
