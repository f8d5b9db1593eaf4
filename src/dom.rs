//! Small helpers over `scraper` element handles.
//!
//! Everything here is read-only over a parsed document. Attribute access goes
//! through [`attr`], which returns `None` for a missing attribute instead of
//! forcing callers to handle a fault path.

use scraper::ElementRef;

/// Optional attribute read.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Case-insensitive substring match against the whole `class` attribute.
/// `needle` must be lowercase. Elements without a class never match.
pub fn class_contains(el: ElementRef<'_>, needle: &str) -> bool {
    attr(el, "class").is_some_and(|c| c.to_lowercase().contains(needle))
}

/// All element descendants of `scope`, excluding `scope` itself,
/// in document order.
pub fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Descendant elements with the given tag name, in document order.
pub fn tags<'a>(
    scope: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    descendants(scope).filter(move |e| e.value().name() == tag)
}

pub fn first_tag<'a>(scope: ElementRef<'a>, tag: &'static str) -> Option<ElementRef<'a>> {
    tags(scope, tag).next()
}

/// Nearest ancestor element with the given tag name.
pub fn nearest_ancestor<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == tag)
}

/// Flattened text: trimmed text chunks joined with single spaces.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
