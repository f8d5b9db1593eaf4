//! Tiered candidate-block detection.
//!
//! Site markup is unknown in advance, so detection runs an ordered cascade of
//! strategies, loosest last. The first strategy that yields any candidates
//! wins and later tiers are never attempted. The cascade is a data list
//! ([`STRATEGIES`]) so the priority order can be tested on its own.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::dom;

static ALUMNUS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.alumnus").unwrap());
static BIO_ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.bio-row").unwrap());
static MAIN_TAG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static MAIN_ID_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#main").unwrap());
static MAIN_CLASS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".main-content").unwrap());
static ARTICLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static H2_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());

/// Class markers that suggest a repeated profile container (tier 3 fallback).
const PROFILE_CLASS_MARKERS: &[&str] = &["profile", "card", "bio"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    ExactClass,
    AltClass,
    SemanticScan,
    HeadingProximity,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::ExactClass => "exact-class",
            Tier::AltClass => "alt-class",
            Tier::SemanticScan => "semantic-scan",
            Tier::HeadingProximity => "heading-proximity",
        }
    }
}

/// Candidate count for one attempted tier. Only attempted tiers are recorded;
/// the last entry is the tier that produced the candidates (if any did).
#[derive(Debug, Clone, Copy)]
pub struct TierHit {
    pub tier: Tier,
    pub found: usize,
}

type Strategy = for<'a> fn(&'a Html) -> Vec<ElementRef<'a>>;

pub(crate) const STRATEGIES: [(Tier, Strategy); 4] = [
    (Tier::ExactClass, exact_class),
    (Tier::AltClass, alt_class),
    (Tier::SemanticScan, semantic_scan),
    (Tier::HeadingProximity, heading_proximity),
];

/// Run the cascade. Returns candidates in document order plus the per-tier
/// counts. An empty result is a valid outcome, not an error.
pub fn locate(doc: &Html) -> (Vec<ElementRef<'_>>, Vec<TierHit>) {
    let mut hits = Vec::with_capacity(STRATEGIES.len());
    for (tier, strategy) in STRATEGIES {
        let candidates = strategy(doc);
        hits.push(TierHit {
            tier,
            found: candidates.len(),
        });
        if !candidates.is_empty() {
            return (candidates, hits);
        }
    }
    (Vec::new(), hits)
}

fn exact_class(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&ALUMNUS_SEL).collect()
}

fn alt_class(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&BIO_ROW_SEL).collect()
}

/// Locate a main-content region (tag, then id, then class marker), prefer
/// `article` elements inside it, and fall back to divs whose class hints at
/// a repeated profile structure.
fn semantic_scan(doc: &Html) -> Vec<ElementRef<'_>> {
    let main = doc
        .select(&MAIN_TAG_SEL)
        .next()
        .or_else(|| doc.select(&MAIN_ID_SEL).next())
        .or_else(|| doc.select(&MAIN_CLASS_SEL).next());
    let Some(main) = main else {
        return Vec::new();
    };

    let articles: Vec<_> = main.select(&ARTICLE_SEL).collect();
    if !articles.is_empty() {
        return articles;
    }

    dom::tags(main, "div")
        .filter(|d| {
            PROFILE_CLASS_MARKERS
                .iter()
                .any(|marker| dom::class_contains(*d, marker))
        })
        .collect()
}

/// Last resort for pages with no semantic markup at all: treat the nearest
/// div around each h2 as a candidate, but only when that div also carries
/// body-like content (a paragraph or a "content"-classed div). Materially
/// higher false-positive rate than the other tiers.
fn heading_proximity(doc: &Html) -> Vec<ElementRef<'_>> {
    let mut candidates = Vec::new();
    for heading in doc.select(&H2_SEL) {
        let Some(parent) = dom::nearest_ancestor(heading, "div") else {
            continue;
        };
        let has_body = dom::first_tag(parent, "p").is_some()
            || dom::tags(parent, "div").any(|d| dom::class_contains(d, "content"));
        if has_body {
            candidates.push(parent);
        }
    }
    candidates
}
