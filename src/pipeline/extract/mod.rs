//! Per-candidate field extraction.
//!
//! Each field has its own heuristic module; this module sequences them over
//! one candidate block and applies the emission guard. A candidate that fails
//! the guard is dropped, never turned into a half-empty record.

pub mod employer;
pub mod heading;
pub mod image;
pub mod summary;
pub mod year;

use scraper::ElementRef;

pub use heading::NAME_SENTINEL;

const SUMMARY_MAX_CHARS: usize = 500;

/// One extracted alumni profile. `graduation_year` and `employer` are carried
/// for diagnostics but are not part of the released column set (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub graduation_year: String,
    pub employer: String,
}

impl Record {
    /// Cells in the released column order: Name and Grad Year, Career, Image URL.
    pub fn row(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.summary.clone(),
            self.image_url.clone(),
        ]
    }
}

/// Derive a record from one candidate block, or `None` when the candidate does
/// not look like a profile. Year and employer run on the untruncated summary;
/// the stored summary is capped afterwards.
pub fn extract(block: ElementRef<'_>, origin: &str) -> Option<Record> {
    let (name, name_node) = heading::name(block);
    let title = heading::title(block, name_node);
    let full_summary = summary::text(block, &name, &title);
    let image_url = image::url(block, origin);
    let graduation_year = year::find(&full_summary, &title);
    let employer = employer::find(&title);

    if !passes_guard(&name, &title, &full_summary) {
        return None;
    }

    Some(Record {
        name,
        title,
        summary: truncate_chars(&full_summary, SUMMARY_MAX_CHARS),
        image_url,
        graduation_year,
        employer,
    })
}

/// Emission invariant: a usable name plus at least one of title/summary.
fn passes_guard(name: &str, title: &str, summary: &str) -> bool {
    name != NAME_SENTINEL
        && name.chars().count() >= 3
        && (!title.is_empty() || !summary.is_empty())
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
