//! Pipeline driver: parse → locate → extract, one pass, document order.

pub mod extract;
pub mod locate;

use std::panic::{self, AssertUnwindSafe};

use scraper::{ElementRef, Html};

use crate::error::ScrapeError;
pub use extract::Record;
pub use locate::{Tier, TierHit};

/// Observational run data. Never affects which records are emitted.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// One entry per attempted tier; the cascade stops at the first non-empty.
    pub tier_hits: Vec<TierHit>,
    /// Candidates that failed the emission guard.
    pub dropped: usize,
    /// Candidates whose extraction faulted, keyed by candidate index.
    pub errors: Vec<CandidateError>,
}

#[derive(Debug)]
pub struct CandidateError {
    pub index: usize,
    pub message: String,
}

impl Diagnostics {
    pub fn candidates(&self) -> usize {
        self.tier_hits.last().map(|h| h.found).unwrap_or(0)
    }

    pub fn winning_tier(&self) -> Option<Tier> {
        self.tier_hits
            .last()
            .filter(|h| h.found > 0)
            .map(|h| h.tier)
    }
}

pub struct RunReport {
    pub records: Vec<Record>,
    pub diagnostics: Diagnostics,
}

/// Decode and parse the fetched bytes. html5ever recovers from malformed
/// markup on its own, so the only fatal parse condition is a non-UTF-8 body.
pub fn parse(bytes: &[u8]) -> Result<Html, ScrapeError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(Html::parse_document(text))
}

/// Per-candidate extraction worker. Injectable so the containment path can be
/// exercised with a deliberately faulting worker.
type Worker = for<'a> fn(ElementRef<'a>, &str) -> Option<Record>;

/// Run the full pipeline over one parsed page. The locator runs exactly once;
/// candidates are processed in document order, and a fault in one candidate is
/// contained (recorded as a diagnostic) without aborting the rest.
pub fn run(doc: &Html, origin: &str) -> RunReport {
    run_with(doc, origin, extract::extract)
}

fn run_with(doc: &Html, origin: &str, worker: Worker) -> RunReport {
    let (candidates, tier_hits) = locate::locate(doc);

    let mut diagnostics = Diagnostics {
        tier_hits,
        ..Default::default()
    };
    let mut records = Vec::new();

    for (index, block) in candidates.into_iter().enumerate() {
        match panic::catch_unwind(AssertUnwindSafe(|| worker(block, origin))) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => diagnostics.dropped += 1,
            Err(payload) => diagnostics.errors.push(CandidateError {
                index,
                message: panic_message(payload),
            }),
        }
    }

    RunReport {
        records,
        diagnostics,
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "extraction panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_html(html: &str) -> RunReport {
        let doc = Html::parse_document(html);
        run(&doc, "https://www.ciachef.edu")
    }

    #[test]
    fn alumnus_page_yields_one_record() {
        let report = run_html(
            r#"<div class="alumnus">
                 <h2>Jane Doe</h2><h3>Chef de Cuisine</h3><p>Class of 2004</p>
               </div>"#,
        );
        assert_eq!(report.records.len(), 1);
        let r = &report.records[0];
        assert_eq!(r.name, "Jane Doe");
        assert!(r.summary.contains("Class of 2004"));
        assert_eq!(r.image_url, "");
        assert_eq!(report.diagnostics.winning_tier(), Some(Tier::ExactClass));
    }

    #[test]
    fn unmarked_page_recovered_by_heading_proximity() {
        let report = run_html("<div><h2>John Roe</h2><p>Runs a small bakery.</p></div>");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "John Roe");
        assert_eq!(
            report.diagnostics.winning_tier(),
            Some(Tier::HeadingProximity)
        );
    }

    #[test]
    fn zero_candidates_is_success_not_error() {
        let report = run_html("<p>no profiles anywhere</p>");
        assert!(report.records.is_empty());
        assert_eq!(report.diagnostics.candidates(), 0);
        assert_eq!(report.diagnostics.tier_hits.len(), 4);
        assert!(report.diagnostics.errors.is_empty());
    }

    #[test]
    fn bad_candidate_does_not_abort_the_rest() {
        // Second candidate fails the guard; first and third still emit.
        let report = run_html(
            r#"<div class="alumnus"><h2>Jane Doe</h2><p>Bio one.</p></div>
               <div class="alumnus"><p>no heading</p></div>
               <div class="alumnus"><h2>John Roe</h2><p>Bio two.</p></div>"#,
        );
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.diagnostics.dropped, 1);
        assert_eq!(report.diagnostics.candidates(), 3);
    }

    #[test]
    fn emitted_records_always_satisfy_name_invariant() {
        let report = run_html(
            r#"<div class="alumnus"><h2>Al</h2><p>too short</p></div>
               <div class="alumnus"><h3>Unknown</h3><p>sentinel</p></div>
               <div class="alumnus"><h2>Jane Doe</h2><p>ok</p></div>"#,
        );
        for r in &report.records {
            assert_ne!(r.name, extract::NAME_SENTINEL);
            assert!(r.name.chars().count() >= 3);
        }
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.diagnostics.dropped, 2);
    }

    #[test]
    fn document_order_preserved_and_idempotent() {
        let html = r#"
            <main>
              <article><h2>Alice Waters</h2><p>First.</p></article>
              <article><h2>Bob Tower</h2><p>Second.</p></article>
            </main>
        "#;
        let first = run_html(html);
        let second = run_html(html);
        let names: Vec<_> = first.records.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Alice Waters", "Bob Tower"]);
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn summary_length_invariant_holds() {
        let long = format!(
            r#"<div class="alumnus"><h2>Jane Doe</h2><p>{}</p></div>"#,
            "x".repeat(2000)
        );
        let report = run_html(&long);
        assert!(report
            .records
            .iter()
            .all(|r| r.summary.chars().count() <= 500));
    }

    fn flaky_worker(block: ElementRef<'_>, origin: &str) -> Option<Record> {
        let record = extract::extract(block, origin)?;
        if record.name == "Bad Actor" {
            panic!("unreadable block");
        }
        Some(record)
    }

    #[test]
    fn faulted_candidate_is_diagnosed_and_run_continues() {
        let html = r#"<div class="alumnus"><h2>Jane Doe</h2><p>Bio one.</p></div>
           <div class="alumnus"><h2>Bad Actor</h2><p>Bio two.</p></div>
           <div class="alumnus"><h2>John Roe</h2><p>Bio three.</p></div>"#;
        let doc = Html::parse_document(html);
        let report = run_with(&doc, "https://www.ciachef.edu", flaky_worker);

        // Fault is contained: both neighbors still emit, in document order.
        let names: Vec<_> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Roe"]);

        // And recorded against the faulting candidate's index.
        assert_eq!(report.diagnostics.errors.len(), 1);
        assert_eq!(report.diagnostics.errors[0].index, 1);
        assert!(report.diagnostics.errors[0].message.contains("unreadable block"));
        assert_eq!(report.diagnostics.dropped, 0);
    }

    #[test]
    fn alumni_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/alumni.html").unwrap();
        let report = run_html(&html);

        assert_eq!(report.diagnostics.winning_tier(), Some(Tier::ExactClass));
        assert_eq!(report.diagnostics.candidates(), 4);
        assert_eq!(report.diagnostics.dropped, 1); // placeholder card
        assert_eq!(report.records.len(), 3);

        let jane = &report.records[0];
        assert_eq!(jane.name, "Jane Doe");
        assert!(jane.summary.contains("Class of 2004"));
        assert_eq!(jane.graduation_year, "2004");
        assert_eq!(jane.employer, "Bernardin Restaurant");
        assert_eq!(
            jane.image_url,
            "https://www.ciachef.edu/images/alumni/jane-doe.jpg"
        );

        let john = &report.records[1];
        assert_eq!(john.employer, "Roe's Bakery");
        assert_eq!(john.graduation_year, "1998");
        assert_eq!(john.image_url, "https://cdn.example.com/john-roe.jpg");

        let maria = &report.records[2];
        assert_eq!(maria.title, "Pastry Chef");
        assert_eq!(maria.graduation_year, "2015");
        assert_eq!(maria.image_url, "");
        assert_eq!(maria.employer, "");
    }

    #[test]
    fn unstructured_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/unstructured.html").unwrap();
        let report = run_html(&html);

        assert_eq!(
            report.diagnostics.winning_tier(),
            Some(Tier::HeadingProximity)
        );
        // The navigation heading has no body content and is never a candidate.
        assert_eq!(report.diagnostics.candidates(), 2);

        let names: Vec<_> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice Waters", "Bob Tower"]);
        assert!(report.records[1].summary.contains("Tower Bistro"));
    }

    #[test]
    fn parse_rejects_invalid_utf8() {
        assert!(matches!(
            parse(&[0x80, 0xff, 0xfe]),
            Err(ScrapeError::Body(_))
        ));
        assert!(parse(b"<p>fine</p>").is_ok());
    }
}
