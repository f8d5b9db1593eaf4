use thiserror::Error;

/// Fatal failures that abort a run before any record is produced.
///
/// Per-candidate extraction faults are NOT represented here; those are
/// contained inside the pipeline and reported through diagnostics.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("response body is not valid UTF-8: {0}")]
    Body(#[from] std::str::Utf8Error),
}
