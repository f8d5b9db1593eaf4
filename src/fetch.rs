use std::sync::LazyLock;

use tracing::info;

use crate::error::ScrapeError;

/// Browser-like UA; some alumni pages refuse requests with the default
/// reqwest user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

static CLIENT: LazyLock<reqwest::blocking::Client> =
    LazyLock::new(reqwest::blocking::Client::new);

/// Fetch a single page. Any non-2xx status is fatal: there is nothing to
/// extract from, so the run aborts with no partial output.
pub fn get(url: &str) -> Result<Vec<u8>, ScrapeError> {
    let response = CLIENT
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status(status.as_u16()));
    }

    let body = response.bytes()?.to_vec();
    info!("Fetched {} ({} bytes)", url, body.len());
    Ok(body)
}

/// Scheme + host portion of a URL, used to absolutize root-relative image
/// paths. A URL without a path component is returned unchanged.
pub fn origin(url: &str) -> String {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(slash) => url[..after_scheme + slash].to_string(),
        None => url.to_string(),
    }
}
