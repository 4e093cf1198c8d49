//! Status-check passthrough
//!
//! Fetches a URL and reports the status line and code it answered with.
//! Unlike a scrape, any HTTP status (including 4xx/5xx) is a valid answer;
//! only transport failures are errors.

use crate::slurp::classify_error;
use crate::FetchResult;
use reqwest::Client;
use serde::Serialize;

/// Status reported by a remote server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Status line, e.g. "200 OK"
    pub status: String,

    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Requests `url` and reports its HTTP status
///
/// The URL is used exactly as given. The response body is never read.
pub async fn check_status(client: &Client, url: &str) -> FetchResult<StatusReport> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    Ok(StatusReport {
        status: status.to_string(),
        status_code: status.as_u16(),
    })
}
