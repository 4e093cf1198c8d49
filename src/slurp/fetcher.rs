//! HTTP fetcher implementation
//!
//! This module is the document-fetch transport of the slurp pipeline:
//! - Building the shared HTTP client from [`FetcherConfig`]
//! - Issuing a single GET per document (no retry)
//! - Classifying transport failures into [`FetchError`]

use crate::config::FetcherConfig;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed by reqwest's default policy; timeouts come from the
/// fetcher configuration and are the only way an in-flight fetch is abandoned.
///
/// # Example
///
/// ```no_run
/// use link_slurp::config::FetcherConfig;
/// use link_slurp::slurp::build_http_client;
///
/// let config = FetcherConfig {
///     user_agent: "link-slurp/1.0".to_string(),
///     timeout_secs: 30,
///     connect_timeout_secs: 10,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the raw body of the document at `url`
///
/// Any response that arrives is a document, whatever its status: error pages
/// are parsed like any other page.
///
/// # Failure Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Timeout | `FetchError::Timeout` |
/// | Connection refused / DNS failure | `FetchError::Connect` |
/// | Body could not be read | `FetchError::Body` |
/// | Anything else (e.g. unparseable URL) | `FetchError::Request` |
pub async fn fetch_document(client: &Client, url: &str) -> FetchResult<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} answered {}, parsing body anyway", url, status);
    }

    let body = response.bytes().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Maps a transport error onto the fetch failure taxonomy
pub(crate) fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
