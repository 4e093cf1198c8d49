//! Fetch-and-extract orchestration
//!
//! A scrape runs strictly in sequence:
//!
//! ```text
//! Idle -> Fetching -> Parsing -> Extracting -> Done(Success)
//!            |
//!            +-> Done(Failure)
//! ```
//!
//! Nothing is shared between scrapes except the HTTP client's connection pool.

use crate::config::FetcherConfig;
use crate::slurp::document::Document;
use crate::slurp::extractor::extract_links;
use crate::slurp::fetcher::{build_http_client, fetch_document};
use crate::slurp::result::{Link, ScrapeRequest, ScrapeResult};
use crate::url::lowercase_target;
use reqwest::Client;

/// Runs scrapes against remote documents
#[derive(Debug, Clone)]
pub struct Slurper {
    client: Client,
}

impl Slurper {
    /// Creates a slurper with a client built from the fetcher configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a slurper around an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches `target` and extracts every link in it
    ///
    /// The target is lowercased in full (path and query included) before it
    /// is fetched, and the lowercased form is the origin for relative hrefs.
    /// Any fetch failure yields [`ScrapeResult::Failure`]; there are no
    /// partial results and no retries.
    pub async fn scrape(&self, request: &ScrapeRequest) -> ScrapeResult {
        let target = lowercase_target(&request.target);
        tracing::debug!("Fetching {}", target);

        match fetch_document(&self.client, &target).await {
            Ok(body) => {
                let links = links_from_body(&body, &target);
                tracing::info!("Extracted {} links from {}", links.len(), target);
                ScrapeResult::Success { links }
            }
            Err(e) => {
                tracing::warn!("Error querying for document {}: {}", target, e);
                ScrapeResult::Failure
            }
        }
    }

    /// Scrapes `target` and returns the serialized envelope
    ///
    /// A marshal fault is reported as the failure envelope, never as an error.
    pub async fn scrape_json(&self, target: &str) -> Vec<u8> {
        self.scrape(&ScrapeRequest::new(target))
            .await
            .to_json_or_failure()
    }
}

/// Parses a fetched body and extracts its links against `origin`
///
/// Kept synchronous so the parsed document never lives across an await point.
fn links_from_body(body: &[u8], origin: &str) -> Vec<Link> {
    let document = Document::parse(body);
    extract_links(&document, origin)
}
