//! Slurp module: fetch a document and extract its links
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching of the target document
//! - Lenient HTML parsing
//! - Link extraction and href normalization
//! - The success/failure result envelope

mod document;
mod extractor;
mod fetcher;
mod orchestrator;
mod result;

pub use document::{Document, Element};
pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_document};
pub(crate) use fetcher::classify_error;
pub use orchestrator::Slurper;
pub use result::{failure_json, Link, ScrapeRequest, ScrapeResult};
