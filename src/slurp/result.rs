//! Slurp data model and wire envelope
//!
//! A scrape ends in exactly one of two JSON shapes:
//!
//! ```text
//! {"success":true,"links":[{"href":"...","content":"..."}, ...]}
//! {"success":false,"links":null}
//! ```

use serde::Serialize;

/// Wire form of a failed scrape, used when even the failure cannot be serialized
const FAILURE_JSON: &[u8] = br#"{"success":false,"links":null}"#;

/// A single scrape request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// Target URL exactly as the caller supplied it
    pub target: String,
}

impl ScrapeRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// One anchor found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute href after normalization
    pub href: String,

    /// Visible text of the anchor
    #[serde(rename = "content")]
    pub text: String,
}

/// Outcome of a scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeResult {
    /// Every anchor of the document, in document order
    Success { links: Vec<Link> },

    /// The document could not be fetched or the result could not be marshalled
    Failure,
}

/// Serialized shape of a [`ScrapeResult`]
#[derive(Serialize)]
struct Envelope<'a> {
    success: bool,
    links: Option<&'a [Link]>,
}

impl ScrapeResult {
    /// Returns true for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the extracted links, or None for a failure
    pub fn links(&self) -> Option<&[Link]> {
        match self {
            Self::Success { links } => Some(links.as_slice()),
            Self::Failure => None,
        }
    }

    /// Serializes the result into its wire envelope
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&Envelope {
            success: self.is_success(),
            links: self.links(),
        })
    }

    /// Serializes the result, downgrading a marshal fault to the failure envelope
    pub fn to_json_or_failure(&self) -> Vec<u8> {
        match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to marshal scrape result: {}", e);
                failure_json()
            }
        }
    }
}

/// Serialized failure envelope
pub fn failure_json() -> Vec<u8> {
    ScrapeResult::Failure
        .to_json()
        .unwrap_or_else(|_| FAILURE_JSON.to_vec())
}
