//! Link-Slurp: fetch a remote HTML document and list its hyperlinks
//!
//! This crate implements a small web service that retrieves a page, walks every
//! anchor in it and reports the links back as JSON, alongside a status-check
//! passthrough and a captcha-gated feedback mailer.

pub mod check;
pub mod config;
pub mod feedback;
pub mod server;
pub mod slurp;
pub mod url;

use thiserror::Error;

/// Main error type for Link-Slurp operations
#[derive(Debug, Error)]
pub enum SlurpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while retrieving a remote document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Errors raised by the feedback mailer
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(String),

    #[error("Failed to build message envelope: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("Mail queue is closed")]
    QueueClosed,
}

/// Result type alias for Link-Slurp operations
pub type Result<T> = std::result::Result<T, SlurpError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use slurp::{Link, ScrapeResult, Slurper};
pub use crate::url::{is_absolute, normalize_href};
