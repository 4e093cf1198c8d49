//! Configuration module for Link-Slurp
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! The resulting [`Config`] is passed explicitly into the server and its
//! collaborators at startup; nothing reads configuration from global state.
//!
//! # Example
//!
//! ```no_run
//! use link_slurp::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Listening on: {}", config.server.bind_address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, RecaptchaConfig, ServerConfig, SmtpConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
