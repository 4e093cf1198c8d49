use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Reads the service configuration (listener, fetcher, optional mail
/// sections) and rejects anything `serve` could not start with
///
/// ```no_run
/// use std::path::Path;
/// use link_slurp::config::load_config;
///
/// let config = load_config(Path::new("link-slurp.toml")).unwrap();
/// println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_and_validate(&content)
}

/// Hex SHA-256 of the raw file, logged at startup to tie a running
/// instance to the exact file it was started with
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(hash_content(&content))
}

/// Loads the configuration and its hash from a single read of the file
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_and_validate(&content)?;
    Ok((config, hash_content(&content)))
}

fn parse_and_validate(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn hash_content(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
