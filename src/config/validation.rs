use crate::config::types::{Config, FetcherConfig, RecaptchaConfig, ServerConfig, SmtpConfig};
use crate::ConfigError;
use lettre::message::Mailbox;
use lettre::Address;
use std::net::SocketAddr;
use ::url::Url;

/// Upper bound for the fetch timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    if let Some(smtp) = &config.smtp {
        validate_smtp_config(smtp)?;
    }
    if let Some(recaptcha) = &config.recaptcha {
        validate_recaptcha_config(recaptcha)?;
    }
    Ok(())
}

/// Validates listener configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;

    if let Some(dir) = &config.static_dir {
        if dir.is_empty() {
            return Err(ConfigError::Validation(
                "static_dir cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates SMTP relay configuration
fn validate_smtp_config(config: &SmtpConfig) -> Result<(), ConfigError> {
    if config.server.is_empty() {
        return Err(ConfigError::Validation(
            "smtp server cannot be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(ConfigError::Validation("smtp port cannot be 0".to_string()));
    }

    config.username.parse::<Address>().map_err(|e| {
        ConfigError::Validation(format!(
            "smtp username '{}' is not a mail address: {}",
            config.username, e
        ))
    })?;

    config.recipient.parse::<Mailbox>().map_err(|e| {
        ConfigError::Validation(format!(
            "smtp recipient '{}' is not a mailbox: {}",
            config.recipient, e
        ))
    })?;

    Ok(())
}

/// Validates captcha configuration
fn validate_recaptcha_config(config: &RecaptchaConfig) -> Result<(), ConfigError> {
    if config.private_key.is_empty() {
        return Err(ConfigError::Validation(
            "recaptcha private_key cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.verify_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid verify_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "verify_url must use HTTP or HTTPS, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}
