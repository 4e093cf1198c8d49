use serde::Deserialize;

/// Main configuration structure for Link-Slurp
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
    #[serde(default)]
    pub recaptcha: Option<RecaptchaConfig>,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:8000")
    #[serde(rename = "bind-address")]
    pub bind_address: String,

    /// Directory served for every path not claimed by an API route
    #[serde(rename = "static-dir", default)]
    pub static_dir: Option<String>,
}

/// Outbound document fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header sent with every fetch
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

/// SMTP relay credentials for the feedback mailer
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// Account name; also used as the envelope sender
    pub username: String,

    pub password: String,

    /// Relay host name
    pub server: String,

    pub port: u16,

    /// Mailbox that receives feedback (e.g., "Owner <owner@example.com>")
    pub recipient: String,
}

/// Captcha verification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RecaptchaConfig {
    #[serde(rename = "private-key")]
    pub private_key: String,

    /// Verification endpoint
    #[serde(rename = "verify-url", default = "default_verify_url")]
    pub verify_url: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_verify_url() -> String {
    "https://www.google.com/recaptcha/api/verify".to_string()
}
