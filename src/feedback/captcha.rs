//! Captcha verification
//!
//! Forwards a challenge/response pair to the verification endpoint and reads
//! back a yes/no answer. The endpoint replies with plain text whose first line
//! is `true` or `false`; the second line carries an error code when invalid.

use crate::config::RecaptchaConfig;
use reqwest::Client;

/// Challenge/response pair submitted by a browser
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct CaptchaAnswer {
    #[serde(alias = "Challenge", default)]
    pub challenge: String,

    #[serde(alias = "Response", default)]
    pub response: String,
}

/// Checks captcha answers against the verification endpoint
#[derive(Debug, Clone)]
pub struct CaptchaVerifier {
    client: Client,
    private_key: String,
    verify_url: String,
}

impl CaptchaVerifier {
    pub fn new(client: Client, config: &RecaptchaConfig) -> Self {
        Self {
            client,
            private_key: config.private_key.clone(),
            verify_url: config.verify_url.clone(),
        }
    }

    /// Returns true only when the endpoint confirms the answer
    ///
    /// Transport failures and unexpected replies count as "not valid".
    pub async fn verify(&self, remote_ip: &str, answer: &CaptchaAnswer) -> bool {
        let form = [
            ("privatekey", self.private_key.as_str()),
            ("remoteip", remote_ip),
            ("challenge", answer.challenge.as_str()),
            ("response", answer.response.as_str()),
        ];

        let reply = match self.client.post(&self.verify_url).form(&form).send().await {
            Ok(response) => response.text().await,
            Err(e) => Err(e),
        };

        match reply {
            Ok(body) => {
                let valid = is_confirmed(&body);
                if !valid {
                    tracing::info!("Captcha rejected for {}: {}", remote_ip, body.trim());
                }
                valid
            }
            Err(e) => {
                tracing::warn!("Captcha verification request failed: {}", e);
                false
            }
        }
    }
}

/// Reads the verdict from the first line of a verification reply
fn is_confirmed(body: &str) -> bool {
    body.lines().next().map(str::trim) == Some("true")
}
