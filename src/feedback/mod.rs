//! Feedback module: captcha-gated contact mail
//!
//! A visitor submits their name, address and message together with a captcha
//! answer. Once the captcha is confirmed the message is queued for delivery to
//! the configured recipient, and the caller learns whether it went out.

mod captcha;
mod mail;

pub use captcha::{CaptchaAnswer, CaptchaVerifier};
pub use mail::{
    render_message, DeliveryReceipt, MailQueue, MailRelay, OutgoingMail, SmtpRelay,
};

use crate::config::{RecaptchaConfig, SmtpConfig};
use crate::MailError;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Number of messages that may wait for the delivery worker
const MAIL_QUEUE_CAPACITY: usize = 32;

/// Contact form payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(alias = "YourEmail", default)]
    pub your_email: String,

    #[serde(alias = "YourName", default)]
    pub your_name: String,

    #[serde(alias = "Feedback", default)]
    pub feedback: String,

    #[serde(alias = "Captcha", default)]
    pub captcha: CaptchaAnswer,
}

/// Verifies captchas and forwards feedback to the mail queue
#[derive(Clone)]
pub struct FeedbackService {
    verifier: CaptchaVerifier,
    queue: MailQueue,
    recipient: String,
}

impl FeedbackService {
    pub fn new(verifier: CaptchaVerifier, queue: MailQueue, recipient: impl Into<String>) -> Self {
        Self {
            verifier,
            queue,
            recipient: recipient.into(),
        }
    }

    /// Builds the service over SMTP and spawns its delivery worker
    pub fn from_config(
        client: Client,
        smtp: &SmtpConfig,
        recaptcha: &RecaptchaConfig,
    ) -> Result<(Self, JoinHandle<()>), MailError> {
        let relay = SmtpRelay::new(smtp)?;
        let (queue, worker) = MailQueue::start(Arc::new(relay), MAIL_QUEUE_CAPACITY);
        let verifier = CaptchaVerifier::new(client, recaptcha);
        Ok((Self::new(verifier, queue, smtp.recipient.clone()), worker))
    }

    /// Handles one submission, returning true once the mail has been delivered
    pub async fn submit(&self, remote_ip: &str, submission: FeedbackSubmission) -> bool {
        if !self.verifier.verify(remote_ip, &submission.captcha).await {
            return false;
        }

        let mail = compose(&submission, &self.recipient);
        let receipt = match self.queue.submit(mail).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!("Could not queue feedback mail: {}", e);
                return false;
            }
        };

        match receipt.wait().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Feedback from {} was not delivered: {}", remote_ip, e);
                false
            }
        }
    }
}

/// Builds the outgoing message for a submission
fn compose(submission: &FeedbackSubmission, recipient: &str) -> OutgoingMail {
    OutgoingMail {
        from: format!("{} <{}>", submission.your_name, submission.your_email),
        to: recipient.to_string(),
        subject: format!("Feedback from {}", submission.your_name),
        body: submission.feedback.clone(),
    }
}
