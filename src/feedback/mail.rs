//! Feedback mail delivery
//!
//! Messages are rendered from a fixed template and handed to a [`MailQueue`],
//! whose single worker task passes them to a [`MailRelay`] one at a time.
//! Every submission yields a [`DeliveryReceipt`] that resolves once the relay
//! has accepted or refused the message.

use crate::config::SmtpConfig;
use crate::MailError;
use async_trait::async_trait;
use lettre::address::Envelope;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// A message waiting to be rendered and relayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Renders the message text handed to the relay
///
/// Header values have CR and LF removed so user input cannot add headers.
pub fn render_message(mail: &OutgoingMail) -> String {
    let from = header_value(&mail.from);
    format!(
        "From: {from}\r\nTo: {to}\r\nSubject: {subject}\r\n\r\n{body}\r\n\r\nSincerely,\r\n\r\n{from}\r\n",
        from = from,
        to = header_value(&mail.to),
        subject = header_value(&mail.subject),
        body = mail.body,
    )
}

fn header_value(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Something that can deliver a rendered message
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Relay over an authenticated SMTP connection (STARTTLS)
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    envelope: Envelope,
}

impl SmtpRelay {
    /// Builds the relay; the SMTP account doubles as the envelope sender
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let sender: Address = config
            .username
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", config.username, e)))?;
        let recipient: Mailbox = config
            .recipient
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", config.recipient, e)))?;

        let envelope = Envelope::new(Some(sender), vec![recipient.email])
            .map_err(|e| MailError::Build(e.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            envelope,
        })
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = render_message(mail);
        self.transport
            .send_raw(&self.envelope, message.as_bytes())
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}

struct MailJob {
    mail: OutgoingMail,
    done: oneshot::Sender<Result<(), MailError>>,
}

/// Handle to a submitted message
#[derive(Debug)]
pub struct DeliveryReceipt {
    outcome: oneshot::Receiver<Result<(), MailError>>,
}

impl DeliveryReceipt {
    /// Waits for the worker to report the delivery outcome
    pub async fn wait(self) -> Result<(), MailError> {
        self.outcome.await.unwrap_or(Err(MailError::QueueClosed))
    }
}

/// Bounded queue feeding a single delivery worker
#[derive(Clone)]
pub struct MailQueue {
    jobs: mpsc::Sender<MailJob>,
}

impl MailQueue {
    /// Spawns the delivery worker and returns the queue feeding it
    ///
    /// The worker exits once every `MailQueue` clone has been dropped and the
    /// queue has drained.
    pub fn start(relay: Arc<dyn MailRelay>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (jobs, mut pending) = mpsc::channel::<MailJob>(capacity.max(1));

        let worker = tokio::spawn(async move {
            while let Some(job) = pending.recv().await {
                let outcome = relay.deliver(&job.mail).await;
                match &outcome {
                    Ok(()) => tracing::info!("Delivered feedback mail: {}", job.mail.subject),
                    Err(e) => tracing::error!("Failed to deliver feedback mail: {}", e),
                }
                // The submitter may have stopped waiting; the outcome is logged either way
                let _ = job.done.send(outcome);
            }
            tracing::debug!("Mail queue closed, worker exiting");
        });

        (Self { jobs }, worker)
    }

    /// Queues a message for delivery
    pub async fn submit(&self, mail: OutgoingMail) -> Result<DeliveryReceipt, MailError> {
        let (done, outcome) = oneshot::channel();
        self.jobs
            .send(MailJob { mail, done })
            .await
            .map_err(|_| MailError::QueueClosed)?;
        Ok(DeliveryReceipt { outcome })
    }
}
