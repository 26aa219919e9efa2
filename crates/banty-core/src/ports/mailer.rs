//! Transactional mail port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the external mail relay.
#[derive(Debug, Error)]
pub enum MailError {
    /// The relay refused the message or the transport failed.
    #[error("Mail delivery failed: {0}")]
    Delivery(String),

    /// The message itself could not be constructed (bad address).
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

/// Relays one email through an external transactional mail service.
///
/// Fire-and-forget from the caller's perspective: no retry, no queueing.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a single HTML email.
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}
