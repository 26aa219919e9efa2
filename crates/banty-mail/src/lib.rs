//! SMTP implementation of the mail relay port.
//!
//! One message per call, HTML body, STARTTLS to the configured relay.
//! No retry and no queue: a refused message is reported to the caller.

#![deny(unsafe_code)]

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use banty_core::ports::{MailError, Mailer};

/// Configuration for [`SmtpMailer`].
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. `smtp.gmail.com`.
    pub host: String,
    /// Submission port; 587 for STARTTLS.
    pub port: u16,
    /// Account username; also the envelope sender address.
    pub user: String,
    pub pass: String,
    /// Display name for the `From` header.
    pub from_name: String,
}

/// Mail relay backed by an async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Build a mailer from relay configuration.
    ///
    /// Fails only on a malformed relay hostname; connection problems
    /// surface per send.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Delivery(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();

        let from = format!("\"{}\" <{}>", config.from_name, config.user);
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| MailError::InvalidMessage(format!("from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| MailError::InvalidMessage(format!("to address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| MailError::InvalidMessage(e.to_string()))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        tracing::info!(to, code = %response.code(), "email relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            user: "noreply@example.com".to_string(),
            pass: "secret".to_string(),
            from_name: "Banty Car Accessories".to_string(),
        }
    }

    #[tokio::test]
    async fn builds_transport_for_valid_host() {
        assert!(SmtpMailer::new(&config()).is_ok());
    }

    #[tokio::test]
    async fn from_header_carries_display_name() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        assert_eq!(
            mailer.from,
            "\"Banty Car Accessories\" <noreply@example.com>"
        );
        // And it parses as a mailbox
        assert!(mailer.from.parse::<lettre::message::Mailbox>().is_ok());
    }

    #[tokio::test]
    async fn bad_recipient_is_an_invalid_message() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let err = mailer.send("not an address", "s", "<p>x</p>").await.unwrap_err();
        assert!(matches!(err, MailError::InvalidMessage(_)));
    }
}
