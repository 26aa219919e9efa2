//! Notification dispatch for enquiries and the legacy contact form.

pub mod templates;

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ContactMessage, Enquiry};
use crate::error::CoreError;
use crate::ports::Mailer;

/// Same permissive shape check the frontend applies: something, an `@`,
/// something, a dot, something. Deliverability is the relay's problem.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Returns true when `email` looks like an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Formats and sends the canned transactional emails through a
/// [`Mailer`] port. No retry, no queueing: a failed send is reported to
/// the caller and nothing is compensated.
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    admin_inbox: String,
    contact_phone: String,
}

impl Notifier {
    /// Create a notifier sending admin-facing mail to `admin_inbox`.
    pub fn new(mailer: Arc<dyn Mailer>, admin_inbox: String, contact_phone: String) -> Self {
        Self {
            mailer,
            admin_inbox,
            contact_phone,
        }
    }

    /// Handle an enquiry: one message to the admin inbox, one
    /// acknowledgment to the customer.
    ///
    /// Both sends are always attempted; a failure of the admin message
    /// does not suppress the customer acknowledgment. If either failed,
    /// the operation reports the first failure after both completed.
    pub async fn submit_enquiry(&self, enquiry: &Enquiry) -> Result<(), CoreError> {
        if enquiry.name.is_empty() || enquiry.email.is_empty() || enquiry.phone.is_empty() {
            return Err(CoreError::Validation(
                "Name, email and phone are required".to_string(),
            ));
        }
        if !is_valid_email(&enquiry.email) {
            return Err(CoreError::Validation(
                "Please provide a valid email address".to_string(),
            ));
        }

        let product_label = enquiry
            .product_name
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("General");
        let admin_subject = format!("[Banty] New enquiry from {} - {product_label}", enquiry.name);
        let admin_html = templates::enquiry_to_admin(enquiry);
        let admin_sent = self
            .mailer
            .send(&self.admin_inbox, &admin_subject, &admin_html)
            .await;
        if let Err(err) = &admin_sent {
            tracing::warn!(error = %err, "admin enquiry mail failed");
        }

        let reply_html = templates::enquiry_auto_reply(&enquiry.name, &self.contact_phone);
        let customer_sent = self
            .mailer
            .send(
                &enquiry.email,
                "We received your enquiry - Banty Car Accessories",
                &reply_html,
            )
            .await;

        match (admin_sent, customer_sent) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(err), _) | (_, Err(err)) => Err(err.into()),
        }
    }

    /// Handle a legacy contact-form submission: single admin message.
    pub async fn submit_contact(&self, contact: &ContactMessage) -> Result<(), CoreError> {
        if contact.name.is_empty() || contact.email.is_empty() || contact.message.is_empty() {
            return Err(CoreError::Validation(
                "Name, email, and message are required fields".to_string(),
            ));
        }
        if !is_valid_email(&contact.email) {
            return Err(CoreError::Validation(
                "Please provide a valid email address".to_string(),
            ));
        }

        let subject = format!("New Contact from {}", contact.name);
        let html = templates::contact_form_submission(contact);
        self.mailer
            .send(&self.admin_inbox, &subject, &html)
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MailError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
    }

    /// Mailer that records sends and fails for configured recipients.
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail_to: Option<String>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            if self.fail_to.as_deref() == Some(to) {
                return Err(MailError::Delivery("relay refused".to_string()));
            }
            Ok(())
        }
    }

    fn enquiry() -> Enquiry {
        Enquiry {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            ..Enquiry::default()
        }
    }

    #[tokio::test]
    async fn enquiry_sends_admin_and_customer_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "admin@banty.in".into(), "123".into());

        notifier.submit_enquiry(&enquiry()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "admin@banty.in");
        assert!(sent[0].1.contains("Asha"));
        assert_eq!(sent[1].0, "asha@example.com");
    }

    #[tokio::test]
    async fn admin_failure_does_not_suppress_auto_reply() {
        let mailer = Arc::new(RecordingMailer {
            fail_to: Some("admin@banty.in".to_string()),
            ..RecordingMailer::default()
        });
        let notifier = Notifier::new(mailer.clone(), "admin@banty.in".into(), "123".into());

        let err = notifier.submit_enquiry(&enquiry()).await.unwrap_err();
        assert!(matches!(err, CoreError::Delivery(_)));

        // Customer acknowledgment was still attempted.
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].0, "asha@example.com");
    }

    #[tokio::test]
    async fn invalid_email_fails_before_any_dispatch() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "admin@banty.in".into(), "123".into());

        let mut bad = enquiry();
        bad.email = "not-an-email".to_string();
        let err = notifier.submit_enquiry(&bad).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn contact_requires_message() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "admin@banty.in".into(), "123".into());

        let contact = ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            ..ContactMessage::default()
        };
        let err = notifier.submit_contact(&contact).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn contact_sends_single_admin_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "admin@banty.in".into(), "123".into());

        let contact = ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            company: Some("Acme".to_string()),
            message: "Hello".to_string(),
        };
        notifier.submit_contact(&contact).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, "New Contact from Asha");
    }
}
