//! Shared fixtures for router tests: stub ports, a tempdir-backed real
//! store, and a multipart body builder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use banty_axum::bootstrap::AppContext;
use banty_core::Notifier;
use banty_core::domain::VerifiedIdentity;
use banty_core::policy::AdminPolicy;
use banty_core::ports::{
    IdentityError, IdentityVerifier, MailError, Mailer, MediaError, MediaHost,
};
use banty_core::services::CatalogService;
use banty_store::JsonCatalogStore;

/// Token accepted as an allow-listed admin.
pub const ADMIN_TOKEN: &str = "good-admin-token";
/// Token that verifies to a non-admin identity.
pub const CUSTOMER_TOKEN: &str = "good-customer-token";
/// The allow-listed admin email; also the enquiry inbox.
pub const ADMIN_EMAIL: &str = "admin@banty.example";

/// Verifier that accepts the two well-known tokens and rejects all else.
pub struct StubVerifier;

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, IdentityError> {
        match token {
            ADMIN_TOKEN => Ok(VerifiedIdentity {
                email: ADMIN_EMAIL.to_string(),
                name: Some("Test Admin".to_string()),
            }),
            CUSTOMER_TOKEN => Ok(VerifiedIdentity {
                email: "customer@example.com".to_string(),
                name: Some("Customer".to_string()),
            }),
            _ => Err(IdentityError::Rejected("unknown token".to_string())),
        }
    }
}

/// Media host that mints deterministic URLs from spooled file names.
pub struct StubMediaHost;

#[async_trait]
impl MediaHost for StubMediaHost {
    async fn upload(&self, path: &Path) -> Result<String, MediaError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| MediaError::Upload("nameless file".to_string()))?;
        Ok(format!("https://cdn.test/{name}"))
    }

    async fn upload_all(&self, paths: &[PathBuf]) -> Result<Vec<String>, MediaError> {
        let mut urls = Vec::with_capacity(paths.len());
        for path in paths {
            urls.push(self.upload(path).await?);
        }
        Ok(urls)
    }
}

/// Mailer that records every send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// Build an `AppContext` over a tempdir-backed JSON store.
///
/// Returns the context, the recording mailer and the catalog file path
/// (for seeding or direct inspection).
pub fn test_context(dir: &TempDir) -> (AppContext, Arc<RecordingMailer>, PathBuf) {
    let catalog_path = dir.path().join("products.json");
    let upload_dir = dir.path().join("uploads");
    std::fs::create_dir_all(&upload_dir).unwrap();

    let store = Arc::new(JsonCatalogStore::new(&catalog_path));
    let mailer = Arc::new(RecordingMailer::default());

    let ctx = AppContext {
        catalog: CatalogService::new(store),
        notifier: Notifier::new(mailer.clone(), ADMIN_EMAIL.to_string(), "12345".to_string()),
        verifier: Arc::new(StubVerifier),
        media: Arc::new(StubMediaHost),
        policy: AdminPolicy::new([ADMIN_EMAIL]),
        upload_dir,
    };
    (ctx, mailer, catalog_path)
}

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "banty-test-boundary";

/// One part of a multipart form.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Assemble a multipart/form-data body with [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Content-Type header value matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
