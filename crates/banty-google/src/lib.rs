//! Google identity verification.
//!
//! Validates ID tokens by calling the provider's `tokeninfo` endpoint,
//! which checks signature and expiry server-side; audience and
//! email-verification are checked locally against our configuration.

#![deny(unsafe_code)]

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use banty_core::domain::VerifiedIdentity;
use banty_core::ports::{IdentityError, IdentityVerifier};

const DEFAULT_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Configuration for [`GoogleVerifier`].
#[derive(Debug, Clone)]
pub struct GoogleVerifierConfig {
    /// `tokeninfo` endpoint; overridable for tests.
    pub base_url: String,
    /// OAuth client id the token's audience must match.
    pub client_id: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleVerifierConfig {
    /// Config for the production endpoint with the given client id.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_TOKENINFO_URL.to_string(),
            client_id: client_id.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the `tokeninfo` endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Identity verifier backed by Google's `tokeninfo` endpoint.
pub struct GoogleVerifier {
    client: reqwest::Client,
    config: GoogleVerifierConfig,
}

impl GoogleVerifier {
    /// Create a verifier with the given configuration.
    pub fn new(config: GoogleVerifierConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }
}

/// The subset of the `tokeninfo` response we care about. The endpoint
/// encodes everything as strings, booleans included.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    #[serde(default)]
    aud: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

fn identity_from_token_info(
    info: TokenInfo,
    expected_audience: &str,
) -> Result<VerifiedIdentity, IdentityError> {
    if !expected_audience.is_empty() && info.aud != expected_audience {
        return Err(IdentityError::Rejected(
            "token audience mismatch".to_string(),
        ));
    }
    if info.email_verified.as_deref() == Some("false") {
        return Err(IdentityError::Rejected("email not verified".to_string()));
    }
    let email = info
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| IdentityError::Rejected("token carries no email".to_string()))?;
    Ok(VerifiedIdentity {
        email,
        name: info.name,
    })
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, IdentityError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            // tokeninfo answers 400 for malformed, forged or expired tokens
            tracing::debug!(%status, "identity provider rejected token");
            return Err(IdentityError::Rejected(
                "Invalid or expired token".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(IdentityError::Provider(format!(
                "tokeninfo answered status {status}"
            )));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;
        identity_from_token_info(info, &self.config.client_id)
    }
}
