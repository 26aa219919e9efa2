//! Identity verification port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VerifiedIdentity;

/// Errors from identity verification.
///
/// Every variant means the caller must not be treated as authenticated.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider rejected the token (bad signature, audience, expiry).
    #[error("Invalid or expired token: {0}")]
    Rejected(String),

    /// The provider could not be reached or answered garbage.
    #[error("Identity provider error: {0}")]
    Provider(String),
}

/// Verifies an opaque identity assertion against an external provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Validate `token` and return the verified identity.
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, IdentityError>;
}
