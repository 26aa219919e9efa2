//! Request handlers, one module per resource.

pub mod auth;
pub mod enquiry;
pub mod health;
pub mod products;

use banty_core::domain::VerifiedIdentity;

use crate::error::HttpError;
use crate::state::AppState;

/// Gate for catalog-mutating endpoints: token present, verified, and
/// allow-listed, in that order. 401 for the first two failures, 403 for
/// the last.
pub(crate) async fn require_admin(
    state: &AppState,
    token: Option<&str>,
) -> Result<VerifiedIdentity, HttpError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| HttpError::Unauthorized("Admin token required".to_string()))?;

    let identity = state.verifier.verify(token).await.map_err(|err| {
        tracing::debug!(error = %err, "admin token rejected");
        HttpError::Unauthorized("Invalid admin token".to_string())
    })?;

    if !state.policy.is_admin(&identity.email) {
        return Err(HttpError::Forbidden("Access denied".to_string()));
    }
    Ok(identity)
}
