//! Admin sign-in: verify an identity assertion and report whether the
//! verified email is allow-listed.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for `POST /api/auth/admin`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Verify the token and classify the caller as admin or customer.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<Value>, HttpError> {
    let token = req
        .id_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| HttpError::BadRequest("id_token is required".to_string()))?;

    let identity = state.verifier.verify(token).await.map_err(|err| {
        tracing::debug!(error = %err, "admin auth failed");
        HttpError::Unauthorized("Invalid or expired token. Please sign in again.".to_string())
    })?;

    let is_admin = state.policy.is_admin(&identity.email);
    Ok(Json(json!({
        "success": true,
        "message": "User verified",
        "user": {
            "email": identity.email,
            "name": identity.name,
            "isAdmin": is_admin,
        },
    })))
}
