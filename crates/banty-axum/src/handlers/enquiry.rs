//! Enquiry and legacy contact-form handlers.
//!
//! These bypass the catalog entirely and go straight to the notifier.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use banty_core::CoreError;
use banty_core::domain::{ContactMessage, Enquiry};

use crate::error::HttpError;
use crate::state::AppState;

/// `POST /api/enquiry` - send admin notification plus customer
/// acknowledgment.
pub async fn submit_enquiry(
    State(state): State<AppState>,
    Json(enquiry): Json<Enquiry>,
) -> Result<Json<Value>, HttpError> {
    match state.notifier.submit_enquiry(&enquiry).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": "Enquiry sent. We will contact you shortly.",
        }))),
        Err(CoreError::Validation(msg)) => Err(HttpError::BadRequest(msg)),
        Err(err) => {
            tracing::error!(error = %err, "enquiry dispatch failed");
            Err(HttpError::Internal(
                "Failed to send enquiry. Please try again.".to_string(),
            ))
        }
    }
}

/// `POST /api/contact` - legacy contact form, single admin message.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(contact): Json<ContactMessage>,
) -> Result<Json<Value>, HttpError> {
    match state.notifier.submit_contact(&contact).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": "Your message has been sent successfully. We'll get back to you soon!",
        }))),
        Err(CoreError::Validation(msg)) => Err(HttpError::BadRequest(msg)),
        Err(err) => {
            tracing::error!(error = %err, "contact dispatch failed");
            Err(HttpError::Internal(
                "Failed to send message. Please try again later.".to_string(),
            ))
        }
    }
}
