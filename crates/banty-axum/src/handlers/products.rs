//! Product handlers - public listing and admin-gated mutations.
//!
//! Mutating requests arrive as multipart forms (fields plus image
//! files). The flow per request: ingest the form, authorize, validate,
//! upload spooled files to the media host, then hand the mutation to
//! the catalog service. Spooled files are removed once uploaded, or on
//! any failure along the way.

use std::path::PathBuf;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::{Value, json};

use banty_core::CoreError;
use banty_core::domain::ProductDraft;

use crate::error::HttpError;
use crate::handlers::require_admin;
use crate::ingest::{self, ProductSubmission};
use crate::state::AppState;

/// `GET /api/products` - list the catalog. Public, never fails.
pub async fn list(State(state): State<AppState>) -> Json<Value> {
    let products = state.catalog.list().await;
    Json(json!({ "success": true, "products": products }))
}

/// `POST /api/products` - create a product (admin only).
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, HttpError> {
    let mut submission = ingest::read_product_form(&state.upload_dir, &mut multipart).await?;
    let files = std::mem::take(&mut submission.files);

    if let Err(err) = authorize_and_validate(&state, &submission).await {
        ingest::remove_temp_files(&files).await;
        return Err(err);
    }

    let image_urls = upload_spooled(&state, files).await?;

    let product = state
        .catalog
        .create(submission.draft, image_urls)
        .await
        .map_err(|err| fail(err, "Failed to create product"))?;

    Ok(Json(json!({ "success": true, "product": product })))
}

/// `PUT /api/products/{id}` - full-record replacement (admin only).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Value>, HttpError> {
    let mut submission = ingest::read_product_form(&state.upload_dir, &mut multipart).await?;
    let files = std::mem::take(&mut submission.files);

    if let Err(err) = authorize_and_validate(&state, &submission).await {
        ingest::remove_temp_files(&files).await;
        return Err(err);
    }

    // Check existence before paying for uploads.
    if !state.catalog.list().await.iter().any(|p| p.id == id) {
        ingest::remove_temp_files(&files).await;
        return Err(HttpError::NotFound("Product not found".to_string()));
    }

    let new_urls = upload_spooled(&state, files).await?;

    let product = state
        .catalog
        .update(&id, submission.draft, submission.existing_images, new_urls)
        .await
        .map_err(|err| fail(err, "Failed to update product"))?;

    Ok(Json(json!({ "success": true, "product": product })))
}

/// Request body accepted by `DELETE /api/products/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "adminToken", default)]
    pub admin_token: Option<String>,
}

/// `DELETE /api/products/{id}` - remove a product (admin only).
///
/// The token is read from the `X-Admin-Token` header, falling back to
/// the optional JSON body.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Option<Json<DeleteRequest>>,
) -> Result<Json<Value>, HttpError> {
    let token = headers
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| body.and_then(|Json(b)| b.admin_token));

    require_admin(&state, token.as_deref()).await?;

    state
        .catalog
        .delete(&id)
        .await
        .map_err(|err| fail(err, "Failed to delete product"))?;

    Ok(Json(json!({ "success": true, "message": "Product deleted" })))
}

/// Authorization plus the presence checks that must run before any
/// upload is attempted.
async fn authorize_and_validate(
    state: &AppState,
    submission: &ProductSubmission,
) -> Result<(), HttpError> {
    require_admin(state, submission.admin_token.as_deref()).await?;

    if is_missing(&submission.draft) {
        return Err(HttpError::BadRequest(
            "name and price are required".to_string(),
        ));
    }
    Ok(())
}

fn is_missing(draft: &ProductDraft) -> bool {
    draft.name.as_deref().unwrap_or("").is_empty()
        || draft.price.as_deref().unwrap_or("").is_empty()
}

/// Upload spooled files and always remove them afterwards, success or
/// not.
async fn upload_spooled(state: &AppState, files: Vec<PathBuf>) -> Result<Vec<String>, HttpError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }
    let uploaded = state.media.upload_all(&files).await;
    ingest::remove_temp_files(&files).await;
    uploaded.map_err(|err| HttpError::from(CoreError::from(err)))
}

/// Collapse unexpected failures to the legacy canned message; input and
/// lookup failures keep their specific status.
fn fail(err: CoreError, canned: &str) -> HttpError {
    match err {
        CoreError::Validation(msg) => HttpError::BadRequest(msg),
        CoreError::NotFound(msg) => HttpError::NotFound(msg),
        other => {
            tracing::error!(error = %other, "{canned}");
            HttpError::Internal(canned.to_string())
        }
    }
}
