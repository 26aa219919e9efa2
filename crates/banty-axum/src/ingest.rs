//! Multipart ingestion for product create/update requests.
//!
//! Text fields become a `ProductDraft`; `images` parts are spooled to
//! the upload directory, capped in number and size and filtered by
//! extension, before the media host ever sees them.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use banty_core::domain::ProductDraft;
use banty_cloudinary::has_allowed_extension;

use crate::error::HttpError;

/// Maximum number of image files per request.
pub const MAX_IMAGE_FILES: usize = 10;

/// Maximum size of one image file.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Everything a product create/update request carries.
#[derive(Debug, Default)]
pub struct ProductSubmission {
    pub admin_token: Option<String>,
    pub draft: ProductDraft,
    /// URLs the caller wants to keep (update only), parsed from the
    /// `existingImages` JSON field. Malformed JSON degrades to empty.
    pub existing_images: Vec<String>,
    /// Spooled local files awaiting upload.
    pub files: Vec<PathBuf>,
}

/// Read a product form, spooling image parts under `upload_dir`.
///
/// On failure every file spooled so far is removed before the error is
/// returned; on success the caller owns the temp files and removes them
/// after upload.
pub async fn read_product_form(
    upload_dir: &Path,
    multipart: &mut Multipart,
) -> Result<ProductSubmission, HttpError> {
    let mut submission = ProductSubmission::default();
    match fill_submission(upload_dir, multipart, &mut submission).await {
        Ok(()) => Ok(submission),
        Err(err) => {
            remove_temp_files(&submission.files).await;
            Err(err)
        }
    }
}

async fn fill_submission(
    upload_dir: &Path,
    multipart: &mut Multipart,
    submission: &mut ProductSubmission,
) -> Result<(), HttpError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Malformed form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "images" => {
                if submission.files.len() >= MAX_IMAGE_FILES {
                    return Err(HttpError::BadRequest("Too many image files".to_string()));
                }
                let path = spool_image(upload_dir, field).await?;
                submission.files.push(path);
            }
            "existingImages" => {
                let raw = read_text(field).await?;
                submission.existing_images = parse_existing_images(&raw);
            }
            "adminToken" => submission.admin_token = Some(read_text(field).await?),
            "name" => submission.draft.name = Some(read_text(field).await?),
            "price" => submission.draft.price = Some(read_text(field).await?),
            "category" => submission.draft.category = Some(read_text(field).await?),
            "tagline" => submission.draft.tagline = Some(read_text(field).await?),
            // Unknown fields are ignored, as the previous backend did.
            _ => {}
        }
    }
    Ok(())
}

async fn read_text(field: Field<'_>) -> Result<String, HttpError> {
    field
        .text()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Malformed form data: {e}")))
}

/// `existingImages` arrives as a JSON-encoded array of URLs. Anything
/// that does not parse as an array degrades to "keep nothing".
fn parse_existing_images(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

/// Write one image part to the spool directory, enforcing the extension
/// filter and per-file size cap while streaming.
async fn spool_image(upload_dir: &Path, mut field: Field<'_>) -> Result<PathBuf, HttpError> {
    let original_name = field.file_name().unwrap_or("").to_string();
    let ext = Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| ".jpg".to_string(), |e| format!(".{}", e.to_lowercase()));

    let spooled_name = format!(
        "product-{}-{}{ext}",
        chrono::Utc::now().timestamp_millis(),
        &Uuid::new_v4().simple().to_string()[..8],
    );
    let path = upload_dir.join(spooled_name);

    if !has_allowed_extension(&path) {
        return Err(HttpError::BadRequest(
            "Only image files are allowed".to_string(),
        ));
    }

    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|e| HttpError::Internal(format!("could not spool upload: {e}")))?;

    let mut written = 0usize;
    loop {
        let chunk = field
            .chunk()
            .await
            .map_err(|e| HttpError::BadRequest(format!("Malformed form data: {e}")))?;
        let Some(chunk) = chunk else { break };
        written += chunk.len();
        if written > MAX_IMAGE_BYTES {
            drop(file);
            let _ = tokio::fs::remove_file(&path).await;
            return Err(HttpError::BadRequest("File too large".to_string()));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| HttpError::Internal(format!("could not spool upload: {e}")))?;
    }
    file.flush()
        .await
        .map_err(|e| HttpError::Internal(format!("could not spool upload: {e}")))?;

    Ok(path)
}

/// Best-effort removal of spooled files; failures are logged, never
/// escalated.
pub async fn remove_temp_files(files: &[PathBuf]) {
    for file in files {
        if let Err(err) = tokio::fs::remove_file(file).await {
            tracing::warn!(path = %file.display(), error = %err, "could not delete tmp file");
        }
    }
}
