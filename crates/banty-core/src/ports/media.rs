//! Media hosting port.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from the external media host.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The file is not an accepted image type.
    #[error("Only image files are allowed: {0}")]
    UnsupportedType(String),

    /// The upload itself failed (network, provider rejection).
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Converts local, transient files into durable public URLs.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Upload one local file, returning its public URL.
    async fn upload(&self, path: &Path) -> Result<String, MediaError>;

    /// Upload several files concurrently, preserving input order.
    ///
    /// All-or-nothing from the caller's perspective: any single failure
    /// fails the whole batch. Uploads that already completed on the
    /// remote host are not rolled back.
    async fn upload_all(&self, paths: &[std::path::PathBuf]) -> Result<Vec<String>, MediaError>;
}
