//! Cloudinary upload client.
//!
//! Converts local temp files into durable public URLs via Cloudinary's
//! signed `image/upload` endpoint. Requests are signed with SHA-256
//! (`signature_algorithm=sha256`) over the sorted parameters plus the
//! API secret.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use banty_core::ports::{MediaError, MediaHost};

const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
const DEFAULT_FOLDER: &str = "banty-car-accessories";

/// Image extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "webp", "gif"];

/// Returns true when `path` carries an accepted image extension.
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Configuration for [`CloudinaryUploader`].
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    /// API base, overridable for tests.
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Remote folder the uploads land in.
    pub folder: String,
    pub timeout: Duration,
}

impl CloudinaryConfig {
    /// Production config for the given account credentials.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            folder: DEFAULT_FOLDER.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Media host backed by Cloudinary.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryUploader {
    /// Create an uploader with the given configuration.
    pub fn new(config: CloudinaryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.base_url, self.config.cloud_name
        )
    }
}

/// Sign upload parameters the Cloudinary way: sort by key, join as
/// `k=v` pairs with `&`, append the API secret, hash.
fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// The one field we need from the upload response.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[async_trait]
impl MediaHost for CloudinaryUploader {
    async fn upload(&self, path: &Path) -> Result<String, MediaError> {
        if !has_allowed_extension(path) {
            return Err(MediaError::UnsupportedType(
                "Only image files are allowed".to_string(),
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MediaError::Upload(format!("could not read {}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.jpg")
            .to_string();

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signed = [
            ("folder", self.config.folder.clone()),
            ("timestamp", timestamp.clone()),
        ];
        let signature = sign_params(&signed, &self.config.api_secret);

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            )
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body, "cloudinary rejected upload");
            return Err(MediaError::Upload(format!(
                "media host answered status {status}"
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?;
        Ok(parsed.secure_url)
    }

    async fn upload_all(&self, paths: &[PathBuf]) -> Result<Vec<String>, MediaError> {
        // Reject unsupported types before any upload attempt.
        for path in paths {
            if !has_allowed_extension(path) {
                return Err(MediaError::UnsupportedType(
                    "Only image files are allowed".to_string(),
                ));
            }
        }
        // Fan out concurrently; order of results matches input order.
        // Completed uploads are not rolled back when a sibling fails.
        try_join_all(paths.iter().map(|p| self.upload(p))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_accepts_images_case_insensitively() {
        for name in ["a.jpg", "b.JPEG", "c.png", "d.webp", "e.GIF"] {
            assert!(has_allowed_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn extension_filter_rejects_everything_else() {
        for name in ["a.pdf", "b.svg", "c.exe", "noext", "d.png.txt"] {
            assert!(!has_allowed_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn signature_covers_sorted_params_and_secret() {
        let params = [
            ("timestamp", "1700000000".to_string()),
            ("folder", "banty-car-accessories".to_string()),
        ];
        let sig = sign_params(&params, "secret");

        // Equivalent to hashing the canonical sorted string by hand.
        let mut hasher = Sha256::new();
        hasher.update(b"folder=banty-car-accessories&timestamp=1700000000secret");
        let expected: String = hasher.finalize().iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(sig, expected);
    }

    #[test]
    fn signature_changes_with_secret() {
        let params = [("timestamp", "1".to_string())];
        assert_ne!(sign_params(&params, "a"), sign_params(&params, "b"));
    }

    #[tokio::test]
    async fn upload_all_rejects_mixed_batch_before_network() {
        // base_url points nowhere; an attempted upload would error with
        // a connection failure, not UnsupportedType.
        let uploader = CloudinaryUploader::new(
            CloudinaryConfig::new("demo", "key", "secret")
                .with_base_url("http://127.0.0.1:1/v1_1"),
        );
        let paths = vec![PathBuf::from("ok.jpg"), PathBuf::from("bad.txt")];
        let err = uploader.upload_all(&paths).await.unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType(_)));
    }

    #[tokio::test]
    async fn upload_rejects_unsupported_type_without_reading() {
        let uploader = CloudinaryUploader::new(CloudinaryConfig::new("demo", "key", "secret"));
        let err = uploader.upload(Path::new("/nonexistent/file.txt")).await.unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType(_)));
    }
}
