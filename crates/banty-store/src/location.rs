//! Startup-time resolution of the catalog file location.
//!
//! Some deployment targets mount the bundled application directory
//! read-only and only allow writes under the OS temp dir. The store
//! itself never branches on the environment; this adapter picks a
//! writable location once, at startup, seeding the scratch copy from the
//! bundled snapshot on first use.

use std::path::{Path, PathBuf};

use tokio::fs;

/// File name of the persisted catalog.
pub const CATALOG_FILE_NAME: &str = "products.json";

/// Pick the path the catalog store should persist to.
///
/// Order: an explicit `override_dir` wins; otherwise the bundled data
/// directory is used when writable; otherwise a scratch directory under
/// the OS temp dir, seeded from the bundled snapshot if one exists.
/// Callers observe no behavioral difference between the locations.
pub async fn resolve_catalog_path(override_dir: Option<&Path>, bundled_dir: &Path) -> PathBuf {
    if let Some(dir) = override_dir {
        let _ = fs::create_dir_all(dir).await;
        return dir.join(CATALOG_FILE_NAME);
    }

    if dir_is_writable(bundled_dir).await {
        return bundled_dir.join(CATALOG_FILE_NAME);
    }

    let scratch = std::env::temp_dir().join("banty").join("data");
    if let Err(err) = fs::create_dir_all(&scratch).await {
        tracing::warn!(path = %scratch.display(), error = %err, "could not create scratch data dir");
    }
    let target = scratch.join(CATALOG_FILE_NAME);

    // Seed the scratch copy from the bundled snapshot on first access.
    if !fs::try_exists(&target).await.unwrap_or(false) {
        let bundled = bundled_dir.join(CATALOG_FILE_NAME);
        if fs::try_exists(&bundled).await.unwrap_or(false) {
            match fs::copy(&bundled, &target).await {
                Ok(_) => {
                    tracing::info!(from = %bundled.display(), to = %target.display(), "seeded catalog scratch copy");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to seed catalog scratch copy");
                }
            }
        }
    }

    tracing::info!(path = %target.display(), "catalog relocated to scratch dir");
    target
}

async fn dir_is_writable(dir: &Path) -> bool {
    if fs::create_dir_all(dir).await.is_err() {
        return false;
    }
    let probe = dir.join(".write-probe");
    match fs::write(&probe, b"").await {
        Ok(()) => {
            let _ = fs::remove_file(&probe).await;
            true
        }
        Err(_) => false,
    }
}
