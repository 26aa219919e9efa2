//! The JSON-file catalog store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use banty_core::domain::Product;
use banty_core::ports::{CatalogRepository, RepositoryError};

/// Catalog repository backed by a single JSON file.
///
/// There is no locking between writers: overlapping save calls are
/// last-writer-wins, which is the documented contract of the catalog
/// store. Each save writes to a sibling temp file first and renames it
/// into place so readers never see a partial document.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Create a store persisting to `path`. The file need not exist yet;
    /// the catalog materializes as empty on first read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "products.json".into(), std::ffi::OsStr::to_os_string);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogStore {
    async fn load(&self) -> Vec<Product> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "catalog file unreadable, treating as empty");
                }
                return Vec::new();
            }
        };
        match serde_json::from_slice::<Vec<Product>>(&bytes) {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "catalog file unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(products)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Floor Mat".to_string(),
            price: 499.0,
            category: "Interior".to_string(),
            tagline: String::new(),
            images: vec!["https://cdn.example/mat.jpg".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("products.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("products.json"));

        let products = vec![product("p2"), product("p1")];
        store.save(&products).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, products);

        // Listing twice without a mutation is identical
        assert_eq!(store.load().await, loaded);
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = JsonCatalogStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn non_array_document_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, br#"{"products": []}"#).unwrap();

        let store = JsonCatalogStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("products.json");

        let store = JsonCatalogStore::new(&path);
        store.save(&[product("p1")]).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("products.json"));
        store.save(&[product("p1")]).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["products.json".to_string()]);
    }

    #[tokio::test]
    async fn saved_file_is_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        let store = JsonCatalogStore::new(&path);
        store.save(&[product("p1")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "p1");
        assert!(value[0]["createdAt"].is_string());
    }
}
