//! Catalog persistence port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Product;

/// Errors from the catalog storage backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, permissions, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization of the catalog failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository for the persisted catalog.
///
/// The catalog is one unit of persistence: implementations read and
/// write the entire ordered sequence, never individual records.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the full catalog in stored order.
    ///
    /// Reads never fail: a missing or unparseable backing store yields
    /// an empty catalog. Availability is traded for durability
    /// strictness here, by contract.
    async fn load(&self) -> Vec<Product>;

    /// Replace the persisted catalog with `products`.
    ///
    /// The write must be atomic at whatever granularity the backing
    /// store allows; a reader must never observe a half-written
    /// catalog.
    async fn save(&self, products: &[Product]) -> Result<(), RepositoryError>;
}
