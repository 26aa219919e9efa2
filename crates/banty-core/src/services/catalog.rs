//! Catalog service - owns the product collection and its invariants.
//!
//! Every mutation is a read-modify-write cycle over the whole catalog:
//! load the sequence, apply one change in memory, persist the sequence
//! back. There is deliberately no lock and no compare-and-swap between
//! overlapping mutations; with two concurrent writers the last write
//! wins and silently discards what it did not observe. That matches the
//! single-admin usage this service is built for and is part of its
//! observable contract.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{DEFAULT_CATEGORY, Product, ProductDraft, coerce_price};
use crate::error::CoreError;
use crate::ports::CatalogRepository;

/// Service for catalog reads and admin-gated mutations.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Create a new catalog service over the given repository.
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// List the full catalog in stored order. Never fails.
    pub async fn list(&self) -> Vec<Product> {
        self.repo.load().await
    }

    /// Create a product and prepend it to the catalog.
    ///
    /// `image_urls` may be empty: a product can start its life without
    /// images. Fails with `Validation` when name or price is missing.
    pub async fn create(
        &self,
        draft: ProductDraft,
        image_urls: Vec<String>,
    ) -> Result<Product, CoreError> {
        let (name, price) = required_fields(&draft)?;

        let product = Product {
            id: next_product_id(),
            name,
            price,
            category: normalized_or(draft.category, DEFAULT_CATEGORY),
            tagline: normalized_or(draft.tagline, ""),
            images: image_urls,
            created_at: Utc::now(),
        };

        let mut products = self.repo.load().await;
        products.insert(0, product.clone());
        self.repo.save(&products).await?;

        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replace every field of an existing product except `id` and
    /// `created_at`, keeping its position in the sequence.
    ///
    /// The resulting image set is `kept_image_urls` followed by
    /// `new_image_urls`; an empty result is rejected, a product that has
    /// had images must keep at least one.
    pub async fn update(
        &self,
        id: &str,
        draft: ProductDraft,
        kept_image_urls: Vec<String>,
        new_image_urls: Vec<String>,
    ) -> Result<Product, CoreError> {
        let (name, price) = required_fields(&draft)?;

        let mut products = self.repo.load().await;
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        let mut images = kept_image_urls;
        images.extend(new_image_urls);
        if images.is_empty() {
            return Err(CoreError::Validation(
                "At least one image is required".to_string(),
            ));
        }

        let existing = &products[idx];
        let updated = Product {
            id: existing.id.clone(),
            name,
            price,
            category: normalized_or(draft.category, DEFAULT_CATEGORY),
            tagline: normalized_or(draft.tagline, ""),
            images,
            created_at: existing.created_at,
        };

        products[idx] = updated.clone();
        self.repo.save(&products).await?;

        tracing::info!(id = %updated.id, "product updated");
        Ok(updated)
    }

    /// Remove a product from the catalog.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let mut products = self.repo.load().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(CoreError::NotFound("Product not found".to_string()));
        }
        self.repo.save(&products).await?;

        tracing::info!(id, "product deleted");
        Ok(())
    }
}

/// Validate presence of name and price, then normalize them.
fn required_fields(draft: &ProductDraft) -> Result<(String, f64), CoreError> {
    let name = draft.name.as_deref().unwrap_or("");
    let price = draft.price.as_deref().unwrap_or("");
    if name.is_empty() || price.is_empty() {
        return Err(CoreError::Validation(
            "name and price are required".to_string(),
        ));
    }
    Ok((name.trim().to_string(), coerce_price(price)))
}

fn normalized_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Generate a catalog-unique product id: millisecond timestamp plus a
/// random suffix so same-millisecond creations cannot collide.
fn next_product_id() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string()[..6].to_string();
    format!("product-{}-{}", Utc::now().timestamp_millis(), suffix)
}
