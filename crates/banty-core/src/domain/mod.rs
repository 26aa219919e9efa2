//! Domain types for the catalog and its surrounding workflows.
//!
//! These types are independent of any infrastructure concerns
//! (HTTP, filesystem, external services).

mod enquiry;
mod product;

pub use enquiry::{ContactMessage, Enquiry};
pub use product::{DEFAULT_CATEGORY, Product, ProductDraft, coerce_price};

use serde::{Deserialize, Serialize};

/// An identity confirmed by the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// Email address asserted by the provider.
    pub email: String,
    /// Display name, when the provider supplies one.
    pub name: Option<String>,
}
