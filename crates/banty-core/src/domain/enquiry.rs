//! Customer-facing submission types.
//!
//! Required fields default to empty strings on deserialization so that a
//! missing field surfaces as a validation failure with a stable message,
//! not as a deserialization error.

use serde::Deserialize;

/// A customer enquiry, optionally tied to a specific product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: String,
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
}

/// A legacy contact-form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}
