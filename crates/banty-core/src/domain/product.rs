//! Product entity and the draft type submitted by callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned when the caller supplies none.
pub const DEFAULT_CATEGORY: &str = "General";

/// A persisted catalog entry.
///
/// The catalog is serialized as one JSON array of these, newest first.
/// `id` and `created_at` are assigned at creation time and never change;
/// every other field is overwritten wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Caller-supplied product fields, before validation and normalization.
///
/// Fields arrive as raw multipart text parts, so everything is optional
/// and `price` is still a string at this point.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub tagline: Option<String>,
}

/// Coerce a raw price string to a non-negative number.
///
/// Anything that does not parse as a finite, non-negative number becomes
/// `0.0`. Silently coercing instead of rejecting is a compatibility
/// quirk carried over from the previous backend.
pub fn coerce_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => p,
        _ => 0.0,
    }
}
