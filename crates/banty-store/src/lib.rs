//! Flat-file JSON implementation of the catalog repository.
//!
//! The whole catalog lives in one pretty-printed JSON array that is
//! rewritten wholesale on every mutation. Reads that fail for any
//! reason yield an empty catalog instead of an error.

#![deny(unsafe_code)]

mod location;
mod store;

pub use location::{CATALOG_FILE_NAME, resolve_catalog_path};
pub use store::JsonCatalogStore;
