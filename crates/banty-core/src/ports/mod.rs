//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No reqwest/lettre/filesystem types in any signature
//! - One error enum per collaborator, mapped to `CoreError` at the seam
//! - Repository traits stay CRUD-shaped

pub mod catalog;
pub mod identity;
pub mod mailer;
pub mod media;

pub use catalog::{CatalogRepository, RepositoryError};
pub use identity::{IdentityError, IdentityVerifier};
pub use mailer::{MailError, Mailer};
pub use media::{MediaError, MediaHost};
