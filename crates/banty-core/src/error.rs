//! Core error taxonomy.
//!
//! Every externally-facing operation maps its failure into one of these
//! categories; adapters translate them to transport-level outcomes
//! (HTTP status codes) at the boundary.

use thiserror::Error;

use crate::ports::{IdentityError, MailError, MediaError, RepositoryError};

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing caller input.
    #[error("{0}")]
    Validation(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The identity assertion is missing, invalid or expired.
    #[error("{0}")]
    Auth(String),

    /// Valid identity, but not privileged for this operation.
    #[error("{0}")]
    Forbidden(String),

    /// The media host failed to accept an upload.
    #[error("{0}")]
    Upload(String),

    /// The mail relay failed to accept a message.
    #[error("{0}")]
    Delivery(String),

    /// The catalog storage backend failed.
    #[error("{0}")]
    Storage(String),

    /// Anything unexpected.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Storage(msg) => CoreError::Storage(msg),
            RepositoryError::Serialization(msg) => CoreError::Storage(msg),
        }
    }
}

impl From<IdentityError> for CoreError {
    fn from(err: IdentityError) -> Self {
        // Both variants mean the caller is unauthenticated.
        CoreError::Auth(err.to_string())
    }
}

impl From<MediaError> for CoreError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::UnsupportedType(msg) => CoreError::Validation(msg),
            MediaError::Upload(msg) => CoreError::Upload(msg),
        }
    }
}

impl From<MailError> for CoreError {
    fn from(err: MailError) -> Self {
        CoreError::Delivery(err.to_string())
    }
}
