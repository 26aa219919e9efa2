#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod notify;
pub mod policy;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{ContactMessage, Enquiry, Product, ProductDraft, VerifiedIdentity};
pub use error::CoreError;
pub use notify::Notifier;
pub use policy::AdminPolicy;
pub use ports::{
    CatalogRepository, IdentityError, IdentityVerifier, MailError, Mailer, MediaError, MediaHost,
    RepositoryError,
};
pub use services::CatalogService;
pub use settings::Settings;
