//! Axum web adapter for the Banty catalog backend.
//!
//! Thin request/response mapping over the core services: routing, CORS,
//! multipart ingestion and error-to-status translation live here,
//! nothing else.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AppContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
