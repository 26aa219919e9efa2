//! Core services orchestrating domain operations over the ports.

mod catalog;

pub use catalog::CatalogService;
