//! Infrastructure layer - external concerns

pub mod catalog;

pub use catalog::{load_catalog, CatalogError, InMemoryCatalog};
