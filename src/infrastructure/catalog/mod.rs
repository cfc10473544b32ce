//! Spot catalog sources

mod loader;
mod memory;
mod seed;

use thiserror::Error;

use crate::domain::spot::InvalidSpot;

pub use loader::load_catalog;
pub use memory::InMemoryCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid spot: {0}")]
    InvalidSpot(#[from] InvalidSpot),

    #[error("Duplicate spot id {0}")]
    DuplicateId(u32),

    #[error("Catalog {0} contains no spots")]
    Empty(String),
}
