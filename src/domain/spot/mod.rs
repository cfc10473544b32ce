//! Spot aggregate
//!
//! Contains the SpotRecord entity, filter chips, and the catalog interface.

pub mod filter;
pub mod model;
pub mod repository;

pub use filter::{SpotFilter, CHEAP_PRICE_THRESHOLD};
pub use model::{AvailabilityLevel, Coordinate, InvalidSpot, SpotRecord, SpotType};
pub use repository::SpotCatalog;
