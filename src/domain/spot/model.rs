//! Parking spot entity

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// At or below this many free places a spot is shown as almost full
pub const ALMOST_FULL_THRESHOLD: u32 = 3;

/// At or below this many free places availability is shown as low
pub const LOW_AVAILABILITY_THRESHOLD: u32 = 8;

/// Feature tag for spots with EV chargers
pub const FEATURE_EV_CHARGING: &str = "EV Charging";

/// Spot construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    Covered,
    Open,
}

impl SpotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Covered => "covered",
            Self::Open => "open",
        }
    }
}

impl std::fmt::Display for SpotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Covered => write!(f, "Covered"),
            Self::Open => write!(f, "Open"),
        }
    }
}

/// Geographic position, used by map-based presentation only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coarse availability classification used for badges and bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityLevel {
    /// Almost full
    Critical,
    /// Filling up
    Low,
    Plenty,
}

impl AvailabilityLevel {
    pub fn from_available(available: u32) -> Self {
        if available <= ALMOST_FULL_THRESHOLD {
            Self::Critical
        } else if available <= LOW_AVAILABILITY_THRESHOLD {
            Self::Low
        } else {
            Self::Plenty
        }
    }
}

/// Record-level invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpot {
    #[error("spot {id}: total capacity must be greater than zero")]
    ZeroCapacity { id: u32 },

    #[error("spot {id}: {available} available exceeds total {total}")]
    AvailableExceedsTotal { id: u32, available: u32, total: u32 },

    #[error("spot {id}: name must not be empty")]
    EmptyName { id: u32 },
}

/// A parking location from the catalog.
///
/// Display fields (`name`, `subtitle`, `distance`, `rating`, `coordinate`)
/// are carried through untouched; the booking core only reads `id`,
/// `price`, `available`, `total`, `spot_type` and `features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub rating: f32,
    /// Price per hour in whole currency units
    pub price: u32,
    pub available: u32,
    pub total: u32,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    #[serde(default)]
    pub features: Vec<String>,
    pub coordinate: Coordinate,
    /// Label of the featured slot shown on the spot card
    #[serde(default)]
    pub slot_number: String,
}

impl SpotRecord {
    /// Check the record invariants: `total > 0` and `available <= total`
    pub fn validate(&self) -> Result<(), InvalidSpot> {
        if self.name.trim().is_empty() {
            return Err(InvalidSpot::EmptyName { id: self.id });
        }
        if self.total == 0 {
            return Err(InvalidSpot::ZeroCapacity { id: self.id });
        }
        if self.available > self.total {
            return Err(InvalidSpot::AvailableExceedsTotal {
                id: self.id,
                available: self.available,
                total: self.total,
            });
        }
        Ok(())
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }

    pub fn availability(&self) -> AvailabilityLevel {
        AvailabilityLevel::from_available(self.available)
    }

    pub fn is_almost_full(&self) -> bool {
        self.availability() == AvailabilityLevel::Critical
    }

    /// Share of free places, 0-100
    pub fn availability_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // available * 100 exceeds u32 on very large lots
        (u64::from(self.available) * 100 / u64::from(self.total)).min(100) as u32
    }
}

#[cfg(test)]
pub(crate) fn sample_spot(id: u32, price: u32, available: u32, total: u32) -> SpotRecord {
    SpotRecord {
        id,
        name: format!("Spot {}", id),
        subtitle: "Test Block".into(),
        distance: "0.4 km".into(),
        rating: 4.5,
        price,
        available,
        total,
        spot_type: SpotType::Covered,
        features: vec!["CCTV".into()],
        coordinate: Coordinate {
            latitude: 31.5204,
            longitude: 74.3587,
        },
        slot_number: "A-01".into(),
    }
}
