//! Booking entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::pricing::CostBreakdown;
use crate::domain::slot::SlotDescriptor;

/// Phase of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Browsing spots, optionally with one focused
    #[default]
    Browsing,
    /// Slot picker open for the focused spot
    SlotPicking,
    /// Booking confirmed, confirmation on screen
    Confirming,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browsing => "Browsing",
            Self::SlotPicking => "SlotPicking",
            Self::Confirming => "Confirming",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browsing => write!(f, "browsing"),
            Self::SlotPicking => write!(f, "picking a slot"),
            Self::Confirming => write!(f, "confirming"),
        }
    }
}

/// Booking code shown to the driver, e.g. `PW-4K9ZQ1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A confirmed booking. Lives until the confirmation is dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub reference: BookingReference,
    pub spot_id: u32,
    pub spot_name: String,
    pub slot: SlotDescriptor,
    /// Hours booked
    pub duration: u32,
    /// Total including service fee
    pub total_cost: u64,
    pub cost: CostBreakdown,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Scheduled end of the booking
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.created_at + chrono::Duration::hours(i64::from(self.duration))
    }
}
