//! Parking cost calculation

use serde::{Deserialize, Serialize};

use crate::domain::error::{BookingError, BookingResult};

/// Flat fee added to every booking, in whole currency units
pub const SERVICE_FEE: u64 = 20;

/// Shortest bookable duration in hours
pub const MIN_DURATION_HOURS: u32 = 1;

/// Longest bookable duration in hours
pub const MAX_DURATION_HOURS: u32 = 12;

/// A duration within the bookable range.
///
/// The 1-12 hour bound lives here only: the picker builds values with
/// [`BookingHours::clamped`], raw input goes through [`BookingHours::new`].
/// Pricing takes a `BookingHours` and never checks the range again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct BookingHours(u32);

impl BookingHours {
    pub const MIN: Self = Self(MIN_DURATION_HOURS);
    pub const MAX: Self = Self(MAX_DURATION_HOURS);

    /// Reject durations outside the bookable range
    pub fn new(hours: i64) -> BookingResult<Self> {
        if (i64::from(MIN_DURATION_HOURS)..=i64::from(MAX_DURATION_HOURS)).contains(&hours) {
            Ok(Self(hours as u32))
        } else {
            Err(BookingError::InvalidDuration(hours))
        }
    }

    /// Pull any requested duration into the bookable range
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(i64::from(MIN_DURATION_HOURS), i64::from(MAX_DURATION_HOURS)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BookingHours {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for BookingHours {
    type Error = BookingError;

    fn try_from(hours: i64) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<BookingHours> for u32 {
    fn from(hours: BookingHours) -> Self {
        hours.0
    }
}

/// Total cost: `unit_price * hours + SERVICE_FEE`
///
/// # Arguments
/// * `unit_price` - Price per hour
/// * `hours` - Duration, must be within 1-12
pub fn compute_total(unit_price: u32, hours: u32) -> BookingResult<u64> {
    let hours = BookingHours::new(i64::from(hours))?;
    Ok(CostBreakdown::calculate(unit_price, hours).total)
}

/// Itemised cost of a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub unit_price: u32,
    pub hours: u32,
    pub parking_fee: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl CostBreakdown {
    pub fn calculate(unit_price: u32, hours: BookingHours) -> Self {
        let parking_fee = u64::from(unit_price) * u64::from(hours.get());
        Self {
            unit_price,
            hours: hours.get(),
            parking_fee,
            service_fee: SERVICE_FEE,
            total: parking_fee + SERVICE_FEE,
        }
    }

    pub fn format_total(&self, currency: &str) -> String {
        format_amount(self.total, currency)
    }
}

/// Format an amount as "320 PKR"
pub fn format_amount(amount: u64, currency: &str) -> String {
    format!("{} {}", amount, currency)
}
