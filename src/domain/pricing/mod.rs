//! Pricing
//!
//! Hourly parking fee plus a fixed service fee.

pub mod model;

pub use model::{
    compute_total, format_amount, BookingHours, CostBreakdown, MAX_DURATION_HOURS,
    MIN_DURATION_HOURS, SERVICE_FEE,
};
