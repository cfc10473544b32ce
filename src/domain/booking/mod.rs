//! Booking aggregate
//!
//! Contains the booking record, flow phase, and reference generation.

pub mod model;
pub mod reference;

pub use model::{BookingRecord, BookingReference, Phase};
pub use reference::{
    Clock, FixedClock, RandomReferenceGenerator, ReferenceGenerator,
    SequentialReferenceGenerator, SystemClock, DEFAULT_REFERENCE_PREFIX,
};
