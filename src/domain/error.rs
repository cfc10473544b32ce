//! Domain errors

use thiserror::Error;

use crate::domain::booking::Phase;

/// Errors raised by booking commands and pricing.
///
/// Every variant is recoverable: a failed command leaves the selection
/// state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Command is not allowed in the current phase
    #[error("Cannot {command} while {phase}")]
    InvalidStateTransition {
        command: &'static str,
        phase: Phase,
    },

    /// Slot picker requested without a focused spot
    #[error("No parking spot selected")]
    NoSpotSelected,

    /// Slot is occupied, disabled or not part of the grid
    #[error("Slot {0} is not available")]
    SlotNotAvailable(String),

    /// Confirmation requested before choosing a slot
    #[error("No slot selected")]
    NoSlotSelected,

    /// Duration outside the bookable range
    #[error("Invalid duration: {0}h (allowed 1-12h)")]
    InvalidDuration(i64),

    /// Spot id is not present in the catalog
    #[error("Parking spot not found: {0}")]
    SpotNotFound(u32),
}

impl BookingError {
    /// Whether the error is a normal user mistake the shell should prompt
    /// for, as opposed to a command issued out of sequence.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, BookingError::NoSlotSelected)
    }
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
