//! Booking lifecycle events
//!
//! Published by the booking controller after each successful transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::booking::BookingReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BookingEvent {
    /// A spot was focused on the map
    SpotFocused { spot_id: u32 },
    /// The focused spot was released
    SpotUnfocused { spot_id: u32 },
    /// Slot picker opened for a spot
    SlotPickerOpened { spot_id: u32 },
    /// Slot picker closed without booking
    SlotPickerCancelled { spot_id: u32 },
    /// A slot was chosen in the picker
    SlotSelected { spot_id: u32, slot_id: String },
    /// Duration changed in the picker
    DurationChanged { spot_id: u32, hours: u32 },
    /// Booking confirmed
    BookingConfirmed(BookingConfirmedEvent),
    /// Confirmation dismissed, flow reset
    ConfirmationDismissed { reference: BookingReference },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmedEvent {
    pub reference: BookingReference,
    pub spot_id: u32,
    pub slot_id: String,
    pub hours: u32,
    pub total_cost: u64,
}

impl BookingEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            BookingEvent::SpotFocused { .. } => "spot_focused",
            BookingEvent::SpotUnfocused { .. } => "spot_unfocused",
            BookingEvent::SlotPickerOpened { .. } => "slot_picker_opened",
            BookingEvent::SlotPickerCancelled { .. } => "slot_picker_cancelled",
            BookingEvent::SlotSelected { .. } => "slot_selected",
            BookingEvent::DurationChanged { .. } => "duration_changed",
            BookingEvent::BookingConfirmed(_) => "booking_confirmed",
            BookingEvent::ConfirmationDismissed { .. } => "confirmation_dismissed",
        }
    }

    /// Get the spot ID if applicable
    pub fn spot_id(&self) -> Option<u32> {
        match self {
            BookingEvent::SpotFocused { spot_id }
            | BookingEvent::SpotUnfocused { spot_id }
            | BookingEvent::SlotPickerOpened { spot_id }
            | BookingEvent::SlotPickerCancelled { spot_id }
            | BookingEvent::SlotSelected { spot_id, .. }
            | BookingEvent::DurationChanged { spot_id, .. } => Some(*spot_id),
            BookingEvent::BookingConfirmed(e) => Some(e.spot_id),
            BookingEvent::ConfirmationDismissed { .. } => None,
        }
    }
}

/// Event with publication timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub event: BookingEvent,
    pub timestamp: DateTime<Utc>,
}

impl EventMessage {
    pub fn new(event: BookingEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let msg = EventMessage::new(BookingEvent::SlotSelected {
            spot_id: 3,
            slot_id: "04".into(),
        });
        let json = msg.to_json().expect("serializable");
        assert!(json.contains(r#""type":"SlotSelected""#));
        assert!(json.contains(r#""slot_id":"04""#));
    }

    #[test]
    fn spot_id_accessor() {
        let confirmed = BookingEvent::BookingConfirmed(BookingConfirmedEvent {
            reference: BookingReference::new("PW-000001"),
            spot_id: 9,
            slot_id: "01".into(),
            hours: 2,
            total_cost: 220,
        });
        assert_eq!(confirmed.spot_id(), Some(9));
        assert_eq!(confirmed.event_type(), "booking_confirmed");

        let dismissed = BookingEvent::ConfirmationDismissed {
            reference: BookingReference::new("PW-000001"),
        };
        assert_eq!(dismissed.spot_id(), None);
    }
}
