//! Booking state machine
//!
//! Owns the transient selection state of the booking flow and is the only
//! place it can change. The presentation layer issues commands and reads
//! snapshots; it never touches the fields directly.
//!
//! ```text
//!   Browsing ──open_slot_picker──▶ SlotPicking ──confirm_booking──▶ Confirming
//!      ▲                               │                               │
//!      └────────cancel_slot_picker─────┘                               │
//!      └────────────────────dismiss_confirmation───────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::booking::{
    BookingRecord, Clock, Phase, RandomReferenceGenerator, ReferenceGenerator, SystemClock,
};
use crate::domain::error::{BookingError, BookingResult};
use crate::domain::pricing::{compute_total, BookingHours, CostBreakdown};
use crate::domain::slot::{SlotDescriptor, SlotGrid};
use crate::domain::spot::{SpotCatalog, SpotRecord};
use crate::notifications::{BookingConfirmedEvent, BookingEvent, SharedEventBus};

/// Mutable selection state, private to the state machine
#[derive(Debug, Clone, Default)]
struct SelectionState {
    phase: Phase,
    selected_spot: Option<u32>,
    selected_slot: Option<SlotDescriptor>,
    duration: BookingHours,
    booking: Option<BookingRecord>,
}

/// Read-only view of the booking flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSnapshot {
    pub phase: Phase,
    pub selected_spot: Option<SpotRecord>,
    pub selected_slot: Option<SlotDescriptor>,
    pub duration: u32,
    pub booking: Option<BookingRecord>,
}

pub struct BookingStateMachine {
    catalog: Arc<dyn SpotCatalog>,
    references: Arc<dyn ReferenceGenerator>,
    clock: Arc<dyn Clock>,
    events: Option<SharedEventBus>,
    state: SelectionState,
}

impl BookingStateMachine {
    /// Create a state machine in `Browsing` with no spot focused
    pub fn new(catalog: Arc<dyn SpotCatalog>) -> Self {
        Self {
            catalog,
            references: Arc::new(RandomReferenceGenerator::default()),
            clock: Arc::new(SystemClock),
            events: None,
            state: SelectionState::default(),
        }
    }

    pub fn with_reference_generator(mut self, references: Arc<dyn ReferenceGenerator>) -> Self {
        self.references = references;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_event_bus(mut self, events: SharedEventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn current_state(&self) -> BookingSnapshot {
        BookingSnapshot {
            phase: self.state.phase,
            selected_spot: self.selected_spot().cloned(),
            selected_slot: self.state.selected_slot.clone(),
            duration: self.state.duration.get(),
            booking: self.state.booking.clone(),
        }
    }

    pub fn selected_spot(&self) -> Option<&SpotRecord> {
        self.state
            .selected_spot
            .and_then(|id| self.catalog.find_by_id(id))
    }

    pub fn booking(&self) -> Option<&BookingRecord> {
        self.state.booking.as_ref()
    }

    /// Slot grid for any spot
    pub fn slot_grid(spot: &SpotRecord) -> SlotGrid {
        SlotGrid::for_spot(spot)
    }

    /// Total for a spot and duration, service fee included
    pub fn estimated_total(spot: &SpotRecord, hours: u32) -> BookingResult<u64> {
        compute_total(spot.price, hours)
    }

    /// Cost of the current picker selection, if a spot is focused
    pub fn current_estimate(&self) -> Option<CostBreakdown> {
        let spot = self.selected_spot()?;
        Some(CostBreakdown::calculate(spot.price, self.state.duration))
    }

    // ── Commands ───────────────────────────────────────────────

    /// Focus a catalog spot. Re-focusing the focused spot changes nothing.
    pub fn focus_spot(&mut self, spot_id: u32) -> BookingResult<()> {
        self.require_phase(Phase::Browsing, "focus a spot")?;

        if self.catalog.find_by_id(spot_id).is_none() {
            return Err(self.reject(BookingError::SpotNotFound(spot_id)));
        }
        if self.state.selected_spot == Some(spot_id) {
            return Ok(());
        }

        self.state.selected_spot = Some(spot_id);
        debug!(spot_id, "Spot focused");
        self.publish(BookingEvent::SpotFocused { spot_id });
        Ok(())
    }

    pub fn unfocus_spot(&mut self) -> BookingResult<()> {
        self.require_phase(Phase::Browsing, "unfocus a spot")?;

        if let Some(spot_id) = self.state.selected_spot.take() {
            debug!(spot_id, "Spot unfocused");
            self.publish(BookingEvent::SpotUnfocused { spot_id });
        }
        Ok(())
    }

    pub fn open_slot_picker(&mut self) -> BookingResult<()> {
        self.require_phase(Phase::Browsing, "open the slot picker")?;

        let spot_id = match self.state.selected_spot {
            Some(id) => id,
            None => return Err(self.reject(BookingError::NoSpotSelected)),
        };

        self.state.phase = Phase::SlotPicking;
        debug!(spot_id, "Slot picker opened");
        self.publish(BookingEvent::SlotPickerOpened { spot_id });
        Ok(())
    }

    /// Choose a slot on the focused spot's grid, replacing any prior choice
    pub fn select_slot(&mut self, slot: &SlotDescriptor) -> BookingResult<()> {
        self.require_phase(Phase::SlotPicking, "select a slot")?;
        let spot = self.focused_spot()?;
        let spot_id = spot.id;

        let grid = SlotGrid::for_spot(spot);
        let on_grid = grid
            .find(&slot.id)
            .filter(|s| s.number == slot.number && s.is_available())
            .cloned();
        let chosen = match on_grid {
            Some(chosen) if slot.is_available() => chosen,
            _ => return Err(self.reject(BookingError::SlotNotAvailable(slot.id.clone()))),
        };

        debug!(spot_id, slot_id = %chosen.id, "Slot selected");
        self.publish(BookingEvent::SlotSelected {
            spot_id,
            slot_id: chosen.id.clone(),
        });
        self.state.selected_slot = Some(chosen);
        Ok(())
    }

    /// Set the duration, clamped to 1-12 hours. Returns the stored value.
    pub fn set_duration(&mut self, hours: i64) -> BookingResult<u32> {
        self.require_phase(Phase::SlotPicking, "change the duration")?;
        let spot_id = self.focused_spot()?.id;

        let clamped = BookingHours::clamped(hours);
        if clamped != self.state.duration {
            self.state.duration = clamped;
            debug!(spot_id, requested = hours, hours = clamped.get(), "Duration changed");
            self.publish(BookingEvent::DurationChanged {
                spot_id,
                hours: clamped.get(),
            });
        }
        Ok(clamped.get())
    }

    pub fn increment_duration(&mut self) -> BookingResult<u32> {
        let next = i64::from(self.state.duration.get()) + 1;
        self.set_duration(next)
    }

    pub fn decrement_duration(&mut self) -> BookingResult<u32> {
        let next = i64::from(self.state.duration.get()) - 1;
        self.set_duration(next)
    }

    /// Close the picker without booking. The spot stays focused.
    pub fn cancel_slot_picker(&mut self) -> BookingResult<()> {
        self.require_phase(Phase::SlotPicking, "cancel the slot picker")?;

        self.state.selected_slot = None;
        self.state.duration = BookingHours::MIN;
        self.state.phase = Phase::Browsing;

        if let Some(spot_id) = self.state.selected_spot {
            debug!(spot_id, "Slot picker cancelled");
            self.publish(BookingEvent::SlotPickerCancelled { spot_id });
        }
        Ok(())
    }

    pub fn confirm_booking(&mut self) -> BookingResult<BookingRecord> {
        self.require_phase(Phase::SlotPicking, "confirm a booking")?;

        let slot = match self.state.selected_slot.clone() {
            Some(slot) => slot,
            None => return Err(self.reject(BookingError::NoSlotSelected)),
        };
        let spot = self.focused_spot()?;
        let cost = CostBreakdown::calculate(spot.price, self.state.duration);

        let record = BookingRecord {
            reference: self.references.generate(),
            spot_id: spot.id,
            spot_name: spot.name.clone(),
            slot,
            duration: self.state.duration.get(),
            total_cost: cost.total,
            cost,
            created_at: self.clock.now(),
        };

        info!(
            reference = %record.reference,
            spot_id = record.spot_id,
            slot_id = %record.slot.id,
            hours = record.duration,
            total_cost = record.total_cost,
            "Booking confirmed"
        );
        self.publish(BookingEvent::BookingConfirmed(BookingConfirmedEvent {
            reference: record.reference.clone(),
            spot_id: record.spot_id,
            slot_id: record.slot.id.clone(),
            hours: record.duration,
            total_cost: record.total_cost,
        }));

        self.state.booking = Some(record.clone());
        self.state.phase = Phase::Confirming;
        Ok(record)
    }

    /// Close the confirmation and reset the whole flow to `Browsing`
    pub fn dismiss_confirmation(&mut self) -> BookingResult<()> {
        self.require_phase(Phase::Confirming, "dismiss the confirmation")?;

        let booking = self.state.booking.take();
        self.state = SelectionState::default();

        if let Some(booking) = booking {
            info!(reference = %booking.reference, "Confirmation dismissed");
            self.publish(BookingEvent::ConfirmationDismissed {
                reference: booking.reference,
            });
        }
        Ok(())
    }

    // ── Helpers ────────────────────────────────────────────────

    fn require_phase(&self, expected: Phase, command: &'static str) -> BookingResult<()> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(self.reject(BookingError::InvalidStateTransition {
                command,
                phase: self.state.phase,
            }))
        }
    }

    fn focused_spot(&self) -> BookingResult<&SpotRecord> {
        let spot_id = self
            .state
            .selected_spot
            .ok_or(BookingError::NoSpotSelected)
            .map_err(|e| self.reject(e))?;
        self.catalog
            .find_by_id(spot_id)
            .ok_or_else(|| self.reject(BookingError::SpotNotFound(spot_id)))
    }

    fn reject(&self, error: BookingError) -> BookingError {
        warn!(phase = %self.state.phase, %error, "Booking command rejected");
        error
    }

    fn publish(&self, event: BookingEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}
