//! Spot browsing: filter chips, marker taps and quick booking
//!
//! These are conveniences of the presentation layer built on top of the
//! state machine's `focus_spot` / `unfocus_spot` commands.

use std::sync::Arc;

use tracing::debug;

use crate::application::booking::BookingStateMachine;
use crate::domain::error::BookingResult;
use crate::domain::spot::{SpotCatalog, SpotFilter, SpotRecord};

/// Result of tapping a spot marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Focused(u32),
    Unfocused(u32),
}

/// Result of the quick "book me" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPick {
    /// First matching spot focused
    Focused(u32),
    /// Current filter hides every spot
    NoSpotsMatch,
}

pub struct SpotBrowser {
    catalog: Arc<dyn SpotCatalog>,
    filter: SpotFilter,
}

impl SpotBrowser {
    pub fn new(catalog: Arc<dyn SpotCatalog>) -> Self {
        Self {
            catalog,
            filter: SpotFilter::All,
        }
    }

    pub fn filter(&self) -> SpotFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: SpotFilter) {
        debug!(filter = %filter, "Filter changed");
        self.filter = filter;
    }

    /// Spots visible under the active filter, in catalog order
    pub fn visible_spots(&self) -> Vec<&SpotRecord> {
        self.catalog.filtered(self.filter)
    }

    /// Tap a marker: focus the spot, or release it if it is already focused
    pub fn tap(&self, machine: &mut BookingStateMachine, spot_id: u32) -> BookingResult<TapOutcome> {
        if machine.selected_spot().map(|s| s.id) == Some(spot_id) {
            machine.unfocus_spot()?;
            Ok(TapOutcome::Unfocused(spot_id))
        } else {
            machine.focus_spot(spot_id)?;
            Ok(TapOutcome::Focused(spot_id))
        }
    }

    /// Focus the first spot the active filter shows
    pub fn quick_pick(&self, machine: &mut BookingStateMachine) -> BookingResult<QuickPick> {
        let first = self.visible_spots().first().map(|spot| spot.id);
        match first {
            Some(spot_id) => {
                machine.focus_spot(spot_id)?;
                Ok(QuickPick::Focused(spot_id))
            }
            None => Ok(QuickPick::NoSpotsMatch),
        }
    }
}
