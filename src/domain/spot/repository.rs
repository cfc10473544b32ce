//! Spot catalog interface

use super::filter::SpotFilter;
use super::model::SpotRecord;

/// Read-only, ordered source of parking spots.
///
/// Loaded once at startup; nothing in the booking core mutates it.
pub trait SpotCatalog: Send + Sync {
    /// All spots in catalog order
    fn spots(&self) -> &[SpotRecord];

    /// Find a spot by ID
    fn find_by_id(&self, id: u32) -> Option<&SpotRecord> {
        self.spots().iter().find(|spot| spot.id == id)
    }

    /// Spots matching a filter chip, in catalog order
    fn filtered(&self, filter: SpotFilter) -> Vec<&SpotRecord> {
        self.spots().iter().filter(|spot| filter.matches(spot)).collect()
    }

    fn len(&self) -> usize {
        self.spots().len()
    }

    fn is_empty(&self) -> bool {
        self.spots().is_empty()
    }
}
