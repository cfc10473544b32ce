//! In-memory spot catalog

use std::collections::HashSet;

use tracing::debug;

use super::seed::demo_spots;
use super::CatalogError;
use crate::domain::spot::{SpotCatalog, SpotRecord};

/// Ordered, validated, immutable list of spots
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    spots: Vec<SpotRecord>,
}

impl InMemoryCatalog {
    /// Validate every record and reject duplicate ids
    pub fn new(spots: Vec<SpotRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(spots.len());
        for spot in &spots {
            spot.validate()?;
            if !seen.insert(spot.id) {
                return Err(CatalogError::DuplicateId(spot.id));
            }
        }
        debug!(spots = spots.len(), "Catalog built");
        Ok(Self { spots })
    }

    /// Built-in demo catalog
    pub fn demo() -> Self {
        Self { spots: demo_spots() }
    }
}

impl SpotCatalog for InMemoryCatalog {
    fn spots(&self) -> &[SpotRecord] {
        &self.spots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spot::model::sample_spot;
    use crate::domain::spot::{InvalidSpot, SpotFilter};

    #[test]
    fn keeps_catalog_order() {
        let catalog = InMemoryCatalog::new(vec![
            sample_spot(3, 100, 5, 12),
            sample_spot(1, 100, 5, 12),
            sample_spot(2, 100, 5, 12),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.spots().iter().map(|s| s.id).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(catalog.find_by_id(1).map(|s| s.id), Some(1));
        assert!(catalog.find_by_id(9).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = InMemoryCatalog::new(vec![sample_spot(1, 100, 5, 12), sample_spot(1, 80, 2, 6)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_invalid_records() {
        let err = InMemoryCatalog::new(vec![sample_spot(4, 100, 0, 0)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidSpot(InvalidSpot::ZeroCapacity { id: 4 })
        ));
    }

    #[test]
    fn demo_catalog_is_valid() {
        let demo = InMemoryCatalog::demo();
        assert!(!demo.is_empty());
        assert!(InMemoryCatalog::new(demo.spots().to_vec()).is_ok());
        // Every chip shows something in the demo data
        for filter in SpotFilter::ALL {
            assert!(!demo.filtered(filter).is_empty(), "{} is empty", filter);
        }
    }
}
