pub mod booking;
pub mod error;
pub mod pricing;
pub mod slot;
pub mod spot;

// Re-export commonly used types
pub use booking::{BookingRecord, BookingReference, Clock, Phase, ReferenceGenerator};
pub use error::{BookingError, BookingResult};
pub use pricing::{compute_total, BookingHours, CostBreakdown, SERVICE_FEE};
pub use slot::{SlotDescriptor, SlotGrid, SlotState};
pub use spot::{AvailabilityLevel, SpotCatalog, SpotFilter, SpotRecord, SpotType};
