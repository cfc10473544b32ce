//! # ParkWise
//!
//! Parking discovery and slot booking core.
//!
//! ## Architecture
//!
//! - **domain**: Spots, slot grid, pricing, booking records and errors
//! - **application**: The booking state machine and spot browsing
//! - **infrastructure**: Spot catalog sources (built-in demo, JSON/TOML files)
//! - **interfaces**: Interactive terminal shell
//! - **notifications**: Booking lifecycle event bus
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use parkwise::domain::{SlotDescriptor, SpotCatalog};
//! use parkwise::{BookingStateMachine, InMemoryCatalog};
//!
//! let catalog: Arc<dyn SpotCatalog> = Arc::new(InMemoryCatalog::demo());
//! let mut machine = BookingStateMachine::new(catalog);
//!
//! machine.focus_spot(1)?;
//! machine.open_slot_picker()?;
//! machine.select_slot(&SlotDescriptor::available(1))?;
//! machine.set_duration(3)?;
//! let booking = machine.confirm_booking()?;
//! assert_eq!(booking.total_cost, 100 * 3 + 20);
//! # Ok::<(), parkwise::domain::BookingError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;
pub mod support;

pub use application::{BookingSnapshot, BookingStateMachine, SpotBrowser};
pub use config::{default_config_path, AppConfig};
pub use infrastructure::{load_catalog, InMemoryCatalog};
pub use notifications::{BookingEvent, EventBus, SharedEventBus};
