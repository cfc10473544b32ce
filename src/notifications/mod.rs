//! Notifications module
//!
//! Broadcasts booking lifecycle events to whoever is listening
//! (the terminal shell logs them).
//!
//! # Usage
//! ```
//! use parkwise::notifications::{BookingEvent, EventBus};
//!
//! let event_bus = EventBus::shared();
//! let mut subscriber = event_bus.subscribe();
//!
//! event_bus.publish(BookingEvent::SpotFocused { spot_id: 1 });
//! assert_eq!(subscriber.try_recv().map(|m| m.event.event_type()), Some("spot_focused"));
//! ```

pub mod event_bus;
pub mod events;

pub use event_bus::{EventBus, EventSubscriber, SharedEventBus};
pub use events::*;
