pub mod booking;
pub mod browsing;

// Re-export key types for convenience
pub use booking::{BookingSnapshot, BookingStateMachine};
pub use browsing::{QuickPick, SpotBrowser, TapOutcome};
