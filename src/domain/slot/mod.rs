//! Slot grid aggregate

pub mod model;

pub use model::{SlotDescriptor, SlotGrid, SlotState, GRID_CAPACITY, GRID_COLUMNS, GRID_ROWS};
