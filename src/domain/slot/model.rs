//! Slot grid for a parking spot

use serde::{Deserialize, Serialize};

use crate::domain::spot::SpotRecord;

/// Rows in the slot layout
pub const GRID_ROWS: usize = 4;

/// Columns in the slot layout
pub const GRID_COLUMNS: usize = 5;

/// Total positions; capacity above this is not representable
pub const GRID_CAPACITY: usize = GRID_ROWS * GRID_COLUMNS;

const ROW_LABELS: [char; GRID_ROWS] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Available,
    Occupied,
    /// Position beyond the spot's capacity; never selectable
    Disabled,
}

impl SlotState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for SlotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One position in the slot grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotDescriptor {
    /// Display id: "01".."20" for real slots, the bare position for disabled ones
    pub id: String,
    /// 1-based row-major position
    pub number: u8,
    pub state: SlotState,
}

impl SlotDescriptor {
    pub fn available(number: u8) -> Self {
        Self {
            id: format!("{:02}", number),
            number,
            state: SlotState::Available,
        }
    }

    pub fn disabled(number: u8) -> Self {
        Self {
            id: number.to_string(),
            number,
            state: SlotState::Disabled,
        }
    }

    fn at(row: usize, col: usize, capacity: u32) -> Self {
        let number = (row * GRID_COLUMNS + col + 1) as u8;
        if u32::from(number) > capacity {
            Self::disabled(number)
        } else {
            Self::available(number)
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == SlotState::Available
    }

    /// Zero-based (row, column) of this slot
    pub fn position(&self) -> (usize, usize) {
        let index = usize::from(self.number.saturating_sub(1));
        (index / GRID_COLUMNS, index % GRID_COLUMNS)
    }

    /// Row letter, A for the row nearest the entrance
    pub fn row_label(&self) -> char {
        SlotGrid::row_label(self.position().0).unwrap_or('?')
    }
}

/// Fixed 4×5 layout of slots, derived from a spot's capacity alone.
///
/// The grid does not consult the spot's `available` counter: every
/// position up to `total` is rendered available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    rows: [[SlotDescriptor; GRID_COLUMNS]; GRID_ROWS],
}

impl SlotGrid {
    /// Build the grid for a spot
    pub fn for_spot(spot: &SpotRecord) -> Self {
        Self::with_capacity(spot.total)
    }

    /// Build the grid for a given capacity; positions past it are disabled
    pub fn with_capacity(capacity: u32) -> Self {
        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| SlotDescriptor::at(row, col, capacity))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[[SlotDescriptor; GRID_COLUMNS]; GRID_ROWS] {
        &self.rows
    }

    /// Slots in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &SlotDescriptor> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&SlotDescriptor> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Look up a slot by its display id. Accepts unpadded numbers ("7" finds "07").
    pub fn find(&self, id: &str) -> Option<&SlotDescriptor> {
        let id = id.trim();
        match id.parse::<u8>() {
            Ok(number) => self.iter().find(|slot| slot.number == number),
            Err(_) => self.iter().find(|slot| slot.id == id),
        }
    }

    pub fn count(&self, state: SlotState) -> usize {
        self.iter().filter(|slot| slot.state == state).count()
    }

    pub fn row_label(row: usize) -> Option<char> {
        ROW_LABELS.get(row).copied()
    }
}
