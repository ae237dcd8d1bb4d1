//! Per-cell state for the sprite grid.
//!
//! A cell is either committed (`Off` / `On`) or showing a transient line
//! preview. The preview variant carries the committed value it covers, so a
//! preview can always be resolved without a side channel.

use serde::{Deserialize, Serialize};

/// A committed cell value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelValue {
    /// Unlit
    #[default]
    Off,
    /// Lit
    On,
}

impl PixelValue {
    /// The opposite value.
    pub fn flipped(self) -> Self {
        match self {
            PixelValue::Off => PixelValue::On,
            PixelValue::On => PixelValue::Off,
        }
    }
}

impl From<bool> for PixelValue {
    fn from(lit: bool) -> Self {
        if lit {
            PixelValue::On
        } else {
            PixelValue::Off
        }
    }
}

impl From<PixelValue> for bool {
    fn from(value: PixelValue) -> Self {
        value == PixelValue::On
    }
}

/// What a cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Off,
    On,
    /// Covered by an in-progress line stroke. Holds the committed value
    /// underneath.
    Preview(PixelValue),
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Off
    }
}

impl From<PixelValue> for CellState {
    fn from(value: PixelValue) -> Self {
        match value {
            PixelValue::Off => CellState::Off,
            PixelValue::On => CellState::On,
        }
    }
}

/// One addressable unit of the sprite grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
    previous: PixelValue,
}

impl Cell {
    /// Create a cell holding a committed value.
    pub fn new(value: PixelValue) -> Self {
        Self { state: value.into(), previous: value }
    }

    /// Current state, including previews.
    pub fn state(&self) -> CellState {
        self.state
    }

    /// The committed value held before the current state.
    pub fn previous(&self) -> PixelValue {
        self.previous
    }

    /// Committed value of the cell. A preview reads as the value it covers.
    pub fn value(&self) -> PixelValue {
        match self.state {
            CellState::Off => PixelValue::Off,
            CellState::On => PixelValue::On,
            CellState::Preview(under) => under,
        }
    }

    /// Whether the cell is drawn lit right now. A preview shows as a
    /// preview even over a lit cell; use [`Cell::value`] for the committed
    /// value.
    pub fn shows_on(&self) -> bool {
        self.state == CellState::On
    }

    pub fn is_preview(&self) -> bool {
        matches!(self.state, CellState::Preview(_))
    }

    /// Commit a value, remembering the previous committed one.
    pub fn set_state(&mut self, value: PixelValue) {
        self.previous = self.value();
        self.state = value.into();
    }

    /// Flip the cell. A preview counts as "not yet on", so it commits on.
    pub fn toggle_state(&mut self) {
        let target = match self.state {
            CellState::On => PixelValue::Off,
            CellState::Off | CellState::Preview(_) => PixelValue::On,
        };
        self.set_state(target);
    }

    /// Show the cell as part of a line preview.
    pub fn mark_preview(&mut self) {
        if self.is_preview() {
            return;
        }
        let current = self.value();
        self.previous = current;
        self.state = CellState::Preview(current);
    }

    /// Return to the committed value held before the current state.
    pub fn revert_to_previous(&mut self) {
        self.state = self.previous.into();
    }

    /// Drop a preview mark, restoring the covered value. Committed cells are
    /// left alone.
    pub fn clear_preview(&mut self) {
        if let CellState::Preview(under) = self.state {
            self.state = under.into();
        }
    }
}
