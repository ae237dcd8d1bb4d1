//! Visual cell widgets supplied by the host.
//!
//! The editor asks a [`WidgetFactory`] for one widget per cell whenever the
//! grid is (re)built, and pushes state changes to those widgets. Pointer
//! input flows the other way, as [`PointerEvent`](crate::controller::PointerEvent)s
//! fed into the editor.

use crate::cell::CellState;

/// A host-side visual for one cell.
pub trait CellWidget {
    /// Show a new state.
    fn set_visual_state(&mut self, state: CellState);
}

/// Creates widgets for grid cells.
pub trait WidgetFactory {
    type Widget: CellWidget;

    /// Create the widget for cell `(x, y)` showing `state`.
    fn create(&mut self, x: usize, y: usize, state: CellState) -> Self::Widget;
}

/// In-memory widget that just remembers what it was told to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessCell {
    pub x: usize,
    pub y: usize,
    pub visual: CellState,
    /// Number of updates received after creation
    pub updates: usize,
}

impl CellWidget for HeadlessCell {
    fn set_visual_state(&mut self, state: CellState) {
        self.visual = state;
        self.updates += 1;
    }
}

/// Factory for [`HeadlessCell`]s, used when there is no UI to drive.
#[derive(Debug, Default, Clone)]
pub struct HeadlessFactory {
    created: usize,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total widgets created so far, across rebuilds.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl WidgetFactory for HeadlessFactory {
    type Widget = HeadlessCell;

    fn create(&mut self, x: usize, y: usize, state: CellState) -> HeadlessCell {
        self.created += 1;
        HeadlessCell { x, y, visual: state, updates: 0 }
    }
}
