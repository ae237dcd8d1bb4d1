//! Editor session: one sprite being edited.
//!
//! Owns the grid, the drawing controller and the host's cell widgets, and
//! keeps the widgets in sync with the grid after every change. Whole-grid
//! actions (resize, rotate, invert, import) cancel any stroke in progress
//! before they run.

use log::debug;

use crate::cell::CellState;
use crate::controller::{DrawingController, PointerEvent, Tool};
use crate::grid::{Grid, GridError};
use crate::naming::next_sprite_name;
use crate::record::{RecordError, SpriteRecord};
use crate::widget::{CellWidget, WidgetFactory};

/// Callbacks fired for actions the editor shell handles.
///
/// All methods default to doing nothing.
pub trait EditorHooks {
    fn on_delete(&mut self) {}
    fn on_duplicate(&mut self, _record: SpriteRecord) {}
    fn on_new(&mut self) {}
    fn on_export(&mut self, _record: &SpriteRecord) {}
    fn on_import(&mut self, _record: &SpriteRecord) {}
}

/// Hooks that ignore every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl EditorHooks for NoHooks {}

/// A widget plus the last state pushed to it.
struct Slot<W> {
    widget: W,
    shown: CellState,
}

pub struct Editor<F: WidgetFactory, H: EditorHooks = NoHooks> {
    name: String,
    pixel_size: u32,
    grid: Grid,
    controller: DrawingController,
    factory: F,
    hooks: H,
    slots: Vec<Slot<F::Widget>>,
}

impl<F: WidgetFactory, H: EditorHooks> Editor<F, H> {
    /// Start editing a blank sprite.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        pixel_size: u32,
        factory: F,
        hooks: H,
    ) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?;
        Ok(Self::with_grid(name.into(), grid, pixel_size, factory, hooks))
    }

    /// Start editing an existing record.
    pub fn from_record(record: &SpriteRecord, factory: F, hooks: H) -> Result<Self, RecordError> {
        let grid = record.import()?;
        Ok(Self::with_grid(record.name.clone(), grid, record.pixel_size, factory, hooks))
    }

    fn with_grid(name: String, grid: Grid, pixel_size: u32, factory: F, hooks: H) -> Self {
        let mut editor = Self {
            name,
            pixel_size,
            grid,
            controller: DrawingController::default(),
            factory,
            hooks,
            slots: Vec::new(),
        };
        editor.rebuild_widgets();
        editor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn set_pixel_size(&mut self, pixel_size: u32) {
        self.pixel_size = pixel_size;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn tool(&self) -> Tool {
        self.controller.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.controller.set_tool(tool);
    }

    /// Whether a line stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.controller.is_active()
    }

    /// Widgets in row-major order.
    pub fn widgets(&self) -> impl Iterator<Item = &F::Widget> + '_ {
        self.slots.iter().map(|s| &s.widget)
    }

    pub fn widget(&self, x: usize, y: usize) -> Option<&F::Widget> {
        if x < self.grid.width() && y < self.grid.height() {
            self.slots.get(y * self.grid.width() + x).map(|s| &s.widget)
        } else {
            None
        }
    }

    /// Feed one pointer event from the host.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let changed = self.controller.handle(&mut self.grid, event);
        if changed {
            self.sync_widgets();
        }
        changed
    }

    /// Replace the grid with an empty one of the new size.
    ///
    /// Returns the number of lit cells discarded.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<usize, GridError> {
        // A bad size leaves the grid and the stroke as they were
        let discarded = self.grid.resize(width, height)?;
        self.controller.cancel();
        self.rebuild_widgets();
        Ok(discarded)
    }

    pub fn rotate_left(&mut self) {
        self.settle();
        self.grid.rotate_left();
        self.rebuild_widgets();
    }

    pub fn rotate_right(&mut self) {
        self.settle();
        self.grid.rotate_right();
        self.rebuild_widgets();
    }

    pub fn invert(&mut self) {
        self.settle();
        self.grid.invert();
        self.sync_widgets();
    }

    /// Snapshot the sprite and notify the export hook.
    pub fn export(&mut self) -> SpriteRecord {
        let record = SpriteRecord::export(&self.grid, self.name.clone(), self.pixel_size);
        self.hooks.on_export(&record);
        record
    }

    /// Replace the sprite with a record's contents. On error nothing changes.
    pub fn import(&mut self, record: &SpriteRecord) -> Result<(), RecordError> {
        let grid = record.import()?;
        self.controller.cancel();
        self.grid = grid;
        self.name = record.name.clone();
        self.pixel_size = record.pixel_size;
        self.rebuild_widgets();
        self.hooks.on_import(record);
        Ok(())
    }

    /// Copy the sprite under the next free name and hand it to the host.
    pub fn duplicate(&mut self) -> SpriteRecord {
        let name = next_sprite_name(&self.name);
        let record = SpriteRecord::export(&self.grid, name, self.pixel_size);
        debug!("duplicated '{}' as '{}'", self.name, record.name);
        self.hooks.on_duplicate(record.clone());
        record
    }

    pub fn delete(&mut self) {
        self.controller.cancel();
        self.hooks.on_delete();
    }

    pub fn new_sprite(&mut self) {
        self.hooks.on_new();
    }

    /// Cancel the stroke and drop preview marks before a whole-grid action.
    fn settle(&mut self) {
        self.controller.cancel();
        self.grid.clear_previews();
    }

    fn rebuild_widgets(&mut self) {
        let factory = &mut self.factory;
        self.slots = self
            .grid
            .iter()
            .map(|((x, y), cell)| Slot { widget: factory.create(x, y, cell.state()), shown: cell.state() })
            .collect();
        debug!(
            "built {} widgets for '{}' ({}x{})",
            self.slots.len(),
            self.name,
            self.grid.width(),
            self.grid.height()
        );
    }

    fn sync_widgets(&mut self) {
        for (slot, (_, cell)) in self.slots.iter_mut().zip(self.grid.iter()) {
            let state = cell.state();
            if slot.shown != state {
                slot.widget.set_visual_state(state);
                slot.shown = state;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PixelValue;
    use crate::widget::{HeadlessCell, HeadlessFactory};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        duplicates: Vec<SpriteRecord>,
    }

    impl EditorHooks for Recorder {
        fn on_delete(&mut self) {
            self.events.push("delete".into());
        }
        fn on_duplicate(&mut self, record: SpriteRecord) {
            self.events.push("duplicate".into());
            self.duplicates.push(record);
        }
        fn on_new(&mut self) {
            self.events.push("new".into());
        }
        fn on_export(&mut self, record: &SpriteRecord) {
            self.events.push(format!("export {}", record.name));
        }
        fn on_import(&mut self, record: &SpriteRecord) {
            self.events.push(format!("import {}", record.name));
        }
    }

    fn editor(w: usize, h: usize) -> Editor<HeadlessFactory, Recorder> {
        Editor::new("sprite", w, h, 10, HeadlessFactory::new(), Recorder::default()).unwrap()
    }

    fn visual(ed: &Editor<HeadlessFactory, Recorder>, x: usize, y: usize) -> CellState {
        ed.widget(x, y).map(|w: &HeadlessCell| w.visual).unwrap()
    }

    #[test]
    fn test_one_widget_per_cell() {
        let ed = editor(5, 3);
        assert_eq!(ed.widgets().count(), 15);
        assert_eq!(ed.widget(4, 2).map(|w| (w.x, w.y)), Some((4, 2)));
        assert!(ed.widget(5, 0).is_none());
    }

    #[test]
    fn test_press_updates_only_touched_widget() {
        let mut ed = editor(4, 4);
        ed.handle(PointerEvent::Press { x: 1, y: 2 });
        assert_eq!(visual(&ed, 1, 2), CellState::On);
        let updated: usize = ed.widgets().map(|w| w.updates).sum();
        assert_eq!(updated, 1);
    }

    #[test]
    fn test_line_preview_visible_on_widgets() {
        let mut ed = editor(4, 4);
        ed.set_tool(Tool::Line);
        ed.handle(PointerEvent::Press { x: 0, y: 0 });
        ed.handle(PointerEvent::Move { x: 2, y: 0 });
        assert_eq!(visual(&ed, 1, 0), CellState::Preview(PixelValue::Off));

        ed.handle(PointerEvent::Release { x: 2, y: 0 });
        assert_eq!(visual(&ed, 1, 0), CellState::On);
        assert_eq!(visual(&ed, 3, 0), CellState::Off);
    }

    #[test]
    fn test_rotate_cancels_stroke_and_rebuilds() {
        let mut ed = editor(4, 2);
        ed.set_tool(Tool::Line);
        ed.handle(PointerEvent::Press { x: 0, y: 0 });
        ed.handle(PointerEvent::Move { x: 3, y: 0 });

        ed.rotate_left();
        assert!(!ed.is_drawing());
        assert!(!ed.grid().has_previews());
        assert_eq!((ed.grid().width(), ed.grid().height()), (2, 4));
        assert_eq!(ed.widgets().count(), 8);
        assert_eq!(ed.factory().created(), 16);
    }

    #[test]
    fn test_invert_syncs_widgets() {
        let mut ed = editor(2, 2);
        ed.invert();
        assert!(ed.widgets().all(|w| w.visual == CellState::On));
    }

    #[test]
    fn test_resize_clears() {
        let mut ed = editor(4, 4);
        ed.handle(PointerEvent::Press { x: 0, y: 0 });
        assert_eq!(ed.resize(6, 6), Ok(1));
        assert_eq!(ed.grid().lit_count(), 0);
        assert_eq!(ed.widgets().count(), 36);
    }

    #[test]
    fn test_resize_invalid_keeps_state() {
        let mut ed = editor(4, 4);
        ed.set_tool(Tool::Line);
        ed.handle(PointerEvent::Press { x: 0, y: 0 });
        assert!(ed.resize(0, 2).is_err());
        assert!(ed.is_drawing());
        assert_eq!(ed.widgets().count(), 16);
    }

    #[test]
    fn test_duplicate_uses_next_name() {
        let mut ed = editor(2, 2);
        ed.handle(PointerEvent::Press { x: 1, y: 1 });
        let record = ed.duplicate();
        assert_eq!(record.name, "sprite1");
        assert!(record.data[1][1]);
        assert_eq!(ed.hooks().duplicates, vec![record]);
        assert_eq!(ed.name(), "sprite");
    }

    #[test]
    fn test_export_import_hooks() {
        let mut ed = editor(2, 2);
        let mut record = ed.export();
        record.name = "other".into();
        record.data[0][0] = true;

        ed.import(&record).unwrap();
        assert_eq!(ed.name(), "other");
        assert_eq!(visual(&ed, 0, 0), CellState::On);
        assert_eq!(ed.hooks().events, vec!["export sprite", "import other"]);
    }

    #[test]
    fn test_import_failure_keeps_sprite() {
        let mut ed = editor(2, 2);
        ed.handle(PointerEvent::Press { x: 0, y: 0 });
        let bad = SpriteRecord { name: "bad".into(), width: 3, height: 1, pixel_size: 1, data: vec![] };
        assert!(ed.import(&bad).is_err());
        assert_eq!(ed.name(), "sprite");
        assert_eq!(ed.grid().lit_count(), 1);
        assert!(ed.hooks().events.is_empty());
    }

    #[test]
    fn test_shell_hooks() {
        let mut ed = editor(1, 1);
        ed.new_sprite();
        ed.delete();
        assert_eq!(ed.hooks().events, vec!["new", "delete"]);
    }

    #[test]
    fn test_from_record() {
        let record = SpriteRecord {
            name: "r".into(),
            width: 2,
            height: 1,
            pixel_size: 3,
            data: vec![vec![false, true]],
        };
        let ed = Editor::from_record(&record, HeadlessFactory::new(), NoHooks).unwrap();
        assert_eq!(ed.pixel_size(), 3);
        assert_eq!(ed.widget(1, 0).map(|w| w.visual), Some(CellState::On));
    }
}
