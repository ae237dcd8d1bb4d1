//! WASM API module for browser/JS interop
//!
//! Exposes an editor session to the browser host. The page renders cells
//! itself and forwards pointer events in grid coordinates; it reads cell
//! states back with `cell_state`.

use wasm_bindgen::prelude::*;

use crate::cell::CellState;
use crate::controller::{PointerEvent, Tool};
use crate::editor::{Editor, NoHooks};
use crate::record::SpriteRecord;
use crate::widget::HeadlessFactory;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser-side editor session.
#[wasm_bindgen]
pub struct WasmEditor {
    inner: Editor<HeadlessFactory, NoHooks>,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Blank sprite of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str, width: u32, height: u32, pixel_size: u32) -> Result<WasmEditor, JsValue> {
        let inner = Editor::new(name, width as usize, height as usize, pixel_size, HeadlessFactory::new(), NoHooks)
            .map_err(js_err)?;
        Ok(Self { inner })
    }

    /// Open a sprite record given as JSON.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmEditor, JsValue> {
        let record = SpriteRecord::from_json(json).map_err(js_err)?;
        let inner = Editor::from_record(&record, HeadlessFactory::new(), NoHooks).map_err(js_err)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.grid().width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.grid().height() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Select "pixel" or "line".
    #[wasm_bindgen(js_name = setTool)]
    pub fn set_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let tool: Tool = tool.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.inner.set_tool(tool);
        Ok(())
    }

    pub fn press(&mut self, x: u32, y: u32) -> bool {
        self.inner.handle(PointerEvent::Press { x: x as usize, y: y as usize })
    }

    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&mut self, x: u32, y: u32) -> bool {
        self.inner.handle(PointerEvent::Move { x: x as usize, y: y as usize })
    }

    pub fn release(&mut self, x: u32, y: u32) -> bool {
        self.inner.handle(PointerEvent::Release { x: x as usize, y: y as usize })
    }

    pub fn leave(&mut self) -> bool {
        self.inner.handle(PointerEvent::Leave)
    }

    /// 0 = off, 1 = on, 2 = preview, 255 = out of bounds.
    #[wasm_bindgen(js_name = cellState)]
    pub fn cell_state(&self, x: u32, y: u32) -> u8 {
        match self.inner.grid().state(x as usize, y as usize) {
            Some(CellState::Off) => 0,
            Some(CellState::On) => 1,
            Some(CellState::Preview(_)) => 2,
            None => 255,
        }
    }

    /// Resize, clearing the sprite. Returns the number of lit cells lost.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<u32, JsValue> {
        let discarded = self.inner.resize(width as usize, height as usize).map_err(js_err)?;
        Ok(discarded as u32)
    }

    #[wasm_bindgen(js_name = rotateLeft)]
    pub fn rotate_left(&mut self) {
        self.inner.rotate_left();
    }

    #[wasm_bindgen(js_name = rotateRight)]
    pub fn rotate_right(&mut self) {
        self.inner.rotate_right();
    }

    pub fn invert(&mut self) {
        self.inner.invert();
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&mut self) -> Result<String, JsValue> {
        self.inner.export().to_json().map_err(js_err)
    }

    /// JSON for a copy of the sprite under the next free name.
    #[wasm_bindgen(js_name = duplicateJson)]
    pub fn duplicate_json(&mut self) -> Result<String, JsValue> {
        self.inner.duplicate().to_json().map_err(js_err)
    }

    /// Replace the sprite with a JSON record. On error nothing changes.
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, json: &str) -> Result<(), JsValue> {
        let record = SpriteRecord::from_json(json).map_err(js_err)?;
        self.inner.import(&record).map_err(js_err)
    }
}
