//! Sprite rendering to RGBA images
//!
//! One image pixel per grid cell. Use [`crate::output::scale_image`] to blow
//! the result up to the sprite's on-screen pixel size.

use image::{Rgba, RgbaImage};

use crate::cell::CellState;
use crate::color::{parse_hex_color, ColorError};
use crate::config::RenderConfig;
use crate::grid::Grid;
use crate::record::{RecordError, SpriteRecord};

/// Colors used for each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub on: Rgba<u8>,
    pub off: Rgba<u8>,
    pub preview: Rgba<u8>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { on: Rgba([0, 0, 0, 255]), off: Rgba([255, 255, 255, 255]), preview: Rgba([255, 215, 0, 255]) }
    }
}

impl RenderStyle {
    /// Build a style from the `[render]` config section.
    pub fn from_config(config: &RenderConfig) -> Result<Self, ColorError> {
        Ok(Self {
            on: parse_hex_color(&config.on_color)?,
            off: parse_hex_color(&config.off_color)?,
            preview: parse_hex_color(&config.preview_color)?,
        })
    }

    pub fn color_for(&self, state: CellState) -> Rgba<u8> {
        match state {
            CellState::On => self.on,
            CellState::Off => self.off,
            CellState::Preview(_) => self.preview,
        }
    }
}

/// Render a grid, one image pixel per cell.
pub fn render_grid(grid: &Grid, style: &RenderStyle) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for ((x, y), cell) in grid.iter() {
        image.put_pixel(x as u32, y as u32, style.color_for(cell.state()));
    }
    image
}

/// Render a record after validating it.
pub fn render_record(record: &SpriteRecord, style: &RenderStyle) -> Result<RgbaImage, RecordError> {
    let grid = record.import()?;
    Ok(render_grid(&grid, style))
}
