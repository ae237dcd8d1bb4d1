//! Sprite records: the serialized form used for export, duplicate and import.
//!
//! A record is a plain snapshot of a grid plus its display metadata:
//!
//! ```json
//! {"name": "sprite", "width": 3, "height": 1, "size": 10, "data": [[true, false, true]]}
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Grid, GridError};

/// Error type for record import and parsing.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Malformed JSON or wrong field types
    #[error("invalid sprite record: {0}")]
    Json(#[from] serde_json::Error),
    /// Number of data rows does not match `height`
    #[error("invalid sprite record: {found} data rows, height is {expected}")]
    RowCount { expected: usize, found: usize },
    /// A data row does not match `width`
    #[error("invalid sprite record: row {row} has {found} cells, width is {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
    /// Declared dimensions are not usable
    #[error("invalid sprite record: {0}")]
    Grid(#[from] GridError),
}

/// Serialized sprite: dimensions, display size and row-major cell data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// On-screen size of one cell
    #[serde(rename = "size")]
    pub pixel_size: u32,
    /// `data[y][x]`, true = lit
    pub data: Vec<Vec<bool>>,
}

impl SpriteRecord {
    /// Snapshot a grid. Preview marks read as the value they cover.
    pub fn export(grid: &Grid, name: impl Into<String>, pixel_size: u32) -> Self {
        let record = Self {
            name: name.into(),
            width: grid.width() as u32,
            height: grid.height() as u32,
            pixel_size,
            data: grid.to_matrix(),
        };
        debug!("exported '{}' ({}x{})", record.name, record.width, record.height);
        record
    }

    /// Check that `data` matches the declared dimensions.
    pub fn validate(&self) -> Result<(), RecordError> {
        let (width, height) = (self.width as usize, self.height as usize);
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height }.into());
        }
        if self.data.len() != height {
            return Err(RecordError::RowCount { expected: height, found: self.data.len() });
        }
        if let Some((row, r)) = self.data.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(RecordError::RowLength { row, expected: width, found: r.len() });
        }
        Ok(())
    }

    /// Build a new grid from the record. Nothing is built unless the whole
    /// record is valid.
    pub fn import(&self) -> Result<Grid, RecordError> {
        self.validate()?;
        let grid = Grid::from_data(self.width as usize, self.height as usize, &self.data)?;
        debug!("imported '{}' ({}x{})", self.name, self.width, self.height);
        Ok(grid)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
