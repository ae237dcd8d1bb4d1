//! The sprite grid: a width×height collection of cells.
//!
//! Cells are stored row-major. Every operation either validates and then
//! mutates, or rebuilds the whole collection, so `cells.len()` always equals
//! `width * height` once a call returns.

use log::{debug, warn};
use thiserror::Error;

use crate::cell::{Cell, CellState, PixelValue};

/// Error type for grid construction and resizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero
    #[error("invalid grid dimensions {width}x{height}, both must be positive")]
    InvalidDimension { width: usize, height: usize },
    /// Initial data has the wrong number of rows
    #[error("initial data has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    /// A row of initial data has the wrong length
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
    /// `width * height` cells cannot be addressed on this platform
    #[error("grid dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}

/// A 2D grid of two-state cells addressed by `(x, y)`, `(0, 0)` top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Validate a size and return its cell count.
fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimension { width, height });
    }
    let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
    match width.checked_mul(height) {
        Some(count) if count <= max_cells => Ok(count),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

impl Grid {
    /// Create an all-off grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelpad::grid::Grid;
    ///
    /// let grid = Grid::new(4, 3).unwrap();
    /// assert_eq!(grid.len(), 12);
    /// assert_eq!(grid.lit_count(), 0);
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let count = check_dimensions(width, height)?;
        Ok(Self { width, height, cells: vec![Cell::default(); count] })
    }

    /// Create a grid from a row-major boolean matrix (`data[y][x]`, true = lit).
    pub fn from_data(width: usize, height: usize, data: &[Vec<bool>]) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        if data.len() != height {
            return Err(GridError::RowCount { expected: height, found: data.len() });
        }
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RowLength { row, expected: width, found: r.len() });
        }

        let cells = data.iter().flatten().map(|&lit| Cell::new(lit.into())).collect();
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (always `width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Whether a signed coordinate lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        let i = self.index(x, y)?;
        self.cells.get(i)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        let i = self.index(x, y)?;
        self.cells.get_mut(i)
    }

    /// State of the cell at `(x, y)`, if in bounds.
    pub fn state(&self, x: usize, y: usize) -> Option<CellState> {
        self.get(x, y).map(Cell::state)
    }

    /// Iterate cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, c)| ((i % width, i / width), c))
    }

    /// Number of committed lit cells. Previews count as what they cover.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.value() == PixelValue::On).count()
    }

    pub fn has_previews(&self) -> bool {
        self.cells.iter().any(Cell::is_preview)
    }

    /// Resolve every preview mark back to the value it covers.
    pub fn clear_previews(&mut self) {
        for cell in &mut self.cells {
            cell.clear_preview();
        }
    }

    /// Snapshot of committed values as `matrix[y][x]`.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| bool::from(c.value())).collect::<Vec<bool>>())
            .collect()
    }

    /// Replace the grid with a fresh all-off grid of the new size.
    ///
    /// Existing cell values are not carried over; returns how many lit cells
    /// were discarded. On error the grid is left untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<usize, GridError> {
        let fresh = Grid::new(width, height)?;
        let discarded = self.lit_count();
        debug!("resize {}x{} -> {}x{}", self.width, self.height, width, height);
        if discarded > 0 {
            warn!("resize discarded {} lit cells", discarded);
        }
        *self = fresh;
        Ok(discarded)
    }

    /// Counter-clockwise quarter turn. Old `(x, y)` lands on `(y, width - 1 - x)`.
    pub fn rotate_left(&mut self) {
        let (w, h) = (self.width, self.height);
        self.rebuild_rotated(|x, y| (y, w - 1 - x));
        debug!("rotate left {}x{} -> {}x{}", w, h, self.width, self.height);
    }

    /// Clockwise quarter turn. Old `(x, y)` lands on `(height - 1 - y, x)`.
    pub fn rotate_right(&mut self) {
        let (w, h) = (self.width, self.height);
        self.rebuild_rotated(|x, y| (h - 1 - y, x));
        debug!("rotate right {}x{} -> {}x{}", w, h, self.width, self.height);
    }

    /// Build the swapped-dimension cell collection using `dest(x, y)` for
    /// each old coordinate, then install it in one step.
    fn rebuild_rotated(&mut self, dest: impl Fn(usize, usize) -> (usize, usize)) {
        let new_width = self.height;
        let new_height = self.width;
        let mut cells = vec![Cell::default(); self.cells.len()];

        for (i, cell) in self.cells.iter().enumerate() {
            let (nx, ny) = dest(i % self.width, i / self.width);
            cells[ny * new_width + nx] = *cell;
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }

    /// Toggle every cell in place.
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            cell.toggle_state();
        }
        debug!("invert {}x{}", self.width, self.height);
    }
}
