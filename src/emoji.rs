//! Terminal preview of a sprite grid
//!
//! Emoji squares for quick visual checks, plus a plain ASCII form for
//! terminals without emoji support.

use crate::cell::CellState;
use crate::grid::Grid;

const LIT: &str = "⬛";
const UNLIT: &str = "⬜";
const PREVIEW: &str = "🟨";

fn emoji_for(state: CellState) -> &'static str {
    match state {
        CellState::On => LIT,
        CellState::Off => UNLIT,
        CellState::Preview(_) => PREVIEW,
    }
}

fn char_for(state: CellState) -> char {
    match state {
        CellState::On => '#',
        CellState::Off => '.',
        CellState::Preview(_) => '+',
    }
}

/// Render a grid as rows of emoji, one line per row.
///
/// # Examples
///
/// ```
/// use pixelpad::emoji::grid_to_emoji;
/// use pixelpad::grid::Grid;
///
/// let grid = Grid::from_data(2, 1, &[vec![true, false]]).unwrap();
/// assert_eq!(grid_to_emoji(&grid), "⬛⬜\n");
/// ```
pub fn grid_to_emoji(grid: &Grid) -> String {
    let mut out = String::new();
    for ((x, _), cell) in grid.iter() {
        out.push_str(emoji_for(cell.state()));
        if x + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}

/// Render a grid as ASCII: `#` lit, `.` unlit, `+` preview.
pub fn grid_to_text(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for ((x, _), cell) in grid.iter() {
        out.push(char_for(cell.state()));
        if x + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}
