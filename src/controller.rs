//! Drawing controller: turns pointer events into grid mutations.
//!
//! The controller owns the active tool and a single stroke slot. With the
//! pixel tool a press toggles one cell. With the line tool a press anchors a
//! stroke, moves show a live preview and the release commits the line.

use log::{debug, trace};

use crate::cell::PixelValue;
use crate::grid::Grid;
use crate::shapes::rasterize_line;

/// Drawing tool selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Toggle one cell per press
    #[default]
    Pixel,
    /// Straight line from press to release
    Line,
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pixel" => Ok(Tool::Pixel),
            "line" => Ok(Tool::Line),
            other => Err(format!("unknown tool '{}', expected 'pixel' or 'line'", other)),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Pixel => write!(f, "pixel"),
            Tool::Line => write!(f, "line"),
        }
    }
}

/// A pointer event in grid coordinates, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed over a cell
    Press { x: usize, y: usize },
    /// Pointer moved over a cell
    Move { x: usize, y: usize },
    /// Button released over a cell
    Release { x: usize, y: usize },
    /// Pointer left the drawing surface
    Leave,
}

/// One press-drag-release interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub tool: Tool,
    pub anchor: (usize, usize),
}

#[derive(Debug, Default)]
pub struct DrawingController {
    tool: Tool,
    stroke: Option<Stroke>,
}

/// Signed form of an in-grid coordinate, `None` for points off the grid.
fn grid_point(grid: &Grid, x: usize, y: usize) -> Option<(i32, i32)> {
    grid.get(x, y)?;
    Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Cells covered by the segment `from -> to`, clipped to the grid.
///
/// Both endpoints must already be on the grid.
fn covered_cells(grid: &Grid, from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let (Some(p0), Some(p1)) = (grid_point(grid, from.0, from.1), grid_point(grid, to.0, to.1)) else {
        return Vec::new();
    };
    rasterize_line(p0, p1)
        .into_iter()
        .filter(|&(x, y)| grid.contains(x, y))
        .map(|(x, y)| (x as usize, y as usize))
        .collect()
}

impl DrawingController {
    pub fn new(tool: Tool) -> Self {
        Self { tool, stroke: None }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select the tool used by the next press.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The stroke in progress, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.stroke.is_some()
    }

    /// Drop the active stroke without committing it.
    pub fn cancel(&mut self) {
        if self.stroke.take().is_some() {
            debug!("stroke cancelled");
        }
    }

    /// Apply one pointer event to the grid.
    ///
    /// Returns `true` if any cell changed.
    pub fn handle(&mut self, grid: &mut Grid, event: PointerEvent) -> bool {
        trace!("pointer event {:?} (tool {}, active {})", event, self.tool, self.is_active());

        match event {
            PointerEvent::Press { x, y } => self.press(grid, x, y),
            PointerEvent::Move { x, y } => self.hover(grid, x, y),
            PointerEvent::Release { x, y } => self.release(grid, x, y),
            PointerEvent::Leave => {
                self.stroke = None;
                false
            }
        }
    }

    fn press(&mut self, grid: &mut Grid, x: usize, y: usize) -> bool {
        let had_previews = grid.has_previews();
        grid.clear_previews();

        match self.tool {
            Tool::Pixel => {
                self.stroke = None;
                match grid.get_mut(x, y) {
                    Some(cell) => {
                        cell.toggle_state();
                        true
                    }
                    None => had_previews,
                }
            }
            Tool::Line => {
                self.stroke = grid_point(grid, x, y).map(|_| Stroke { tool: Tool::Line, anchor: (x, y) });
                had_previews
            }
        }
    }

    fn hover(&mut self, grid: &mut Grid, x: usize, y: usize) -> bool {
        let Some(stroke) = self.stroke else {
            return false;
        };
        if grid_point(grid, x, y).is_none() {
            return false;
        }

        grid.clear_previews();
        for (cx, cy) in covered_cells(grid, stroke.anchor, (x, y)) {
            if let Some(cell) = grid.get_mut(cx, cy) {
                cell.mark_preview();
            }
        }
        true
    }

    fn release(&mut self, grid: &mut Grid, x: usize, y: usize) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };

        let had_previews = grid.has_previews();
        grid.clear_previews();
        if grid_point(grid, x, y).is_none() {
            debug!("line released off the grid at ({}, {}), nothing committed", x, y);
            return had_previews;
        }
        let cells = covered_cells(grid, stroke.anchor, (x, y));
        for &(cx, cy) in &cells {
            if let Some(cell) = grid.get_mut(cx, cy) {
                cell.set_state(PixelValue::On);
            }
        }
        debug!("line {:?} -> ({}, {}) committed {} cells", stroke.anchor, x, y, cells.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    fn lit(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter().filter(|(_, c)| c.shows_on()).map(|(p, _)| p).collect()
    }

    #[test]
    fn test_pixel_press_toggles() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::default();

        assert!(ctl.handle(&mut grid, PointerEvent::Press { x: 2, y: 3 }));
        assert_eq!(lit(&grid), vec![(2, 3)]);
        assert!(!ctl.is_active());

        ctl.handle(&mut grid, PointerEvent::Release { x: 2, y: 3 });
        ctl.handle(&mut grid, PointerEvent::Press { x: 2, y: 3 });
        assert!(lit(&grid).is_empty());
    }

    #[test]
    fn test_line_preview_then_commit() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        assert!(ctl.is_active());
        assert_eq!(grid.lit_count(), 0);

        ctl.handle(&mut grid, PointerEvent::Move { x: 2, y: 0 });
        assert_eq!(grid.state(1, 0), Some(CellState::Preview(PixelValue::Off)));
        assert_eq!(grid.state(3, 0), Some(CellState::Off));

        ctl.handle(&mut grid, PointerEvent::Release { x: 2, y: 0 });
        assert!(!ctl.is_active());
        assert!(!grid.has_previews());
        assert_eq!(lit(&grid), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_moving_preview_clears_old_marks() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 5, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 0, y: 2 });

        assert_eq!(grid.state(5, 0), Some(CellState::Off));
        assert_eq!(grid.state(0, 2), Some(CellState::Preview(PixelValue::Off)));
    }

    #[test]
    fn test_release_elsewhere_drops_stale_preview() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 7, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Release { x: 0, y: 1 });

        assert!(!grid.has_previews());
        assert_eq!(lit(&grid), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_preview_keeps_lit_cells() {
        let mut grid = Grid::new(4, 1).unwrap();
        grid.get_mut(1, 0).unwrap().set_state(PixelValue::On);
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 3, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 0, y: 0 });

        assert_eq!(grid.state(1, 0), Some(CellState::On));
    }

    #[test]
    fn test_leave_keeps_preview_until_next_press() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 3, y: 3 });
        ctl.handle(&mut grid, PointerEvent::Leave);

        assert!(!ctl.is_active());
        assert!(grid.has_previews());

        // A release after leaving does nothing
        assert!(!ctl.handle(&mut grid, PointerEvent::Release { x: 3, y: 3 }));
        assert_eq!(grid.lit_count(), 0);

        ctl.set_tool(Tool::Pixel);
        ctl.handle(&mut grid, PointerEvent::Press { x: 7, y: 7 });
        assert!(!grid.has_previews());
        assert_eq!(lit(&grid), vec![(7, 7)]);
    }

    #[test]
    fn test_idle_move_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);
        assert!(!ctl.handle(&mut grid, PointerEvent::Move { x: 1, y: 1 }));
        assert!(!grid.has_previews());
    }

    #[test]
    fn test_tool_change_applies_on_next_press() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);

        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.set_tool(Tool::Pixel);
        assert_eq!(ctl.stroke().map(|s| s.tool), Some(Tool::Line));

        ctl.handle(&mut grid, PointerEvent::Release { x: 0, y: 3 });
        assert_eq!(grid.lit_count(), 4);
    }

    #[test]
    fn test_out_of_bounds_press_is_ignored() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut ctl = DrawingController::default();
        assert!(!ctl.handle(&mut grid, PointerEvent::Press { x: 5, y: 5 }));
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn test_line_press_off_grid_starts_no_stroke() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);
        ctl.handle(&mut grid, PointerEvent::Press { x: 8, y: 0 });
        assert!(!ctl.is_active());
        assert!(!ctl.handle(&mut grid, PointerEvent::Release { x: 3, y: 0 }));
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn test_line_off_grid_move_keeps_last_preview() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);
        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.handle(&mut grid, PointerEvent::Move { x: 2, y: 0 });
        assert!(!ctl.handle(&mut grid, PointerEvent::Move { x: usize::MAX, y: 0 }));
        assert_eq!(grid.state(2, 0), Some(CellState::Preview(PixelValue::Off)));
        assert!(ctl.is_active());
    }

    #[test]
    fn test_line_off_grid_release_commits_nothing() {
        let far = [i32::MAX as usize + 1, usize::MAX / 2 + 3, usize::MAX, 8];
        for x in far {
            let mut grid = Grid::new(8, 8).unwrap();
            let mut ctl = DrawingController::new(Tool::Line);
            ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
            ctl.handle(&mut grid, PointerEvent::Move { x: 3, y: 0 });
            ctl.handle(&mut grid, PointerEvent::Release { x, y: 0 });
            assert!(!ctl.is_active());
            assert_eq!(grid.lit_count(), 0, "release at x = {}", x);
            assert!(!grid.has_previews());
        }
    }

    #[test]
    fn test_cancel() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut ctl = DrawingController::new(Tool::Line);
        ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
        ctl.cancel();
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_tool_from_str() {
        assert_eq!("line".parse::<Tool>(), Ok(Tool::Line));
        assert_eq!("PIXEL".parse::<Tool>(), Ok(Tool::Pixel));
        assert!("brush".parse::<Tool>().is_err());
        assert_eq!(Tool::Line.to_string(), "line");
    }
}
