//! CLI dispatch for the `pxpad draw` command.
//!
//! Replays each operation as pointer events through an editor session, so
//! the command behaves exactly like drawing in the browser.

use std::path::Path;
use std::process::ExitCode;

use crate::controller::{PointerEvent, Tool};
use crate::editor::{Editor, NoHooks};
use crate::emoji::grid_to_text;
use crate::output::write_record;
use crate::widget::HeadlessFactory;

use super::{parse_coords, read_record_or_report, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the draw command.
pub fn run_draw(
    input: &Path,
    pixels: &[String],
    lines: &[String],
    output: Option<&Path>,
    dry_run: bool,
) -> ExitCode {
    if pixels.is_empty() && lines.is_empty() {
        eprintln!("Error: nothing to draw, pass --pixel or --line");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    // Parse everything before touching the file
    let mut pixel_ops = Vec::with_capacity(pixels.len());
    for p in pixels {
        match parse_coords::<2>(p) {
            Ok(c) => pixel_ops.push(c),
            Err(e) => {
                eprintln!("Error: --pixel {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }
    let mut line_ops = Vec::with_capacity(lines.len());
    for l in lines {
        match parse_coords::<4>(l) {
            Ok(c) => line_ops.push(c),
            Err(e) => {
                eprintln!("Error: --line {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let record = match read_record_or_report(input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let mut editor = match Editor::from_record(&record, HeadlessFactory::new(), NoHooks) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (width, height) = (editor.grid().width(), editor.grid().height());
    let in_bounds = |x: usize, y: usize| x < width && y < height;

    editor.set_tool(Tool::Pixel);
    for [x, y] in pixel_ops {
        if !in_bounds(x, y) {
            eprintln!("Error: coordinates ({}, {}) out of bounds for {}x{} grid", x, y, width, height);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        editor.handle(PointerEvent::Press { x, y });
        editor.handle(PointerEvent::Release { x, y });
    }

    editor.set_tool(Tool::Line);
    for [x0, y0, x1, y1] in line_ops {
        if !in_bounds(x0, y0) || !in_bounds(x1, y1) {
            eprintln!(
                "Error: line ({}, {}) -> ({}, {}) out of bounds for {}x{} grid",
                x0, y0, x1, y1, width, height
            );
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        editor.handle(PointerEvent::Press { x: x0, y: y0 });
        editor.handle(PointerEvent::Move { x: x1, y: y1 });
        editor.handle(PointerEvent::Release { x: x1, y: y1 });
    }

    if dry_run {
        print!("{}", grid_to_text(editor.grid()));
        return ExitCode::from(EXIT_SUCCESS);
    }

    let target = output.unwrap_or(input);
    let result = editor.export();
    if let Err(e) = write_record(&result, target) {
        eprintln!("Error writing '{}': {}", target.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {}", target.display());
    ExitCode::from(EXIT_SUCCESS)
}
