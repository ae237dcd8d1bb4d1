//! CLI dispatch for the `pxpad show` command.

use std::path::Path;
use std::process::ExitCode;

use crate::emoji::{grid_to_emoji, grid_to_text};

use super::{read_record_or_report, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command.
pub fn run_show(input: &Path, text: bool) -> ExitCode {
    let record = match read_record_or_report(input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let grid = match record.import() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!("{} ({}x{}, {} lit)", record.name, grid.width(), grid.height(), grid.lit_count());
    if text {
        print!("{}", grid_to_text(&grid));
    } else {
        print!("{}", grid_to_emoji(&grid));
    }
    ExitCode::from(EXIT_SUCCESS)
}
