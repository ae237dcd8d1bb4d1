//! CLI dispatch for the `pxpad new` command.

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::grid::Grid;
use crate::output::write_record;
use crate::record::SpriteRecord;

use super::{load_config_or_report, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the new command.
pub fn run_new(output: &Path, config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let config = match load_config_or_report(config_path, overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let canvas = &config.canvas;

    let grid = match Grid::new(canvas.width as usize, canvas.height as usize) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let record = SpriteRecord::export(&grid, canvas.name.clone(), canvas.pixel_size);
    if let Err(e) = write_record(&record, output) {
        eprintln!("Error writing '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Created '{}' ({}x{}): {}", record.name, record.width, record.height, output.display());
    ExitCode::from(EXIT_SUCCESS)
}
