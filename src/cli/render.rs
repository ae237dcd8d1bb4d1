//! CLI dispatch for the `pxpad render` command.

use log::debug;
use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::output::{save_png, scale_image};
use crate::renderer::{render_record, RenderStyle};

use super::{load_config_or_report, read_record_or_report, EXIT_ERROR, EXIT_SUCCESS, MAX_SCALE};

/// Execute the render command.
pub fn run_render(input: &Path, output: &Path, scale: Option<u32>, config_path: Option<&Path>) -> ExitCode {
    let config = match load_config_or_report(config_path, &CliOverrides::default()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let style = match RenderStyle::from_config(&config.render) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: render colors: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let record = match read_record_or_report(input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let image = match render_record(&record, &style) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let factor = scale.unwrap_or_else(|| {
        if record.pixel_size > MAX_SCALE {
            debug!("pixel size {} capped to scale {}", record.pixel_size, MAX_SCALE);
        }
        record.pixel_size.min(MAX_SCALE)
    });
    let image = match scale_image(image, factor) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if let Err(e) = save_png(&image, output) {
        eprintln!("Error: Failed to save '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
