//! CLI dispatch for the `pxpad transform` and `pxpad duplicate` commands.

use std::path::Path;
use std::process::ExitCode;

use crate::editor::{Editor, NoHooks};
use crate::output::{sibling_record_path, write_record};
use crate::widget::HeadlessFactory;

use super::{parse_size, read_record_or_report, Rotation, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the transform command.
///
/// Applied in order: resize, rotate, invert.
pub fn run_transform(
    input: &Path,
    rotate: Option<Rotation>,
    invert: bool,
    resize: Option<&str>,
    output: Option<&Path>,
) -> ExitCode {
    if rotate.is_none() && !invert && resize.is_none() {
        eprintln!("Error: nothing to do, pass --rotate, --invert or --resize");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let size = match resize.map(parse_size).transpose() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

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

    if let Some((w, h)) = size {
        match editor.resize(w, h) {
            Ok(0) => {}
            Ok(n) => eprintln!("Warning: resize clears the sprite ({} lit cells discarded)", n),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }
    match rotate {
        Some(Rotation::Left) => editor.rotate_left(),
        Some(Rotation::Right) => editor.rotate_right(),
        None => {}
    }
    if invert {
        editor.invert();
    }

    let target = output.unwrap_or(input);
    if let Err(e) = write_record(&editor.export(), target) {
        eprintln!("Error writing '{}': {}", target.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {}", target.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the duplicate command.
pub fn run_duplicate(input: &Path, output: Option<&Path>) -> ExitCode {
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

    let copy = editor.duplicate();
    let target = output.map(Path::to_path_buf).unwrap_or_else(|| sibling_record_path(input, &copy.name));
    if target.as_path() == input {
        eprintln!("Error: refusing to overwrite the original '{}'", input.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    if let Err(e) = write_record(&copy, &target) {
        eprintln!("Error writing '{}': {}", target.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Duplicated '{}' as '{}': {}", record.name, copy.name, target.display());
    ExitCode::from(EXIT_SUCCESS)
}
