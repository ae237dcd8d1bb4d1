//! Pixelpad - command-line tool for editing two-state pixel sprites

use std::process::ExitCode;

use pixelpad::cli;

fn main() -> ExitCode {
    env_logger::init();
    cli::run()
}
