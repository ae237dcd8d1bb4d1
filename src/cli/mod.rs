//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod draw;
mod new;
mod render;
mod show;
mod transform;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, PadConfig};
use crate::output::read_record;
use crate::record::SpriteRecord;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Largest factor `render` scales by
pub(crate) const MAX_SCALE: u32 = 128;

/// Pixelpad - edit two-state pixel sprites stored as JSON records
#[derive(Parser)]
#[command(name = "pxpad")]
#[command(about = "Pixelpad - edit two-state pixel sprites stored as JSON records")]
#[command(version)]
pub struct Cli {
    /// Path to a pxpad.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Direction for `transform --rotate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rotation {
    /// Counter-clockwise quarter turn
    Left,
    /// Clockwise quarter turn
    Right,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a blank sprite record
    New {
        /// Output JSON file
        output: PathBuf,

        /// Sprite name (default: canvas.name from config)
        #[arg(short, long)]
        name: Option<String>,

        /// Width in cells (default: canvas.width from config)
        #[arg(long)]
        width: Option<u32>,

        /// Height in cells (default: canvas.height from config)
        #[arg(long)]
        height: Option<u32>,

        /// On-screen cell size (default: canvas.pixel_size from config)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Draw on a sprite with the pixel and line tools.
    /// Pixel toggles are applied first, then lines, each in the order given.
    Draw {
        /// Input sprite record (.json)
        input: PathBuf,

        /// Toggle a cell with the pixel tool: x,y (e.g. --pixel 5,10)
        #[arg(long, value_name = "X,Y")]
        pixel: Vec<String>,

        /// Draw a line with the line tool: x1,y1,x2,y2 (e.g. --line 0,0,15,15)
        #[arg(long, value_name = "X1,Y1,X2,Y2")]
        line: Vec<String>,

        /// Output file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Rotate, invert or resize a sprite
    Transform {
        /// Input sprite record (.json)
        input: PathBuf,

        /// Rotate a quarter turn
        #[arg(long, value_enum)]
        rotate: Option<Rotation>,

        /// Toggle every cell
        #[arg(long)]
        invert: bool,

        /// Resize to WxH. Clears the sprite.
        #[arg(long, value_name = "WxH")]
        resize: Option<String>,

        /// Output file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy a sprite under the next free name
    Duplicate {
        /// Input sprite record (.json)
        input: PathBuf,

        /// Output file (default: {name}.json next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a sprite to PNG
    Render {
        /// Input sprite record (.json)
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Scale factor (default: the record's pixel size, capped at 128)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SCALE)))]
        scale: Option<u32>,
    },

    /// Print a sprite to the terminal
    Show {
        /// Input sprite record (.json)
        input: PathBuf,

        /// Plain ASCII instead of emoji
        #[arg(long)]
        text: bool,
    },
}

/// Load config, reporting failures the way every command does.
pub(crate) fn load_config_or_report(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PadConfig, ExitCode> {
    match load_config(path) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Read a record, reporting failures the way every command does.
pub(crate) fn read_record_or_report(input: &Path) -> Result<SpriteRecord, ExitCode> {
    read_record(input).map_err(|e| {
        eprintln!("Error: cannot read '{}': {}", input.display(), e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Parse a comma-separated list of exactly `N` non-negative integers.
pub(crate) fn parse_coords<const N: usize>(s: &str) -> Result<[usize; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated values, got '{}'", N, s));
    }
    let mut out = [0usize; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| format!("invalid coordinate '{}' in '{}'", part, s))?;
    }
    Ok(out)
}

/// Parse `WxH` into positive dimensions.
pub(crate) fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size '{}', expected WxH (e.g. 16x16)", s))?;
    let w: usize = w.trim().parse().map_err(|_| format!("invalid width in '{}'", s))?;
    let h: usize = h.trim().parse().map_err(|_| format!("invalid height in '{}'", s))?;
    Ok((w, h))
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::New { output, name, width, height, size } => {
            let overrides = CliOverrides { width, height, pixel_size: size, name };
            new::run_new(&output, config_path, &overrides)
        }
        Commands::Draw { input, pixel, line, output, dry_run } => {
            draw::run_draw(&input, &pixel, &line, output.as_deref(), dry_run)
        }
        Commands::Transform { input, rotate, invert, resize, output } => {
            transform::run_transform(&input, rotate, invert, resize.as_deref(), output.as_deref())
        }
        Commands::Duplicate { input, output } => transform::run_duplicate(&input, output.as_deref()),
        Commands::Render { input, output, scale } => {
            render::run_render(&input, &output, scale, config_path)
        }
        Commands::Show { input, text } => show::run_show(&input, text),
    }
}
