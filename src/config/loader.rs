//! Configuration loading and discovery for `pxpad.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PadConfig;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE: &str = "pxpad.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxpad.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pixel_size: Option<u32>,
    pub name: Option<String>,
}

/// Find pxpad.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for pxpad.toml
/// 2. Check XDG_CONFIG_HOME/pixelpad/pxpad.toml (or ~/.config/pixelpad/pxpad.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find pxpad.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixelpad").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find pxpad.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a pxpad.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<PadConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(PadConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PadConfig, ConfigError> {
    debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: PadConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PadConfig, overrides: &CliOverrides) {
    if let Some(width) = overrides.width {
        config.canvas.width = width;
    }
    if let Some(height) = overrides.height {
        config.canvas.height = height;
    }
    if let Some(pixel_size) = overrides.pixel_size {
        config.canvas.pixel_size = pixel_size;
    }
    if let Some(ref name) = overrides.name {
        config.canvas.name = name.clone();
    }
}
