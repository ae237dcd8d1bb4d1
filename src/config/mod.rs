//! Configuration module for the editor
//!
//! Provides types, discovery and parsing for `pxpad.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError, CONFIG_FILE};
pub use schema::*;
