//! Configuration schema types for `pxpad.toml`
//!
//! Defines the structure and validation rules for editor configuration.

use serde::{Deserialize, Serialize};

use crate::color::parse_hex_color;

/// Default canvas for new sprites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in cells
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in cells
    #[serde(default = "default_height")]
    pub height: u32,
    /// On-screen size of one cell
    #[serde(default = "default_pixel_size")]
    pub pixel_size: u32,
    /// Name given to new sprites
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            pixel_size: default_pixel_size(),
            name: default_name(),
        }
    }
}

fn default_width() -> u32 {
    128
}

fn default_height() -> u32 {
    64
}

fn default_pixel_size() -> u32 {
    10
}

fn default_name() -> String {
    "sprite".to_string()
}

/// Colors used by `render` and previews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_on_color")]
    pub on_color: String,
    #[serde(default = "default_off_color")]
    pub off_color: String,
    #[serde(default = "default_preview_color")]
    pub preview_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            on_color: default_on_color(),
            off_color: default_off_color(),
            preview_color: default_preview_color(),
        }
    }
}

fn default_on_color() -> String {
    "#000000".to_string()
}

fn default_off_color() -> String {
    "#FFFFFF".to_string()
}

fn default_preview_color() -> String {
    "#FFD700".to_string()
}

/// Root of `pxpad.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "canvas.width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxpad.toml: '{}' {}", self.field, self.message)
    }
}

impl PadConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("canvas.pixel_size", self.canvas.pixel_size),
        ] {
            if value == 0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        }

        if self.canvas.name.is_empty() {
            errors.push(ConfigValidationError {
                field: "canvas.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        for (field, value) in [
            ("render.on_color", &self.render.on_color),
            ("render.off_color", &self.render.off_color),
            ("render.preview_color", &self.render.preview_color),
        ] {
            if let Err(e) = parse_hex_color(value) {
                errors.push(ConfigValidationError { field: field.to_string(), message: e.to_string() });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PadConfig::default();
        assert_eq!(config.canvas.width, 128);
        assert_eq!(config.canvas.height, 64);
        assert_eq!(config.canvas.pixel_size, 10);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_parse_partial() {
        let config: PadConfig = toml::from_str(
            r##"
[canvas]
width = 16

[render]
on_color = "#F00"
"##,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 64);
        assert_eq!(config.render.on_color, "#F00");
        assert_eq!(config.render.off_color, "#FFFFFF");
    }

    #[test]
    fn test_old_editor_table_is_ignored() {
        let config: PadConfig = toml::from_str("[editor]\ntool = \"line\"").unwrap();
        assert_eq!(config, PadConfig::default());
        assert!(!toml::to_string(&config).unwrap().contains("editor"));
    }

    #[test]
    fn test_validate_reports_each_field() {
        let mut config = PadConfig::default();
        config.canvas.width = 0;
        config.canvas.pixel_size = 0;
        config.render.on_color = "black".to_string();

        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["canvas.width", "canvas.pixel_size", "render.on_color"]);
        assert!(errors[2].to_string().contains("must start with '#'"));
    }
}
