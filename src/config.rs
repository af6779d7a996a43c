//! Editor configuration
//!
//! Canvas dimensions live outside the core: every transform call takes them
//! as arguments and nothing is cached. This module only gives embedders and
//! the CLI a place to load them from, as a small TOML file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::MapDimensions;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Editor settings, currently the canvas the map renders into.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub canvas: MapDimensions,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
struct TomlConfig {
    canvas: Option<TomlCanvas>,
}

#[derive(Deserialize)]
struct TomlCanvas {
    width: Option<f64>,
    height: Option<f64>,
}

/// Default canvas in px, matching the standard map editor layout
const DEFAULT_CONFIG: &str = r#"
[canvas]
width = 500
height = 600
"#;

impl EditorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string; missing keys fall back to the
    /// defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let canvas = match parsed.canvas {
            Some(canvas) => MapDimensions::new(
                canvas.width.unwrap_or(defaults.canvas.width),
                canvas.height.unwrap_or(defaults.canvas.height),
            ),
            None => defaults.canvas,
        };

        Ok(Self { canvas })
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        let parsed: TomlConfig =
            toml::from_str(DEFAULT_CONFIG).unwrap_or(TomlConfig { canvas: None });
        let canvas = parsed
            .canvas
            .map(|c| MapDimensions::new(c.width.unwrap_or(500.0), c.height.unwrap_or(600.0)))
            .unwrap_or(MapDimensions::new(500.0, 600.0));
        Self { canvas }
    }
}
