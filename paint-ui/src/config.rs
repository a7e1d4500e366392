//! Widget configuration.
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid config.

use anyhow::Context;
use egui::Color32;
use paint_core::HistoryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::editor::export::DEFAULT_EXPORT_FILE_NAME;
use crate::editor::tools::DEFAULT_BRUSH_SIZE;
use crate::editor::Theme;

/// Initial pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Initial brush. `color` uses the `#rrggbb` form a colour input produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub color: String,
    pub size: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: "#000000".into(),
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas: CanvasConfig,
    pub history: HistoryConfig,
    pub brush: BrushConfig,
    pub theme: Theme,
    pub export_file_name: String,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            history: HistoryConfig::default(),
            brush: BrushConfig::default(),
            theme: Theme::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.into(),
        }
    }
}

impl PaintConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.history.max_depth == 0 {
            return Err(ConfigError::ZeroHistoryDepth);
        }
        if self.brush.size == 0 {
            return Err(ConfigError::ZeroBrushSize);
        }
        self.brush_color()?;
        Ok(())
    }

    pub fn brush_color(&self) -> Result<Color32, ConfigError> {
        Color32::from_hex(&self.brush.color).map_err(|_| ConfigError::InvalidBrushColor {
            color: self.brush.color.clone(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have a non-zero size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("history depth must be at least 1")]
    ZeroHistoryDepth,

    #[error("brush size must be at least 1")]
    ZeroBrushSize,

    #[error("invalid brush color: {color}")]
    InvalidBrushColor { color: String },
}

/// Load a config from disk.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<PaintConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config: PaintConfig = serde_json::from_str(&data).context("parse config json")?;
    config.validate().context("validate config")?;
    Ok(config)
}

/// Save a config to disk as pretty JSON.
pub fn save_config(path: impl AsRef<Path>, config: &PaintConfig) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("serialize config to json")?;
    fs::write(path, json).with_context(|| format!("write config file: {}", path.display()))?;
    Ok(())
}
