//! Designer configuration.

use crate::grid::{DEFAULT_GRID_SPACING, DEFAULT_GRID_STROKE};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the design surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Side length of a drawn anchor square.
    pub anchor_size: f64,
    /// Radius around an anchor centre that counts as a hit.
    pub anchor_hit_tolerance: f64,
    /// Distance between background grid lines.
    pub grid_spacing: f64,
    pub grid_stroke_width: f64,
    /// Where new palette controls land, in design panel space.
    pub drop_position: Point,
    /// Offset of the design panel inside the overlay surface.
    pub surface_offset: Vec2,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            anchor_size: 8.0,
            anchor_hit_tolerance: 6.0,
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_stroke_width: DEFAULT_GRID_STROKE,
            drop_position: Point::new(50.0, 50.0),
            surface_offset: Vec2::ZERO,
        }
    }
}

impl DesignerConfig {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
