//! Layout parameters. All distances are in the renderer's coordinate units.

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::stack::StackPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical step between pucks stacked in one calendar cell.
    pub row_height: f64,
    /// Grid step between pucks sharing a map coordinate.
    pub map_unit: f64,
    /// Width of the map cluster grid.
    pub map_columns: usize,
    /// Wrap width of puck labels, in characters.
    pub label_width: usize,
    /// Pucks that fit inside one calendar cell; `None` disables overflow reports.
    pub cell_capacity: Option<usize>,
    /// First sequence number issued per category.
    pub counter_start: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 2.0,
            map_unit: 0.2,
            map_columns: 3,
            label_width: 15,
            cell_capacity: Some(4),
            counter_start: 1,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> std::result::Result<(), LayoutError> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !(self.map_unit.is_finite() && self.map_unit > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "map_unit must be positive, got {}",
                self.map_unit
            )));
        }
        if self.map_columns == 0 {
            return Err(LayoutError::InvalidConfig("map_columns must be at least 1".into()));
        }
        if self.label_width == 0 {
            return Err(LayoutError::InvalidConfig("label_width must be at least 1".into()));
        }
        Ok(())
    }

    pub fn calendar_policy(&self) -> StackPolicy {
        StackPolicy::Column {
            row_height: self.row_height,
        }
    }

    pub fn map_policy(&self) -> StackPolicy {
        StackPolicy::Grid {
            unit: self.map_unit,
            columns: self.map_columns,
        }
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: LayoutConfig = toml::from_str(text).context("Parse layout config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
        Self::from_toml_str(&text).with_context(|| format!("Failed to load {}", path))
    }
}
