//! Configuration loading for KavachField

use crate::error::{FieldError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub cost: CostConfig,

    /// Minimum direction-vector norm accepted by the directional
    /// derivatives; shorter vectors are rejected as degenerate.
    #[serde(default = "default_direction_epsilon")]
    pub direction_epsilon: f64,
}

/// Shape parameters for the default repulsive cost model
#[derive(Clone, Debug, Deserialize)]
pub struct CostConfig {
    /// Peak repulsion at an obstacle center (dimensionless weight)
    #[serde(default = "default_strength")]
    pub strength: f64,

    /// Horizontal influence margin added to the obstacle radius (meters).
    /// Must be positive so point obstacles stay smooth.
    #[serde(default = "default_horizontal_margin")]
    pub horizontal_margin: f64,

    /// Vertical influence margin added to half the obstacle height (meters)
    #[serde(default = "default_vertical_margin")]
    pub vertical_margin: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            strength: default_strength(),
            horizontal_margin: default_horizontal_margin(),
            vertical_margin: default_vertical_margin(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cost: CostConfig::default(),
            direction_epsilon: default_direction_epsilon(),
        }
    }
}

// Default value functions
fn default_strength() -> f64 {
    10.0
}
fn default_horizontal_margin() -> f64 {
    1.0
}
fn default_vertical_margin() -> f64 {
    1.0
}
fn default_direction_epsilon() -> f64 {
    1e-9
}

impl FieldConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FieldError::Config(format!("Failed to read config file: {}", e)))?;
        let config: FieldConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the cost model cannot handle.
    pub fn validate(&self) -> Result<()> {
        if !(self.cost.strength.is_finite() && self.cost.strength >= 0.0) {
            return Err(FieldError::Config(format!(
                "strength must be finite and non-negative, got {}",
                self.cost.strength
            )));
        }
        if !(self.cost.horizontal_margin > 0.0) || !(self.cost.vertical_margin > 0.0) {
            return Err(FieldError::Config(format!(
                "influence margins must be positive, got horizontal {} / vertical {}",
                self.cost.horizontal_margin, self.cost.vertical_margin
            )));
        }
        if !(self.direction_epsilon > 0.0) {
            return Err(FieldError::Config(format!(
                "direction_epsilon must be positive, got {}",
                self.direction_epsilon
            )));
        }
        Ok(())
    }
}
