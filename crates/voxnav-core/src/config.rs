use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid construction and rebuild configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Spacing between adjacent grid nodes, in world units. Must be > 0.
    pub cell_distance: f32,
    /// Seconds between grid rebuilds. Zero or negative builds the grid once.
    pub refresh_interval: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cell_distance: 1.0,
            refresh_interval: 0.0,
        }
    }
}

impl NavConfig {
    /// Radius used when snapping an arbitrary world position to a node.
    pub fn snap_radius(&self) -> f32 {
        self.cell_distance * 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_distance > 0.0) {
            return Err(ConfigError::NonPositiveCellDistance(self.cell_distance));
        }
        Ok(())
    }
}

/// Configuration that cannot produce a meaningful grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("cell_distance must be > 0 (got {0})")]
    NonPositiveCellDistance(f32),
}
