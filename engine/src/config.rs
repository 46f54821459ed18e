//! Tracker configuration file support.
//!
//! This module provides utilities for reading projection defaults and the
//! holiday list from TOML configuration files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::calendar::HolidaySet;

/// Tracker configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub projection: ProjectionSettings,
    /// Holiday dates in `YYYY-MM-DD` form; no classes run on these days.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Projection defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSettings {
    #[serde(default = "default_target")]
    pub default_target: f64,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

fn default_target() -> f64 {
    85.0
}

fn default_horizon_days() -> u32 {
    90
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            horizon_days: default_horizon_days(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TrackerConfig)` if successful
    /// * `Err(EngineError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> EngineResult<Self> {
        toml::from_str(content).map_err(|e| {
            EngineError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Holiday dates as a validated set.
    pub fn holiday_set(&self) -> EngineResult<HolidaySet> {
        HolidaySet::from_strs(&self.holidays)
    }
}
