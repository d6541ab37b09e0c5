//! Tracker constants and the runtime [`TrackerConfig`] resource.
//!
//! The config is optional: the binary loads it from the JSON file named by
//! [`CONFIG_ENV_VAR`] and falls back to defaults when the file is missing
//! or invalid. Every field has a default, so a partial file is fine.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::projection::BoundingBox;

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "ROADWATCH_CONFIG";

/// Id handed to the first user-submitted report (the five seed issues use 1-5).
pub const FIRST_SUBMITTED_ID: u32 = 6;

/// File extensions accepted for photo evidence, lowercase.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Runtime configuration.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Lat/lng box drawn as the simulated map.
    pub map_bounds: BoundingBox,
    /// Box that new reports get a random position in.
    pub scatter_bounds: BoundingBox,
    /// Fixed seed for report scattering; entropy when absent.
    pub rng_seed: Option<u64>,
    /// Start with the five demo issues.
    pub seed_issues: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            map_bounds: BoundingBox::MAP,
            scatter_bounds: BoundingBox::SCATTER,
            rng_seed: None,
            seed_issues: true,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from [`CONFIG_ENV_VAR`] if set. Any failure is logged and the
    /// defaults are used instead.
    pub fn from_env_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load_from_path(path) {
            Ok(config) => {
                info!("Loaded tracker config from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load tracker config from {}, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.map_bounds.validate()?;
        self.scatter_bounds.validate()
    }
}
