use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Formula constants. Every field has a default, so a JSON file only needs
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Fixed step length (m) for the daily step summary.
    pub step_length_m: f64,
    /// Stride length = height × coefficient (training records).
    pub stride_coefficient: f64,
    pub walking_calories_coefficient: f64,
    pub running_calories_coefficient: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            stride_coefficient: 0.45,
            walking_calories_coefficient: 0.5,
            running_calories_coefficient: 1.0,
        }
    }
}

impl TrackerConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(s);
        let cfg: TrackerConfig = serde_path_to_error::deserialize(&mut de).map_err(|e| {
            TrackerError::Config(format!("parse error at {}: {}", e.path(), e.inner()))
        })?;
        de.end()
            .map_err(|e| TrackerError::Config(format!("trailing data: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("step_length_m", self.step_length_m),
            ("stride_coefficient", self.stride_coefficient),
            ("walking_calories_coefficient", self.walking_calories_coefficient),
            ("running_calories_coefficient", self.running_calories_coefficient),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrackerError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Reads the config from disk (JSON).
/// A missing file yields the default config.
pub fn load_config(path: impl AsRef<Path>) -> Result<TrackerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!(
            "config not found at {}, using defaults",
            path.display()
        );
        return Ok(TrackerConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| TrackerError::Config(format!("{}: {e}", path.display())))?;
    let cfg = TrackerConfig::from_json_str(&contents)?;
    log::info!("config loaded from {}", path.display());
    Ok(cfg)
}
