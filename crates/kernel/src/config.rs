//! Tunables for the motion core and spawner, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use drift_input::{BindingError, KeyBindings};

use crate::easing::Easing;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("bad key binding: {0}")]
    Binding(#[from] BindingError),
}

/// Motion model constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Full commanded speed in units per second.
    pub speed: f32,
    /// Ramp progress per second; `1.0` reaches full speed in one second.
    pub ramp_rate: f32,
    pub easing: Easing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 20.0,
            ramp_rate: 1.0,
            easing: Easing::InOutSine,
        }
    }
}

/// Asteroid spawn timer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Seconds between spawns.
    pub interval: f32,
    /// Number of asteroid models to pick from (`asteroid-00` ..).
    pub variant_count: u32,
    /// Seed for the variant picker.
    pub seed: u64,
    /// Live asteroid limit; the oldest is despawned beyond it.
    pub max_asteroids: usize,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval: 1.0,
            variant_count: 5,
            seed: 42,
            max_asteroids: 32,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub motion: MotionConfig,
    pub spawner: SpawnerConfig,
    /// Host key name -> action name, applied over the default WASD/arrow bindings.
    pub bindings: BTreeMap<String, String>,
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every tunable and return the key bindings they describe.
    pub fn validate(&self) -> Result<KeyBindings, ConfigError> {
        positive("motion.speed", self.motion.speed)?;
        positive("motion.ramp_rate", self.motion.ramp_rate)?;
        positive("spawner.interval", self.spawner.interval)?;
        if self.spawner.variant_count == 0 {
            return Err(ConfigError::Invalid {
                field: "spawner.variant_count",
                reason: "must be at least 1".into(),
            });
        }
        if self.spawner.max_asteroids == 0 {
            return Err(ConfigError::Invalid {
                field: "spawner.max_asteroids",
                reason: "must be at least 1".into(),
            });
        }
        self.key_bindings()
    }

    /// Default bindings with this config's overrides applied.
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        Ok(KeyBindings::with_overrides(&self.bindings)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite and > 0, got {value}"),
        })
    }
}
