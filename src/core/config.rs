//! Session settings loaded from `config/yard.toml`.
use std::{fmt, fs, io, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/yard.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawYardConfig {
    #[serde(default)]
    session: RawSessionSection,
    #[serde(default)]
    toast: RawToastSection,
    #[serde(default)]
    rules: RawRulesSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSessionSection {
    seed: Option<u64>,
    initial_food: u32,
    food_spawn_interval_ms: u64,
}

impl Default for RawSessionSection {
    fn default() -> Self {
        Self {
            seed: None,
            initial_food: 6,
            food_spawn_interval_ms: 6000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawToastSection {
    duration_ms: u64,
}

impl Default for RawToastSection {
    fn default() -> Self {
        Self { duration_ms: 1200 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawRulesSection {
    latch_win: bool,
    pause_freezes_timers: bool,
}

impl Default for RawRulesSection {
    fn default() -> Self {
        Self {
            latch_win: true,
            pause_freezes_timers: false,
        }
    }
}

/// Reasons the settings file could not be used.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    Parse { path: String, source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read {}: {}", path, source),
            Self::Parse { path, source } => write!(f, "failed to parse {}: {}", path, source),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Tunable parameters for a yard session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct YardSettings {
    /// Seed for the session RNG; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub initial_food: usize,
    pub food_spawn_interval: Duration,
    pub toast_duration: Duration,
    /// Fire the win toast once instead of on every qualifying tick.
    pub latch_win: bool,
    /// Hold the deferred event schedule (food spawns, toast expiry) while paused.
    pub pause_freezes_timers: bool,
}

impl YardSettings {
    pub fn load_or_default() -> Self {
        match Self::load_from_path(CONFIG_PATH) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("{}. Falling back to defaults.", err);
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawYardConfig>(data).map(Into::into)
    }
}

impl Default for YardSettings {
    fn default() -> Self {
        RawYardConfig::default().into()
    }
}

impl From<RawYardConfig> for YardSettings {
    fn from(value: RawYardConfig) -> Self {
        let session = value.session;
        // A zero interval would drain the spawn trigger forever within one tick.
        let interval_ms = session.food_spawn_interval_ms.max(100);

        Self {
            seed: session.seed,
            initial_food: session.initial_food as usize,
            food_spawn_interval: Duration::from_millis(interval_ms),
            toast_duration: Duration::from_millis(value.toast.duration_ms),
            latch_win: value.rules.latch_win,
            pause_freezes_timers: value.rules.pause_freezes_timers,
        }
    }
}
