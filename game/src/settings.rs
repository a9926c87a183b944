use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const SETTINGS_PATH_ENV: &str = "GAZOOL_SETTINGS_PATH";
pub const SEED_ENV: &str = "GAZOOL_SEED";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameplaySettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Animation advances on every n-th tick.
    #[serde(default = "default_anim_slow_down")]
    pub anim_slow_down: u64,
    /// Fixed RNG seed; `None` seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            anim_slow_down: default_anim_slow_down(),
            seed: None,
        }
    }
}

impl GameplaySettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSettings {
    #[serde(default = "default_window_scale")]
    pub window_scale: u32,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            window_scale: default_window_scale(),
            vsync: default_vsync(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub gameplay: GameplaySettings,
    #[serde(default)]
    pub video: VideoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            gameplay: GameplaySettings::default(),
            video: VideoSettings::default(),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.gameplay.tick_interval_ms = self.gameplay.tick_interval_ms.clamp(1, 1000);
        self.gameplay.anim_slow_down = self.gameplay.anim_slow_down.max(1);
        self.video.window_scale = self.video.window_scale.clamp(1, 8);
        self
    }

    /// Applies `GAZOOL_SEED` on top of the file value.
    pub fn with_env_overrides(mut self) -> Result<Self, SettingsError> {
        if let Ok(value) = std::env::var(SEED_ENV) {
            let seed = value.trim().parse::<u64>().map_err(|_| SettingsError::InvalidEnv {
                var: SEED_ENV,
                value: value.clone(),
            })?;
            self.gameplay.seed = Some(seed);
        }
        Ok(self)
    }
}

fn default_version() -> u32 {
    1
}

fn default_tick_interval_ms() -> u64 {
    10
}

fn default_anim_slow_down() -> u64 {
    1
}

fn default_window_scale() -> u32 {
    3
}

fn default_vsync() -> bool {
    true
}

/// Read-only settings file location.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os(SETTINGS_PATH_ENV) {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("gazool");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; an unreadable or malformed file is an error.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice::<Settings>(&bytes)
            .map(Settings::sanitized)
            .map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}
