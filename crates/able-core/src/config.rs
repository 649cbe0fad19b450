//! Session configuration.
//!
//! The only tunables are the artificial latencies. They are read from a JSON
//! file whose default location follows the XDG Base Directory
//! specification: `$XDG_CONFIG_HOME/able/config.json`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, Result, SessionError};

/// Artificial latencies, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Pacing {
    /// Delay between a query and its plan message
    pub thinking_ms: u64,

    /// Fixed part of every step's execution time
    pub step_base_ms: u64,

    /// Upper bound (exclusive) of the random extra time per step
    pub step_jitter_ms: u64,

    /// Delay before an initial query handed over from the home screen is sent
    pub handoff_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            thinking_ms: 1000,
            step_base_ms: 1500,
            step_jitter_ms: 1000,
            handoff_ms: 300,
        }
    }
}

impl Pacing {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            thinking_ms: 0,
            step_base_ms: 0,
            step_jitter_ms: 0,
            handoff_ms: 0,
        }
    }

    pub fn thinking(&self) -> Duration {
        Duration::from_millis(self.thinking_ms)
    }

    pub fn handoff(&self) -> Duration {
        Duration::from_millis(self.handoff_ms)
    }

    /// Base delay plus uniform jitter in `[0, step_jitter_ms)`.
    pub fn step_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter = if self.step_jitter_ms == 0 {
            0
        } else {
            rng.random_range(0..self.step_jitter_ms)
        };
        Duration::from_millis(self.step_base_ms + jitter)
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub pacing: Pacing,
}

impl SessionConfig {
    /// Reads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FileSystem` if the file cannot be read
    /// Returns `SessionError::Configuration` if it is not valid JSON
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).fs_context(path)?;
        serde_json::from_str(&raw).map_err(|e| SessionError::Configuration {
            message: format!("invalid config file {}: {e}", path.display()),
        })
    }

    /// Reads the default configuration file, falling back to defaults when
    /// it does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path following XDG Base Directory
    /// specification.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("able")
            .place_config_file("config.json")
            .map_err(|e| SessionError::XdgDirectory(e.to_string()))
    }
}
