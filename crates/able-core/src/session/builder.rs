//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Session;
use crate::{
    config::{Pacing, SessionConfig},
    error::Result,
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config_path: Option<PathBuf>,
    pacing: Option<Pacing>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/able/config.json` or `~/.config/able/config.json`,
    /// and falls back to built-in defaults when that file does not exist.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the pacing from the configuration file. When set and no
    /// explicit config path is given, the default config file is not read.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FileSystem` if an explicit config file cannot be
    /// read
    /// Returns `SessionError::Configuration` if the config file is invalid
    /// Returns `SessionError::XdgDirectory` if the default path cannot be
    /// resolved
    pub fn build(self) -> Result<Session> {
        let mut config = match (&self.config_path, self.pacing) {
            (Some(path), _) => SessionConfig::load(path)?,
            (None, Some(_)) => SessionConfig::default(),
            (None, None) => SessionConfig::load_default()?,
        };
        if let Some(pacing) = self.pacing {
            config.pacing = pacing;
        }

        debug!("Session pacing: {:?}", config.pacing);
        Ok(Session::new(config.pacing))
    }
}
