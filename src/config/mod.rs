//! TOML configuration loading.
//!
//! ```toml
//! [general]
//! debug = true
//! time_format = "%Y-%m-%dT%H:%M:%S%:z"
//! max_line_size = 120
//!
//! [adapters.file]
//! path = "~/.local/state/myapp/app.log"
//! ```
//!
//! Each `[adapters.<name>]` table becomes that adapter's configuration map once the
//! adapter is registered; tables naming unregistered adapters are ignored.

mod structs;

pub use structs::{GeneralConfig, Settings};

use crate::adapter::AdapterConfig;
use crate::internal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parsed `conlog.toml`. Every field defaults, so an empty file is valid.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Formatting state shared by all lines.
    pub general: GeneralConfig,
    /// Per-adapter configuration maps keyed by adapter name.
    pub adapters: HashMap<String, AdapterConfig>,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// `<config_dir>/conlog/conlog.toml`, e.g. `~/.config/conlog/conlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("conlog").join("conlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Runtime settings described by `[general]`.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimeFormat` if `time_format` can't be rendered.
    pub fn settings(&self) -> Result<Settings, crate::Error> {
        let settings = Settings::new()
            .debug_mode(self.general.debug)
            .time_format(self.general.time_format.clone())
            .max_line_size(self.general.max_line_size);
        settings.validate()?;
        Ok(settings)
    }
}

impl FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
