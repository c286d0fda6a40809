// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding campus.json, history.log and events.log
    pub data_dir: PathBuf,
    /// Maximum navigation history entries; 0 means unbounded
    pub history_capacity: usize,
    /// Maximum events log entries; 0 means unbounded
    pub events_capacity: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".campusnav")),
            history_capacity: 100,
            events_capacity: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// History capacity as used by [`crate::log::BoundedLog`]
    #[must_use]
    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.history_capacity)
    }

    /// Events capacity as used by [`crate::log::BoundedLog`]
    #[must_use]
    pub fn events_limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.events_capacity)
    }

    /// Look up a single key for display
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(self.data_dir.display().to_string()),
            "history_capacity" => Some(self.history_capacity.to_string()),
            "events_capacity" => Some(self.events_capacity.to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Render as TOML
    #[must_use]
    pub fn to_toml(&self) -> String {
        // Every field is a plain scalar, so serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "hyperpolymath", "campusnav")
}

/// Default location of the configuration file
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Parse a configuration file
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration from an explicit path, the default path, or defaults.
///
/// An explicit path must exist; the default path is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_path() {
        Some(path) if path.exists() => {
            debug!("loading config from {}", path.display());
            load_from(&path)
        }
        _ => Ok(Config::default()),
    }
}
