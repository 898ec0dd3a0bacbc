//! Store configuration.
//!
//! Loaded from `<config dir>/acctdesk/config.json` when that file exists.
//! The data directory can be overridden with `ACCTDESK_DATA_DIR`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, Result};

/// Application directory name under the platform config/data dirs.
const APP_DIR: &str = "acctdesk";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default storage key for the account list.
pub const DEFAULT_STORAGE_KEY: &str = "accounts";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ACCTDESK_DATA_DIR";

/// Where and under which key the account list is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Data directory for file storage. `None` disables persistence.
    pub data_dir: Option<PathBuf>,
    /// Storage key of the account list.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir().map(|dir| dir.join(APP_DIR)),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Configuration persisting into `dir`.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Configuration with persistence disabled.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Load configuration from the platform config directory.
    ///
    /// A missing file yields the defaults. The `ACCTDESK_DATA_DIR`
    /// environment variable takes precedence over both.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let mut config = match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join(APP_DIR).join(CONFIG_FILE))?,
            None => Self::default(),
        };

        config.apply_data_dir_override(std::env::var_os(DATA_DIR_ENV));
        Ok(config)
    }

    /// Apply the value of `ACCTDESK_DATA_DIR`. Unset or empty values leave the
    /// configured directory alone.
    pub fn apply_data_dir_override(&mut self, value: Option<OsString>) {
        if let Some(dir) = value.filter(|value| !value.is_empty()) {
            debug!("Using data directory from {DATA_DIR_ENV}");
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if it names an empty storage key.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        if config.storage_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{}: storage_key must not be empty",
                path.display()
            )));
        }

        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
