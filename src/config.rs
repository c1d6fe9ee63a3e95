//! Runtime configuration, loaded once at startup from a JSON file.
//!
//! Every key is optional; a missing file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "feedback-form";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for [`Config`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,
}

/// Tunable timings and paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long the "Form submitted!" toast shows before the result screen.
    pub navigation_delay_ms: u64,
    /// How long each toast stays on screen.
    pub toast_lifetime_ms: u64,
    /// How long the event loop waits for input before ticking timers.
    pub tick_rate_ms: u64,
    /// Log destination; defaults to the platform data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation_delay_ms: 1200,
            toast_lifetime_ms: 5000,
            tick_rate_ms: 100,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads `config.json` from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `<config_dir>/feedback-form/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(APP_DIR).join("config.json"))
    }

    /// Returns the configured log file, or `<data_dir>/feedback-form/feedback-form.log`.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(dir.join(APP_DIR).join("feedback-form.log"))
    }

    /// Delay between an accepted submit and the result screen.
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    /// How long each toast stays visible.
    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    /// Input poll timeout for the event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.navigation_delay(), Duration::from_millis(1200));
        assert_eq!(config.toast_lifetime(), Duration::from_secs(5));
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "navigation_delay_ms": 250 }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.navigation_delay(), Duration::from_millis(250));
        assert_eq!(config.toast_lifetime_ms, 5000);
    }

    #[test]
    fn log_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_file": "/tmp/ff.log" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/ff.log"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn directory_instead_of_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
