//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so events go to a log file. Filtering
//! follows `RUST_LOG`, defaulting to `feedback_form=info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, ConfigError};

const DEFAULT_FILTER: &str = "feedback_form=info";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log path could not be resolved.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A global subscriber is already installed.
    #[error("could not install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global subscriber, appending to the configured log file.
///
/// Returns the path being written to.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<PathBuf, LoggingError> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(path)
}
