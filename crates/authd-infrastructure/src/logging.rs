//! Structured logging with tracing
//!
//! Configures a `tracing-subscriber` registry with plain or JSON output and an
//! optional daily-rolling log file. `AUTHD_LOG` overrides the configured level.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use authd_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Install the global subscriber described by `config`
///
/// Fails if the level is unknown or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let appender = config.file_output.as_deref().map(rolling_appender);
    let json = config.json_format;

    // `Option<Layer>` is itself a layer, so exactly one stdout format and at
    // most one file layer end up installed
    let stdout_json = json.then(|| fmt::layer().json().with_current_span(false));
    let stdout_plain = (!json).then(fmt::layer);
    let (file_json, file_plain) = match appender {
        Some(writer) if json => (
            Some(fmt::layer().json().with_writer(writer).with_ansi(false)),
            None,
        ),
        Some(writer) => (None, Some(fmt::layer().with_writer(writer).with_ansi(false))),
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(stdout_json)
        .with(stdout_plain)
        .with(file_json)
        .with(file_plain)
        .try_init()
        .map_err(|e| Error::Configuration {
            message: format!("Failed to install tracing subscriber: {e}"),
            source: Some(Box::new(e)),
        })?;

    info!(%level, json, file = ?config.file_output, "Logging initialized");
    Ok(())
}

/// Daily-rolling appender writing next to `path`, named after its stem
fn rolling_appender(path: &Path) -> RollingFileAppender {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
    tracing_appender::rolling::daily(dir, stem)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Report which configuration file was read
pub fn log_config_loaded(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(
            path = %config_path.display(),
            "Configuration file not found; using defaults and environment"
        );
    }
}
