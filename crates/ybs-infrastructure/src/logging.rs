//! Structured logging with tracing
//!
//! Configures the global subscriber: level filter, optional JSON output and
//! optional daily-rolling file output.

use std::path::Path;

use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ybs_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize logging with the provided configuration
///
/// `YBS_LOG`, when set, overrides the configured level with a full filter
/// directive (e.g. `ybs_application=debug,info`). Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("ybs.log")),
        )
    });

    let registry = Registry::default().with(filter);

    // Layer types differ per branch
    let result = match (config.json_format, file_appender) {
        (true, Some(appender)) => registry
            .with(fmt::layer().json().with_target(true))
            .with(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false),
            )
            .try_init(),
        (true, None) => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        (false, Some(appender)) => registry
            .with(fmt::layer().with_target(true))
            .with(fmt::layer().with_writer(appender).with_ansi(false))
            .try_init(),
        (false, None) => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    result.map_err(|e| Error::config(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
