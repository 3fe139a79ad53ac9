//! Logging setup for the Strata status bar, built on the `tracing` ecosystem.
//!
//! Two entry points:
//!
//! - [`init_minimal_logging`]: stderr-only, `RUST_LOG`-filtered, safe to call
//!   repeatedly. Used by tests and during early startup before configuration
//!   is available.
//! - [`init_logging`]: full setup from a [`LoggingConfig`]: console layer plus
//!   an optional daily-rolling file layer, in text or JSON format.

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

/// Keeps the file writer's worker guard alive for the process lifetime so
/// buffered log lines are flushed on shutdown.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup directing messages to `stderr`.
///
/// Filters based on the `RUST_LOG` environment variable, defaulting to "info".
/// Errors (e.g. a global subscriber already being set) are ignored, so this is
/// safe to call from every test.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates the optional file layer with a daily-rolling appender.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("strata.log")),
    );
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: Box<dyn Layer<Registry> + Send + Sync + 'static> = match format {
        "json" => Box::new(fmt::layer().json().with_writer(writer).with_ansi(false)),
        _ => Box::new(fmt::layer().with_writer(writer).with_ansi(false)),
    };
    Ok((layer, guard))
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// # Errors
///
/// Returns `CoreError::Logging` if the level is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        invalid => {
            return Err(CoreError::Logging(LoggingError::InitializationFailure(
                format!("invalid log level in config: {}", invalid),
            )));
        }
    };

    let stdout_layer: Box<dyn Layer<Registry> + Send + Sync + 'static> =
        match config.format.to_lowercase().as_str() {
            "json" => Box::new(
                fmt::layer()
                    .json()
                    .with_writer(stdout)
                    .with_ansi(false)
                    .with_filter(EnvFilter::new(level.to_string())),
            ),
            _ => Box::new(
                fmt::layer()
                    .with_writer(stdout)
                    .with_ansi(atty::is(atty::Stream::Stdout))
                    .with_filter(EnvFilter::new(level.to_string())),
            ),
        };

    let mut layers = vec![stdout_layer];
    let mut file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (layer, guard) = create_file_layer(log_path, &config.format.to_lowercase())?;
        layers.push(Box::new(layer.with_filter(EnvFilter::new(level.to_string()))));
        file_guard = Some(guard);
    }

    Registry::default().with(layers).try_init().map_err(|e| {
        CoreError::Logging(LoggingError::InitializationFailure(format!(
            "failed to set global tracing subscriber: {}",
            e
        )))
    })?;

    if let Ok(mut slot) = LOG_WORKER_GUARD.lock() {
        *slot = file_guard;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn minimal_logging_is_repeatable() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("info message after init_minimal_logging");
    }

    #[test]
    fn create_file_layer_makes_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("logs/strata.log");
        assert!(!nested.parent().unwrap().exists());

        let result = create_file_layer(&nested, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(nested.parent().unwrap().exists());
    }

    #[test]
    fn create_file_layer_json_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strata.log");
        let result = create_file_layer(&path, "json");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
    }

    #[test]
    fn init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        match init_logging(&config) {
            Err(CoreError::Logging(LoggingError::InitializationFailure(msg))) => {
                assert!(msg.contains("supertrace"));
            }
            other => panic!("expected InitializationFailure, got {:?}", other),
        }
    }
}
