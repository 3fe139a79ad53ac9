//! Error handling for the Strata core layer.
//!
//! Error types are defined with `thiserror`. The main error type for this
//! crate is [`CoreError`], which wraps the more specific [`ConfigError`] and
//! [`LoggingError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Strata status bar.
///
/// This enum represents all errors that can occur in the core layer. Higher
/// layers use it as a common error type, usually by wrapping one of the more
/// specific variants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input provided to a constructor or function.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file contained invalid TOML.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contained invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed or configured.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter string could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}
