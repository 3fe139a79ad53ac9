//! Configuration data structures for the Strata status bar.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to the values in [`super::defaults`]; unknown
//! fields are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use strata_core::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert_eq!(config.file_path, None);
/// assert_eq!(config.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum log level to record. Valid values (case-insensitive):
    /// "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a log file. `None` disables file logging.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Log message format: "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Configuration for the workspace indicator row itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Pixel size requested from the icon source for application icons.
    #[serde(default = "defaults::default_icon_size")]
    pub icon_size: u32,
    /// Pixels of spacing between indicators in the row.
    #[serde(default = "defaults::default_spacing")]
    pub spacing: u32,
    /// Ordering priority passed to the host panel when mounting the row.
    #[serde(default = "defaults::default_priority")]
    pub priority: u32,
    /// Panel side the row is mounted on: "left", "center", or "right".
    #[serde(default = "defaults::default_side")]
    pub side: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            icon_size: defaults::default_icon_size(),
            spacing: defaults::default_spacing(),
            priority: defaults::default_priority(),
            side: defaults::default_side(),
        }
    }
}

/// Root configuration structure for the Strata status bar.
///
/// ```
/// use strata_core::config::CoreConfig;
///
/// let config: CoreConfig = toml::from_str(
///     r#"
///     [logging]
///     level = "warn"
///     "#,
/// ).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.panel.icon_size, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Configuration for the indicator row.
    #[serde(default)]
    pub panel: PanelConfig,
}
