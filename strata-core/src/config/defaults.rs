//! Default configuration values.
//!
//! Used by `serde`'s `default` attribute in the configuration structures when
//! a field is absent from the configuration file.

use std::path::PathBuf;

/// Default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Default log file path (`None`, file logging disabled).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Default application icon size in pixels.
pub(super) fn default_icon_size() -> u32 {
    16
}

/// Default spacing between indicators in pixels.
pub(super) fn default_spacing() -> u32 {
    4
}

/// Default mount priority on the host panel.
pub(super) fn default_priority() -> u32 {
    2
}

/// Default panel side (`"left"`).
pub(super) fn default_side() -> String {
    "left".to_string()
}
