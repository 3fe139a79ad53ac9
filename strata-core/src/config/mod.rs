//! Configuration management for the Strata status bar.
//!
//! - [`types`]: the configuration struct definitions ([`CoreConfig`],
//!   [`LoggingConfig`], [`PanelConfig`]). These define the schema of the
//!   TOML configuration file.
//! - [`defaults`]: default values used when a configuration file is missing
//!   or incomplete.
//! - [`loader`]: the [`ConfigLoader`], which locates, parses, and validates
//!   the configuration.
//!
//! Loading goes through `ConfigLoader::load()` (XDG config directory) or
//! `ConfigLoader::load_from()` (explicit path). A missing file yields the
//! default configuration; a malformed or invalid one is an error.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, PanelConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn core_config_default_matches_section_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file_path, None);
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.panel.icon_size, 16);
        assert_eq!(config.panel.spacing, 4);
        assert_eq!(config.panel.priority, 2);
        assert_eq!(config.panel.side, "left");
    }

    #[test]
    fn core_config_deserialize_minimal() {
        let config: CoreConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            "#,
        )
        .expect("minimal config should deserialize");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.panel.icon_size, 16);
    }

    #[test]
    fn core_config_deserialize_full() {
        let config: CoreConfig = toml::from_str(
            r#"
            [logging]
            level = "trace"
            file_path = "/var/log/strata.log"
            format = "json"

            [panel]
            icon_size = 24
            spacing = 8
            priority = 1
            side = "right"
            "#,
        )
        .expect("full config should deserialize");
        assert_eq!(config.logging.level, "trace");
        assert_eq!(
            config.logging.file_path,
            Some(PathBuf::from("/var/log/strata.log"))
        );
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.panel.icon_size, 24);
        assert_eq!(config.panel.side, "right");
    }

    #[test]
    fn core_config_rejects_unknown_fields() {
        let result: Result<CoreConfig, _> = toml::from_str(
            r#"
            [logging]
            level = "info"
            verbosity = 3
            "#,
        );
        assert!(result.is_err());
    }
}
