//! Configuration loading for the Strata status bar.
//!
//! [`ConfigLoader`] locates `config.toml`, parses it, applies defaults for
//! missing fields, and validates the result. A missing file is not an error;
//! it yields the default configuration, per the usual desktop convention of
//! running unconfigured out of the box.

use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use tracing::{debug, info};

use super::types::CoreConfig;
use crate::error::{ConfigError, CoreError};

const CONFIG_FILE_NAME: &str = "config.toml";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];
const VALID_PANEL_SIDES: [&str; 3] = ["left", "center", "right"];

/// Namespace struct for configuration loading logic.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the user's XDG config
    /// directory (`$XDG_CONFIG_HOME/strata/config.toml`).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the config directory cannot be
    /// determined, the file cannot be read (other than not existing), the
    /// TOML is malformed, or validation fails.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let dirs = ProjectDirs::from("", "", "strata").ok_or(CoreError::Config(
            ConfigError::DirectoryUnavailable {
                dir_type: "XDG config home".to_string(),
            },
        ))?;
        let path = dirs.config_dir().join(CONFIG_FILE_NAME);
        Self::load_from(&path)
    }

    /// Loads and validates the configuration from an explicit path.
    ///
    /// A file that does not exist yields `CoreConfig::default()`.
    pub fn load_from(path: &Path) -> Result<CoreConfig, CoreError> {
        let config = match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "parsing configuration file");
                toml::from_str::<CoreConfig>(&content)
                    .map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no configuration file, using defaults");
                CoreConfig::default()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: PathBuf::from(path),
                    source: e,
                }));
            }
        };
        Self::validate(config).map_err(CoreError::Config)
    }

    /// Normalizes and validates a parsed configuration.
    ///
    /// Log level, log format, and panel side are lowercased before being
    /// checked against their respective value sets.
    fn validate(mut config: CoreConfig) -> Result<CoreConfig, ConfigError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "invalid log level '{}', expected one of {:?}",
                config.logging.level, VALID_LOG_LEVELS
            )));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "invalid log format '{}', expected one of {:?}",
                config.logging.format, VALID_LOG_FORMATS
            )));
        }

        config.panel.side = config.panel.side.to_lowercase();
        if !VALID_PANEL_SIDES.contains(&config.panel.side.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "invalid panel side '{}', expected one of {:?}",
                config.panel.side, VALID_PANEL_SIDES
            )));
        }

        if config.panel.icon_size == 0 {
            return Err(ConfigError::ValidationError(
                "panel icon_size must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn load_from_parses_and_normalizes() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [logging]
            level = "DEBUG"
            format = "JSON"

            [panel]
            side = "Right"
            "#,
        );
        let config = ConfigLoader::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.panel.side, "right");
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "this is not toml = =");
        match ConfigLoader::load_from(&path) {
            Err(CoreError::Config(ConfigError::ParseError(_))) => {}
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn load_from_rejects_invalid_level() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [logging]
            level = "supertrace"
            "#,
        );
        match ConfigLoader::load_from(&path) {
            Err(CoreError::Config(ConfigError::ValidationError(msg))) => {
                assert!(msg.contains("supertrace"));
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn load_from_rejects_invalid_side_and_zero_icon_size() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [panel]
            side = "top"
            "#,
        );
        assert!(matches!(
            ConfigLoader::load_from(&path),
            Err(CoreError::Config(ConfigError::ValidationError(_)))
        ));

        let path = write_config(
            &dir,
            r#"
            [panel]
            icon_size = 0
            "#,
        );
        assert!(matches!(
            ConfigLoader::load_from(&path),
            Err(CoreError::Config(ConfigError::ValidationError(_)))
        ));
    }
}
