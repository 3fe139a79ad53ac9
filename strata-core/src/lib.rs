//! # Strata Core Library (`strata-core`)
//!
//! Foundation layer for the Strata status bar. It provides the pieces every
//! other Strata crate leans on:
//!
//! - **Error Handling**: a unified error system through [`CoreError`] and the
//!   more specific [`ConfigError`] and [`LoggingError`].
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation, via [`ConfigLoader`] and [`CoreConfig`].
//! - **Logging**: a `tracing`-based logging setup, configurable for console
//!   and file output in text or JSON format.
//! - **Shared Identity Types**: [`ApplicationId`] and [`WindowId`], used by
//!   the domain layer to key windows to their owning applications.
//!
//! ```rust,ignore
//! use strata_core::config::ConfigLoader;
//! use strata_core::logging;
//!
//! fn main() -> Result<(), strata_core::error::CoreError> {
//!     let config = ConfigLoader::load()?;
//!     logging::init_logging(&config.logging)?;
//!     tracing::info!("strata core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, PanelConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use types::{ApplicationId, WindowId};
