//! Shared identity types used across the Strata crates.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an application known to the shell's application registry.
///
/// The identifier is a non-empty string of ASCII alphanumerics, hyphens,
/// underscores, and dots, which covers plain names (`files`) as well as
/// reverse-DNS desktop ids (`org.example.Files`). It is case-sensitive.
///
/// # Examples
///
/// ```
/// # use strata_core::types::ApplicationId;
/// let id = ApplicationId::new("org.example.Files").unwrap();
/// assert_eq!(id.value(), "org.example.Files");
/// assert!(ApplicationId::new("").is_err());
/// assert!(ApplicationId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new `ApplicationId`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if the value is empty or contains
    /// characters outside the allowed set.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        if value.is_empty() {
            return Err(CoreError::InvalidInput(
                "ApplicationId cannot be empty.".to_string(),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(CoreError::InvalidInput(format!(
                "ApplicationId '{}' contains invalid characters.",
                value
            )));
        }
        Ok(ApplicationId(value.to_string()))
    }

    /// Returns the underlying string value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

/// Opaque identifier of a toplevel window, assigned by the host shell.
///
/// Only identity matters to Strata; the numeric value is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl WindowId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WindowId {
    fn from(raw: u64) -> Self {
        WindowId(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_new_valid() {
        assert_eq!(ApplicationId::new("files").unwrap().value(), "files");
        assert_eq!(
            ApplicationId::new("org.example.Files").unwrap().value(),
            "org.example.Files"
        );
        assert_eq!(ApplicationId::new("my-app_2").unwrap().value(), "my-app_2");
    }

    #[test]
    fn application_id_new_invalid() {
        assert!(matches!(
            ApplicationId::new(""),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            ApplicationId::new("has space"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            ApplicationId::new("bang!"),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn application_id_display_and_as_ref() {
        let id = ApplicationId::new("display-test").unwrap();
        assert_eq!(format!("{}", id), "display-test");
        let s: &str = id.as_ref();
        assert_eq!(s, "display-test");
    }

    #[test]
    fn application_id_serde_round_trip() {
        let id = ApplicationId::new("org.example.Editor").unwrap();
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"org.example.Editor\"");
        let deserialized: ApplicationId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn window_id_identity() {
        let a = WindowId::from(42);
        let b = WindowId(42);
        assert_eq!(a, b);
        assert_eq!(a.value(), 42);
        assert_eq!(format!("{}", a), "42");
        assert_ne!(a, WindowId(43));
    }
}
