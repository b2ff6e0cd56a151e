//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ATTEST_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use attest_core::PASS_THRESHOLD_PERCENT;

/// Application configuration.
///
/// ## Fields
/// All fields have sensible defaults for development. The pass threshold
/// defaults to the core's named constant and is only overridden for
/// internal pilots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Organization name (displayed on the welcome screen)
    pub organization_name: String,

    /// Score percentage required to pass a topic
    pub pass_threshold_percent: u8,

    /// Explicit catalog file path, when configured
    /// (skips the app-data-dir and bundled-catalog fallbacks)
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Organization: "Attest Dev Organization"
    /// - Pass threshold: 80%
    /// - Catalog: resolved via app data dir / bundled default
    fn default() -> Self {
        ConfigState {
            organization_name: "Attest Dev Organization".to_string(),
            pass_threshold_percent: PASS_THRESHOLD_PERCENT,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ATTEST_ORG_NAME`: Override organization name
    /// - `ATTEST_PASS_THRESHOLD`: Override pass threshold (e.g., "70")
    /// - `ATTEST_CATALOG_PATH`: Explicit catalog file path
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(name) = std::env::var("ATTEST_ORG_NAME") {
            config.organization_name = name;
        }

        if let Ok(threshold_str) = std::env::var("ATTEST_PASS_THRESHOLD") {
            match parse_threshold(&threshold_str) {
                Some(threshold) => config.pass_threshold_percent = threshold,
                None => warn!(
                    value = %threshold_str,
                    "Ignoring ATTEST_PASS_THRESHOLD: expected an integer 0-100"
                ),
            }
        }

        if let Ok(path) = std::env::var("ATTEST_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }
}

/// Parses a threshold percentage, accepting only 0..=100.
fn parse_threshold(value: &str) -> Option<u8> {
    value.trim().parse::<u8>().ok().filter(|t| *t <= 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_matches_core_constant() {
        let config = ConfigState::default();
        assert_eq!(config.pass_threshold_percent, 80);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_parse_threshold_accepts_valid_range() {
        assert_eq!(parse_threshold("70"), Some(70));
        assert_eq!(parse_threshold(" 100 "), Some(100));
        assert_eq!(parse_threshold("0"), Some(0));
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert_eq!(parse_threshold("101"), None);
        assert_eq!(parse_threshold("-5"), None);
        assert_eq!(parse_threshold("eighty"), None);
        assert_eq!(parse_threshold(""), None);
    }
}
