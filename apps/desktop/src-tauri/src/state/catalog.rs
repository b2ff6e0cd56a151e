//! # Catalog State
//!
//! The topic catalog, loaded and validated once at startup.
//!
//! ## Loading Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Resolution                                  │
//! │                                                                         │
//! │  1. ATTEST_CATALOG_PATH env var ──────► explicit file, must exist      │
//! │  2. <app data dir>/catalog.json ──────► optional site override         │
//! │     • macOS:   ~/Library/Application Support/com.attest.desktop/       │
//! │     • Windows: %APPDATA%\attest\desktop\                                │
//! │     • Linux:   ~/.local/share/attest-desktop/                           │
//! │  3. Bundled default catalog ──────────► compiled in, always present    │
//! │                                                                         │
//! │  Whatever the source, the document passes the same parse + integrity   │
//! │  validation; a bad catalog aborts startup rather than starting with    │
//! │  broken content.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The catalog is read-only after initialization, so no mutex is needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;

use attest_core::Catalog;

/// Catalog bundled into the binary, used when no override file exists.
const DEFAULT_CATALOG: &str = include_str!("../../assets/default_catalog.json");

/// Tauri-managed catalog state. Frozen for the process lifetime.
#[derive(Debug)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Wraps an already-validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Loads the catalog following the resolution order above.
    ///
    /// `path_override` comes from configuration (the `ATTEST_CATALOG_PATH`
    /// env var); when set, that file is required to exist and parse.
    pub fn load(path_override: Option<&PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = path_override {
            info!(?path, "Loading catalog from configured path");
            let json = std::fs::read_to_string(path)?;
            return Ok(CatalogState::new(Catalog::from_json(&json)?));
        }

        if let Some(path) = Self::site_catalog_path() {
            if path.exists() {
                info!(?path, "Loading catalog from app data directory");
                let json = std::fs::read_to_string(&path)?;
                return Ok(CatalogState::new(Catalog::from_json(&json)?));
            }
        }

        info!("Loading bundled default catalog");
        Ok(CatalogState::new(Catalog::from_json(DEFAULT_CATALOG)?))
    }

    /// The optional site-override location in the platform app data dir.
    fn site_catalog_path() -> Option<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "attest", "desktop")?;
        Some(proj_dirs.data_dir().join("catalog.json"))
    }

    /// Read access to the validated catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        // The compiled-in default must always pass the integrity rules
        let catalog = Catalog::from_json(DEFAULT_CATALOG).unwrap();
        assert!(catalog.count() >= 1);

        for topic in catalog.topics() {
            assert!(!topic.questions.is_empty());
        }
    }

    #[test]
    fn test_bundled_catalog_question_counts() {
        let catalog = Catalog::from_json(DEFAULT_CATALOG).unwrap();
        let first = catalog.get(0).unwrap();
        assert_eq!(first.id, "block1");
        assert_eq!(first.question_count(), 4);
    }
}
