//! Per-catalog configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::store::StoreOptions;

/// File name of the configuration under the catalog directory.
pub const CONFIG_FILE: &str = "config.json";

/// Catalog-level settings, read from `config.json` next to the data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject duplicate names within a store. Off by default: the catalog
    /// historically allows synonyms, and existing data may contain them.
    pub unique_names: bool,

    /// Currency symbol used when displaying amounts.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unique_names: false,
            currency: "R$".to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the catalog directory. A missing or
    /// unreadable file falls back to defaults; configuration is advisory,
    /// unlike the data files it never gates opening the catalog.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write this configuration to the catalog directory.
    pub fn write(&self, dir: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(dir.join(CONFIG_FILE), json)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            unique_names: self.unique_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_absent() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path());
        assert!(!config.unique_names);
        assert_eq!(config.currency, "R$");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let config = Config {
            unique_names: true,
            currency: "$".to_string(),
        };
        config.write(dir.path()).unwrap();

        let loaded = Config::load(dir.path());
        assert!(loaded.unique_names);
        assert_eq!(loaded.currency, "$");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "unique_names": true }"#,
        )
        .unwrap();

        let loaded = Config::load(dir.path());
        assert!(loaded.unique_names);
        assert_eq!(loaded.currency, "R$");
    }
}
