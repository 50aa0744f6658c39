//! Configuration store
//!
//! Loads and saves the persisted settings record used to fill unspecified
//! parameters: region, profile, and optional default queue/bucket. The file
//! lives in TOML format at ~/.config/awsutil/config.toml.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Persisted settings record
///
/// All fields default to the empty string; a record with both `region` and
/// `profile` empty is "unset" but still structurally valid. The default
/// queue/bucket fields, when set, skip a prompt step in the menus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// AWS region override (empty = let the SDK resolve it)
    #[serde(default)]
    pub region: String,

    /// AWS profile override (empty = let the SDK resolve it)
    #[serde(default)]
    pub profile: String,

    /// Default queue URL offered when selecting a queue
    #[serde(default)]
    pub default_queue: String,

    /// Default bucket name offered when selecting a bucket
    #[serde(default)]
    pub default_bucket: String,
}

impl Settings {
    /// Whether any session override is present
    pub fn is_configured(&self) -> bool {
        !self.region.is_empty() || !self.profile.is_empty()
    }
}

/// Handles loading and saving the settings file
#[derive(Debug)]
pub struct SettingsStore {
    config_path: PathBuf,
}

impl SettingsStore {
    /// Create a store over the default config path
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Persistence("Could not determine config directory".into()))?;
        let config_path = config_dir.join("awsutil").join("config.toml");
        Ok(Self { config_path })
    }

    /// Create a store over a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the settings file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load settings from disk
    ///
    /// An absent or empty file is an expected condition and yields the
    /// all-default record, not an error.
    pub fn load(&self) -> Result<Settings> {
        if !self.config_path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.config_path)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        toml::from_str(&content).map_err(|e| Error::Persistence(e.to_string()))
    }

    /// Save settings to disk, creating parent directories as needed
    ///
    /// Any I/O or serialization fault propagates to the caller.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Persistence(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(settings).map_err(|e| Error::Persistence(e.to_string()))?;
        std::fs::write(&self.config_path, content).map_err(|e| Error::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (SettingsStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        (SettingsStore::with_path(config_path), temp_dir)
    }

    #[test]
    fn test_default_settings_are_unset() {
        let settings = Settings::default();
        assert!(!settings.is_configured());
        assert!(settings.region.is_empty());
        assert!(settings.profile.is_empty());
        assert!(settings.default_queue.is_empty());
        assert!(settings.default_bucket.is_empty());
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let (store, _temp_dir) = temp_store();
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let (store, _temp_dir) = temp_store();
        std::fs::write(store.config_path(), "").unwrap();
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (store, _temp_dir) = temp_store();

        let settings = Settings {
            region: "eu-west-1".into(),
            profile: "dev".into(),
            default_queue: String::new(),
            default_bucket: "artifacts".into(),
        };

        store.save(&settings).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, settings);
        assert_eq!(loaded.region, "eu-west-1");
        assert_eq!(loaded.profile, "dev");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let (store, _temp_dir) = temp_store();
        std::fs::write(store.config_path(), "region = \"us-east-1\"\n").unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.region, "us-east-1");
        assert!(settings.profile.is_empty());
        assert!(settings.default_queue.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deep").join("config.toml");
        let store = SettingsStore::with_path(nested);

        store.save(&Settings::default()).unwrap();
        assert!(store.config_path().exists());
    }
}
