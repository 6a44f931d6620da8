//! Configuration for locating the external message store
//!
//! Supports resolving the message database path from (in order of priority):
//! 1. JSON file (~/.config/courier/sms-store.json)
//! 2. Runtime environment variable (fallback)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Store config filename in the Courier config directory
const STORE_FILE: &str = "sms-store.json";

/// Environment variable naming the message database path
const STORE_ENV: &str = "COURIER_SMS_DB";

/// Location of the platform message database
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

/// On-disk config file format
#[derive(Deserialize)]
struct StoreConfigFile {
    db_path: PathBuf,
}

impl StoreConfig {
    /// Resolve the store location using the following priority:
    /// 1. JSON file (~/.config/courier/sms-store.json)
    /// 2. COURIER_SMS_DB environment variable
    pub fn load() -> Result<Self> {
        if config::config_exists(STORE_FILE) {
            let file: StoreConfigFile = config::load_json(STORE_FILE)?;
            return Ok(Self {
                db_path: file.db_path,
            });
        }

        Self::from_env()
    }

    /// Load the store location from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file: StoreConfigFile = config::load_json_file(path)?;
        Ok(Self {
            db_path: file.db_path,
        })
    }

    /// Parse the store location from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: StoreConfigFile =
            serde_json::from_str(json).context("Failed to parse store config JSON")?;
        Ok(Self {
            db_path: file.db_path,
        })
    }

    /// Load the store location from the environment
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var(STORE_ENV)
            .with_context(|| format!("{STORE_ENV} environment variable not set"))?;
        Ok(Self {
            db_path: PathBuf::from(db_path),
        })
    }

    /// Get the default config file path (~/.config/courier/sms-store.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(STORE_FILE)
    }

    /// Check if a store location is available (file or env var)
    pub fn is_available() -> bool {
        config::config_exists(STORE_FILE) || std::env::var(STORE_ENV).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_config() {
        let json = r#"{ "db_path": "/data/messages/mmssms.db" }"#;
        let cfg = StoreConfig::from_json(json).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/data/messages/mmssms.db"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{ "other": "/tmp/x" }"#;
        assert!(StoreConfig::from_json(json).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms-store.json");
        std::fs::write(&path, r#"{ "db_path": "/tmp/store.db" }"#).unwrap();

        let cfg = StoreConfig::from_file(&path).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/store.db"));
    }
}
