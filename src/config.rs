//! Configuration management for the contact book binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. The library itself never reads the environment; only the entry
//! point does.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::FileStorage;
use crate::store::STORAGE_KEY;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the storage slot files (default: ".contacts")
    pub data_dir: PathBuf,

    /// Slot the contact list is stored under (default: "contatos")
    pub storage_key: String,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: Data directory (default: ".contacts")
    /// - `CONTACTS_STORAGE_KEY`: Storage slot name (default: "contatos")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_dir = match env::var("CONTACTS_DATA_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DATA_DIR".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => defaults.data_dir,
        };

        let storage_key = env::var("CONTACTS_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if FileStorage::validate_key(&storage_key).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_STORAGE_KEY".to_string(),
                reason: format!(
                    "Must be non-empty and use only letters, digits, '-', '_' or '.', got: {:?}",
                    storage_key
                ),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_dir,
            storage_key,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(".contacts"),
            storage_key: STORAGE_KEY.to_string(),
            log_level: "warn".to_string(),
        }
    }
}
