//! Configuration management.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `TASKIRA_STORE` - Optional. Store backend, `sqlite` or `memory`. Defaults to `sqlite`.
//! - `TASKIRA_DATA_DIR` - Optional. Directory for the SQLite database. Defaults to `.taskira`.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::TaskStoreType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Store backend to use
    pub store_type: TaskStoreType,

    /// Directory holding the SQLite database
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let store_type = std::env::var("TASKIRA_STORE")
            .map(|s| TaskStoreType::from_str(&s))
            .unwrap_or_default();

        let data_dir = std::env::var("TASKIRA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".taskira"));

        Ok(Self {
            host,
            port,
            store_type,
            data_dir,
        })
    }
}
