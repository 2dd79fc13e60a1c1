//! CLI configuration.
//!
//! Loaded from environment variables with fallback to defaults:
//!
//! | Variable                 | Default                              |
//! |--------------------------|--------------------------------------|
//! | `PANTRY_DB_PATH`         | platform data dir + `pantry.db`      |
//! | `PANTRY_HOUSEHOLD_ID`    | `DEFAULT_HOUSEHOLD_ID`               |
//! | `PANTRY_MAX_CONNECTIONS` | 5                                    |
//! | `PANTRY_HISTORY_LIMIT`   | 20                                   |

use std::path::PathBuf;

use directories::ProjectDirs;
use pantry_core::DEFAULT_HOUSEHOLD_ID;
use serde::Serialize;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PantryConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Household whose snapshot commands act on
    pub household_id: String,

    /// Pool size
    pub max_connections: u32,

    /// Default number of history entries
    pub history_limit: u32,
}

impl PantryConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup("PANTRY_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        Ok(PantryConfig {
            db_path,

            household_id: lookup("PANTRY_HOUSEHOLD_ID")
                .unwrap_or_else(|| DEFAULT_HOUSEHOLD_ID.to_string()),

            max_connections: lookup("PANTRY_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PANTRY_MAX_CONNECTIONS".to_string()))?,

            history_limit: lookup("PANTRY_HISTORY_LIMIT")
                .unwrap_or_else(|| "20".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PANTRY_HISTORY_LIMIT".to_string()))?,
        })
    }
}

/// Platform data directory for the database.
///
/// - **macOS**: `~/Library/Application Support/com.pantry.pantry/pantry.db`
/// - **Windows**: `%APPDATA%\pantry\pantry\data\pantry.db`
/// - **Linux**: `~/.local/share/pantry/pantry.db`
fn default_db_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "pantry", "pantry").ok_or(ConfigError::NoDataDir)?;
    Ok(proj_dirs.data_dir().join("pantry.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory; set PANTRY_DB_PATH")]
    NoDataDir,
}
