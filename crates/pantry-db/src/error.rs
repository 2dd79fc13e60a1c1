//! # Storage Error Types
//!
//! Error types for snapshot storage and the cook log.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / CoreError / serde_json::Error                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Kitchen ← Turns any DbError into Outcome::Failed { message }          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pantry_core::{CoreError, ValidationError};
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// No inventory snapshot has ever been stored for the household.
    #[error("No inventory snapshot stored for household {household_id}")]
    SnapshotMissing { household_id: String },

    /// A snapshot exists but its payload cannot be decoded.
    #[error("Inventory snapshot is corrupt: {0}")]
    SnapshotCorrupt(String),

    /// The snapshot changed between load and save.
    ///
    /// ## When This Occurs
    /// Two writers loaded the same version; the second save loses.
    /// The caller may reload and retry.
    #[error("Inventory snapshot for household {household_id} changed (expected version {expected})")]
    VersionConflict { household_id: String, expected: i64 },

    /// Snapshot rejected by import validation.
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A payload could not be (de)serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a SnapshotMissing error.
    pub fn snapshot_missing(household_id: impl Into<String>) -> Self {
        DbError::SnapshotMissing {
            household_id: household_id.into(),
        }
    }

    /// Creates a VersionConflict error.
    pub fn version_conflict(household_id: impl Into<String>, expected: i64) -> Self {
        DbError::VersionConflict {
            household_id: household_id.into(),
            expected,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::Serialization(err.to_string())
    }
}

impl From<CoreError> for DbError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SnapshotUnreadable(reason) => DbError::SnapshotCorrupt(reason),
            CoreError::SnapshotEncoding(reason) => DbError::Serialization(reason),
            CoreError::Validation(e) => DbError::Invalid(e),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: DbError = CoreError::SnapshotUnreadable("bad".to_string()).into();
        assert!(matches!(err, DbError::SnapshotCorrupt(_)));

        let err: DbError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.to_string(), "Invalid snapshot: name is required");
    }

    #[test]
    fn test_row_not_found_mapping() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DbError::snapshot_missing("h1").to_string(),
            "No inventory snapshot stored for household h1"
        );
        assert_eq!(
            DbError::version_conflict("h1", 3).to_string(),
            "Inventory snapshot for household h1 changed (expected version 3)"
        );
    }
}
