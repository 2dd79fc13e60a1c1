//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  ├── CoreError        - Snapshot decoding / domain errors              │
//! │  └── ValidationError  - Import validation failures                     │
//! │                                                                         │
//! │  pantry-db errors (separate crate)                                     │
//! │  └── DbError          - Storage failures, version conflicts            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → Outcome::Failed         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A recipe that cannot be cooked is NOT an error: it is reported as
//! [`Outcome::Rejected`](crate::types::Outcome::Rejected). Only infrastructure
//! faults travel through these types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persisted snapshot payload could not be decoded.
    ///
    /// ## When This Occurs
    /// - Payload is not JSON
    /// - Payload is JSON but not a list of inventory items
    #[error("Inventory snapshot is unreadable: {0}")]
    SnapshotUnreadable(String),

    /// A snapshot could not be encoded for storage.
    #[error("Inventory snapshot could not be encoded: {0}")]
    SnapshotEncoding(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised when importing inventory.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., NaN quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An item at a given snapshot position failed validation.
    #[error("item #{index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SnapshotUnreadable("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.to_string(),
            "Inventory snapshot is unreadable: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Item {
            index: 2,
            source: Box::new(ValidationError::MustBeNonNegative {
                field: "quantity".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "item #2: quantity must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
