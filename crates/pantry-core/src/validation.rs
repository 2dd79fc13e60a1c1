//! # Validation Module
//!
//! Input validation for inventory imports.
//!
//! ## Where Validation Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Boundaries                              │
//! │                                                                         │
//! │  Import / replace snapshot                                              │
//! │  └── THIS MODULE: names present, quantities finite and >= 0,            │
//! │                   status agrees with quantity                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stored snapshot                                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cook path (resolver + reconcile)                                       │
//! │  └── NO validation: quantity text is parsed leniently, bad text → 0    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::validation::{validate_item_name, validate_item_quantity};
//!
//! assert!(validate_item_name("Cà chua").is_ok());
//! assert!(validate_item_quantity(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{InventoryItem, ItemStatus};
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an inventory item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if trimmed.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a stored quantity.
///
/// ## Rules
/// - Must be a finite number
/// - Must be >= 0 (zero is a valid, used-up item)
pub fn validate_item_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if quantity < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates one inventory item.
///
/// The status must be the one its quantity implies. Importers call
/// [`normalize_snapshot`](crate::snapshot::normalize_snapshot) first.
pub fn validate_item(item: &InventoryItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_item_quantity(item.quantity)?;

    if item.status != ItemStatus::for_quantity(item.quantity) {
        return Err(ValidationError::InvalidFormat {
            field: "status".to_string(),
            reason: "must be used_up exactly when quantity is 0".to_string(),
        });
    }

    Ok(())
}

/// Validates every item of a snapshot, reporting the first failing index.
pub fn validate_snapshot(items: &[InventoryItem]) -> ValidationResult<()> {
    for (index, item) in items.iter().enumerate() {
        validate_item(item).map_err(|source| ValidationError::Item {
            index,
            source: Box::new(source),
        })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
