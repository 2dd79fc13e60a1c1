//! # Domain Types
//!
//! Core domain types used throughout Pantry.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │  InventoryItem  │   │ RecipeIngredient│   │    CookRequest      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name           │   │  name           │   │  recipe_name?       │   │
//! │  │  quantity (f64) │   │  quantity_text  │   │  available [..]     │   │
//! │  │  status         │   │  "0.5 kg"       │   │  missing   [..]     │   │
//! │  │  unit?          │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │   ItemStatus    │   │          ConsumptionResult               │    │
//! │  │  ─────────────  │   │  outcome: committed | rejected | failed  │    │
//! │  │  Normal         │   │  consumed_items      (committed only)    │    │
//! │  │  UsedUp         │   │  missing_ingredients (rejected only)     │    │
//! │  └─────────────────┘   │  updated_inventory   (committed only)    │    │
//! │                        │  message             (failed only)       │    │
//! │                        └──────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All wire names are camelCase so snapshots written by the household web
//! app load unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::quantity::deserialize_lenient_quantity;

// =============================================================================
// Item Status
// =============================================================================

/// Lifecycle tag of an inventory item.
///
/// Always derived from the quantity: `UsedUp` exactly when the quantity is 0.
/// A status read from JSON is overwritten on decode and import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Item has some quantity left.
    #[default]
    Normal,
    /// Remaining quantity reached zero.
    UsedUp,
}

impl ItemStatus {
    /// The status an item holding `quantity` must carry.
    #[inline]
    pub fn for_quantity(quantity: f64) -> Self {
        if quantity == 0.0 {
            ItemStatus::UsedUp
        } else {
            ItemStatus::Normal
        }
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// One tracked food item in a household's inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Display name, matched case-insensitively.
    pub name: String,

    /// Remaining amount. Stored strings such as `"1.5 kg"` are coerced.
    #[serde(default, deserialize_with = "deserialize_lenient_quantity")]
    pub quantity: f64,

    #[serde(default)]
    pub status: ItemStatus,

    /// Display-only unit label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub unit: Option<String>,
}

impl InventoryItem {
    /// Creates an item whose status follows its quantity.
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        InventoryItem {
            name: name.into(),
            quantity,
            status: ItemStatus::for_quantity(quantity),
            unit: None,
        }
    }

    /// Sets the display unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[inline]
    pub fn is_used_up(&self) -> bool {
        self.status == ItemStatus::UsedUp
    }

    /// Overwrites `status` with the one implied by `quantity`.
    pub fn derive_status(&mut self) {
        self.status = ItemStatus::for_quantity(self.quantity);
    }
}

// =============================================================================
// Recipe Ingredient
// =============================================================================

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,

    /// Free-form amount, e.g. `"0.5 kg"`.
    #[serde(default)]
    pub quantity_text: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity_text: impl Into<String>) -> Self {
        RecipeIngredient {
            name: name.into(),
            quantity_text: quantity_text.into(),
        }
    }
}

// =============================================================================
// Cook Request
// =============================================================================

/// Input to the reconciliation engine.
///
/// The upstream inventory lookup has already split the recipe into
/// ingredients it believes are present and ingredients it knows are absent.
/// The resolver re-checks the former and trusts the latter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CookRequest {
    /// Optional label used in logs and the cook log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recipe_name: Option<String>,

    #[serde(default)]
    pub available_ingredients: Vec<RecipeIngredient>,

    #[serde(default)]
    pub missing_ingredients: Vec<RecipeIngredient>,
}

impl CookRequest {
    pub fn new(available: Vec<RecipeIngredient>, missing: Vec<RecipeIngredient>) -> Self {
        CookRequest {
            recipe_name: None,
            available_ingredients: available,
            missing_ingredients: missing,
        }
    }

    pub fn named(mut self, recipe_name: impl Into<String>) -> Self {
        self.recipe_name = Some(recipe_name.into());
        self
    }
}

// =============================================================================
// Consumption Result
// =============================================================================

/// Outcome kind of a cook attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Inventory was updated.
    Committed,
    /// At least one ingredient is unavailable; nothing changed.
    Rejected,
    /// The snapshot could not be read or written; nothing changed.
    Failed,
}

/// One inventory item touched by a committed cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedItem {
    /// Name as stored in the inventory.
    pub name: String,
    /// Amount actually drawn from the item (never more than it held).
    pub consumed_amount: f64,
    pub remaining_amount: f64,
    pub status: ItemStatus,
    /// Unit text from the recipe line, for display.
    pub unit: String,
}

/// Result returned to the caller of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionResult {
    pub outcome: Outcome,
    pub consumed_items: Vec<ConsumedItem>,
    pub missing_ingredients: Vec<RecipeIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub updated_inventory: Option<Vec<InventoryItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl ConsumptionResult {
    pub fn committed(consumed: Vec<ConsumedItem>, updated_inventory: Vec<InventoryItem>) -> Self {
        ConsumptionResult {
            outcome: Outcome::Committed,
            consumed_items: consumed,
            missing_ingredients: Vec::new(),
            updated_inventory: Some(updated_inventory),
            message: None,
        }
    }

    pub fn rejected(missing: Vec<RecipeIngredient>) -> Self {
        ConsumptionResult {
            outcome: Outcome::Rejected,
            consumed_items: Vec::new(),
            missing_ingredients: missing,
            updated_inventory: None,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ConsumptionResult {
            outcome: Outcome::Failed,
            consumed_items: Vec::new(),
            missing_ingredients: Vec::new(),
            updated_inventory: None,
            message: Some(message.into()),
        }
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.outcome == Outcome::Committed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_status_follows_quantity() {
        assert_eq!(InventoryItem::new("Trứng", 6.0).status, ItemStatus::Normal);
        assert!(InventoryItem::new("Trứng", 0.0).is_used_up());
    }

    #[test]
    fn test_item_wire_format() {
        let item = InventoryItem::new("Cá hồi", 0.0).with_unit("kg");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Cá hồi", "quantity": 0.0, "status": "used_up", "unit": "kg"})
        );
    }

    #[test]
    fn test_item_accepts_string_quantity_and_missing_status() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"name": "Sữa", "quantity": "1.5 lít"}"#).unwrap();
        assert_eq!(item.quantity, 1.5);
        assert_eq!(item.status, ItemStatus::Normal);
        assert_eq!(item.unit, None);
    }

    #[test]
    fn test_derive_status_overrides_stored_tag() {
        let mut stocked = InventoryItem {
            name: "Gạo".to_string(),
            quantity: 5.0,
            status: ItemStatus::UsedUp,
            unit: None,
        };
        stocked.derive_status();
        assert_eq!(stocked.status, ItemStatus::Normal);

        let mut empty = InventoryItem {
            name: "Muối".to_string(),
            quantity: 0.0,
            status: ItemStatus::Normal,
            unit: None,
        };
        empty.derive_status();
        assert!(empty.is_used_up());
    }

    #[test]
    fn test_result_omits_absent_fields() {
        let json = serde_json::to_value(ConsumptionResult::rejected(Vec::new())).unwrap();
        assert!(json.get("updatedInventory").is_none());
        assert!(json.get("message").is_none());

        let json = serde_json::to_value(ConsumptionResult::failed("boom")).unwrap();
        assert_eq!(json["message"], "boom");
        assert!(json.get("updatedInventory").is_none());
    }

    #[test]
    fn test_cook_request_wire_format() {
        let request: CookRequest = serde_json::from_str(
            r#"{
                "availableIngredients": [{"name": "Cà chua", "quantityText": "0.5 kg"}],
                "missingIngredients": [{"name": "Trứng", "quantityText": "2"}]
            }"#,
        )
        .unwrap();

        assert_eq!(request.recipe_name, None);
        assert_eq!(request.available_ingredients[0].quantity_text, "0.5 kg");
        assert_eq!(request.missing_ingredients[0].name, "Trứng");
    }

    #[test]
    fn test_result_constructors() {
        let rejected = ConsumptionResult::rejected(vec![RecipeIngredient::new("Trứng", "2")]);
        assert_eq!(rejected.outcome, Outcome::Rejected);
        assert!(rejected.updated_inventory.is_none());
        assert!(rejected.consumed_items.is_empty());

        let failed = ConsumptionResult::failed("no snapshot");
        assert_eq!(failed.outcome, Outcome::Failed);
        assert_eq!(failed.message.as_deref(), Some("no snapshot"));
        assert!(!failed.is_committed());
    }
}
