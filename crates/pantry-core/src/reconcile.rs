//! # Reconciliation
//!
//! Pure decision half of the commit: given a resolution, either reject the
//! cook or compute the complete post-cook snapshot.
//!
//! ## All-or-Nothing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Resolution                                                             │
//! │       │                                                                 │
//! │       ├── missing non-empty? ──► Rejected { missing }                   │
//! │       │                          (snapshot untouched, even for the      │
//! │       │                           ingredients that DID resolve)         │
//! │       ▼                                                                 │
//! │  for each resolved (ingredient, item) in order:                         │
//! │       required = parse_quantity(ingredient.quantity_text)               │
//! │       updated  = max(0, item.quantity - required)                       │
//! │       updated == 0 ──► quantity 0, status used_up                       │
//! │       otherwise   ──► quantity updated, status unchanged                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Commit { consumed, updated_inventory }                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Units are ignored: `"500 g"` subtracts 500 from whatever the item holds.
//! Persisting the new snapshot is the caller's job (see `pantry_db::Kitchen`).

use crate::quantity::Quantity;
use crate::resolver::Resolution;
use crate::types::{ConsumedItem, ConsumptionResult, InventoryItem, ItemStatus, RecipeIngredient};

/// The engine's decision for one cook request.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Something is missing; nothing may change.
    Rejected { missing: Vec<RecipeIngredient> },
    /// Everything resolved; this is the snapshot to write back.
    Commit {
        consumed: Vec<ConsumedItem>,
        updated_inventory: Vec<InventoryItem>,
    },
}

impl Reconciliation {
    /// Converts the decision into the caller-facing result.
    ///
    /// Only meaningful once a `Commit` has actually been persisted.
    pub fn into_result(self) -> ConsumptionResult {
        match self {
            Reconciliation::Rejected { missing } => ConsumptionResult::rejected(missing),
            Reconciliation::Commit {
                consumed,
                updated_inventory,
            } => ConsumptionResult::committed(consumed, updated_inventory),
        }
    }
}

/// Remaining amount after drawing `required` from `current`, floored at 0.
#[inline]
pub fn remaining_after(current: f64, required: f64) -> f64 {
    (current - required).max(0.0)
}

/// Decides the cook and, when allowed, computes the post-cook snapshot.
///
/// The input slice is never modified. Consumption is applied to a working
/// copy in resolution order, so two recipe lines matching one item draw from
/// it cumulatively.
///
/// A resolved entry whose index is out of range, or whose item no longer
/// carries the ingredient's name, means the resolution was built from a
/// different snapshot. Those ingredients are reported as missing.
pub fn reconcile(inventory: &[InventoryItem], resolution: &Resolution) -> Reconciliation {
    if !resolution.missing.is_empty() {
        return Reconciliation::Rejected {
            missing: resolution.missing.clone(),
        };
    }

    let mut updated_inventory = inventory.to_vec();
    let mut consumed = Vec::with_capacity(resolution.resolvable.len());
    let mut stale = Vec::new();

    for resolved in &resolution.resolvable {
        let item = match updated_inventory.get_mut(resolved.item_index) {
            Some(item) if item.name.to_lowercase() == resolved.ingredient.name.to_lowercase() => {
                item
            }
            _ => {
                stale.push(resolved.ingredient.clone());
                continue;
            }
        };

        let required = Quantity::parse(&resolved.ingredient.quantity_text);
        let current = item.quantity;
        let updated = remaining_after(current, required.amount);

        if updated == 0.0 {
            item.quantity = 0.0;
            item.status = ItemStatus::UsedUp;
        } else {
            item.quantity = updated;
        }

        consumed.push(ConsumedItem {
            name: item.name.clone(),
            consumed_amount: (current - item.quantity).max(0.0),
            remaining_amount: item.quantity,
            status: item.status,
            unit: required.unit,
        });
    }

    if !stale.is_empty() {
        return Reconciliation::Rejected { missing: stale };
    }

    Reconciliation::Commit {
        consumed,
        updated_inventory,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::parse_quantity;
    use crate::resolver::resolve;
    use crate::types::{CookRequest, Outcome};

    fn cook(inventory: &[InventoryItem], request: &CookRequest) -> Reconciliation {
        reconcile(inventory, &resolve(inventory, request))
    }

    #[test]
    fn test_partial_consumption_keeps_status() {
        let inventory = vec![InventoryItem::new("Cà chua", 1.0)];
        let request = CookRequest::new(vec![RecipeIngredient::new("Cà chua", "0.5 kg")], vec![]);

        let result = cook(&inventory, &request).into_result();

        assert_eq!(result.outcome, Outcome::Committed);
        let updated = result.updated_inventory.unwrap();
        assert_eq!(updated[0].quantity, 0.5);
        assert_eq!(updated[0].status, ItemStatus::Normal);
        assert_eq!(result.consumed_items[0].remaining_amount, 0.5);
        assert_eq!(result.consumed_items[0].consumed_amount, 0.5);
        assert_eq!(result.consumed_items[0].unit, "kg");
    }

    #[test]
    fn test_overdraw_floors_at_zero_and_marks_used_up() {
        let inventory = vec![InventoryItem::new("Cá hồi", 0.3)];
        let request = CookRequest::new(vec![RecipeIngredient::new("Cá hồi", "0.5 kg")], vec![]);

        let result = cook(&inventory, &request).into_result();

        let updated = result.updated_inventory.unwrap();
        assert_eq!(updated[0].quantity, 0.0);
        assert_eq!(updated[0].status, ItemStatus::UsedUp);
        assert_eq!(result.consumed_items[0].status, ItemStatus::UsedUp);
        assert_eq!(result.consumed_items[0].consumed_amount, 0.3);
    }

    #[test]
    fn test_exact_consumption_is_used_up() {
        let inventory = vec![InventoryItem::new("Trứng", 2.0)];
        let request = CookRequest::new(vec![RecipeIngredient::new("trứng", "2 quả")], vec![]);

        match cook(&inventory, &request) {
            Reconciliation::Commit {
                updated_inventory, ..
            } => {
                assert_eq!(updated_inventory[0].quantity, 0.0);
                assert!(updated_inventory[0].is_used_up());
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rejects_without_touching_resolved_items() {
        let inventory = vec![InventoryItem::new("Cà chua", 1.0)];
        let request = CookRequest::new(
            vec![RecipeIngredient::new("Cà chua", "0.5 kg")],
            vec![RecipeIngredient::new("Trứng", "2")],
        );

        let decision = cook(&inventory, &request);

        assert_eq!(
            decision,
            Reconciliation::Rejected {
                missing: vec![RecipeIngredient::new("Trứng", "2")]
            }
        );
        assert_eq!(inventory[0].quantity, 1.0);
    }

    #[test]
    fn test_unparsable_quantity_consumes_nothing() {
        let inventory = vec![InventoryItem::new("Muối", 0.5)];
        let request = CookRequest::new(vec![RecipeIngredient::new("Muối", "một ít")], vec![]);

        let result = cook(&inventory, &request).into_result();
        let updated = result.updated_inventory.unwrap();
        assert_eq!(updated[0].quantity, 0.5);
        assert_eq!(updated[0].status, ItemStatus::Normal);
        assert_eq!(result.consumed_items[0].consumed_amount, 0.0);
    }

    #[test]
    fn test_units_are_not_converted() {
        let inventory = vec![InventoryItem::new("Thịt bò", 1.0).with_unit("kg")];
        let request = CookRequest::new(vec![RecipeIngredient::new("Thịt bò", "300 g")], vec![]);

        let result = cook(&inventory, &request).into_result();
        let updated = result.updated_inventory.unwrap();
        assert_eq!(updated[0].quantity, 0.0);
        assert!(updated[0].is_used_up());
    }

    #[test]
    fn test_repeated_lines_draw_cumulatively() {
        let inventory = vec![InventoryItem::new("Hành tây", 3.0)];
        let request = CookRequest::new(
            vec![
                RecipeIngredient::new("Hành tây", "1"),
                RecipeIngredient::new("HÀNH TÂY", "1.5"),
            ],
            vec![],
        );

        let result = cook(&inventory, &request).into_result();
        let remaining: Vec<f64> = result
            .consumed_items
            .iter()
            .map(|c| c.remaining_amount)
            .collect();
        assert_eq!(remaining, vec![2.0, 0.5]);
        assert_eq!(result.updated_inventory.unwrap()[0].quantity, 0.5);
    }

    #[test]
    fn test_untouched_items_are_carried_over() {
        let inventory = vec![
            InventoryItem::new("Gạo", 5.0),
            InventoryItem::new("Cà chua", 1.0),
            InventoryItem::new("Nước mắm", 0.0),
        ];
        let request = CookRequest::new(vec![RecipeIngredient::new("Cà chua", "0.25 kg")], vec![]);

        let result = cook(&inventory, &request).into_result();
        let updated = result.updated_inventory.unwrap();
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0], inventory[0]);
        assert_eq!(updated[1].quantity, 0.75);
        assert_eq!(updated[2], inventory[2]);
    }

    #[test]
    fn test_post_quantity_property() {
        let cases = [(1.0, "0.5"), (0.3, "0.5 kg"), (4.0, "4"), (2.5, ""), (0.0, "1")];

        for (pre, text) in cases {
            let inventory = vec![InventoryItem::new("X", pre)];
            let request = CookRequest::new(vec![RecipeIngredient::new("x", text)], vec![]);
            let updated = cook(&inventory, &request)
                .into_result()
                .updated_inventory
                .unwrap();

            let expected = remaining_after(pre, parse_quantity(text));
            assert_eq!(updated[0].quantity, expected, "pre={pre} text={text:?}");
            assert_eq!(updated[0].is_used_up(), expected == 0.0, "pre={pre} text={text:?}");
        }
    }

    #[test]
    fn test_resolution_from_other_snapshot_is_rejected() {
        let before = vec![InventoryItem::new("Cà chua", 1.0), InventoryItem::new("Hành", 2.0)];
        let request = CookRequest::new(vec![RecipeIngredient::new("Hành", "1")], vec![]);
        let resolution = resolve(&before, &request);

        let shrunk = vec![InventoryItem::new("Cà chua", 1.0)];
        assert_eq!(
            reconcile(&shrunk, &resolution),
            Reconciliation::Rejected {
                missing: vec![RecipeIngredient::new("Hành", "1")]
            }
        );

        let reordered = vec![InventoryItem::new("Hành", 2.0), InventoryItem::new("Cà chua", 1.0)];
        assert!(matches!(
            reconcile(&reordered, &resolution),
            Reconciliation::Rejected { .. }
        ));
    }
}
