//! # Availability Resolver
//!
//! Classifies a cook request's ingredients against an inventory snapshot.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request.available_ingredients                                          │
//! │       │                                                                 │
//! │       ├── name found (lowercased) ──► resolvable (ingredient, index)    │
//! │       │                                                                 │
//! │       └── name NOT found ───────────► missing   (discovered here)       │
//! │                                                                         │
//! │  request.missing_ingredients ───────► missing   (appended after)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names are compared after lowercasing both sides. No trimming and no
//! unicode normalization happen, so `"Cà chua "` and `"Cà chua"` differ.
//! When the inventory holds duplicate names, the first entry wins.

use crate::types::{CookRequest, InventoryItem, RecipeIngredient};

/// A recipe ingredient matched to an inventory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub ingredient: RecipeIngredient,
    /// Position of the matched item in the snapshot.
    pub item_index: usize,
}

/// Output of [`resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub resolvable: Vec<Resolved>,
    pub missing: Vec<RecipeIngredient>,
}

impl Resolution {
    /// True when nothing blocks the commit.
    #[inline]
    pub fn is_cookable(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Finds the first inventory item whose name matches case-insensitively.
pub fn find_item(inventory: &[InventoryItem], name: &str) -> Option<usize> {
    let needle = name.to_lowercase();
    inventory
        .iter()
        .position(|item| item.name.to_lowercase() == needle)
}

/// Splits the request's ingredients into resolvable and missing.
///
/// Pure: neither the inventory nor the request is modified.
pub fn resolve(inventory: &[InventoryItem], request: &CookRequest) -> Resolution {
    let mut resolution = Resolution::default();

    for ingredient in &request.available_ingredients {
        match find_item(inventory, &ingredient.name) {
            Some(item_index) => resolution.resolvable.push(Resolved {
                ingredient: ingredient.clone(),
                item_index,
            }),
            None => resolution.missing.push(ingredient.clone()),
        }
    }

    resolution
        .missing
        .extend(request.missing_ingredients.iter().cloned());

    resolution
}

// =============================================================================
// Unit Tests
// =============================================================================
