//! # pantry-core: Pure Business Logic for Pantry
//!
//! This crate is the **heart** of Pantry. It decides whether a recipe can be
//! cooked from the current inventory and computes the post-cook inventory,
//! all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               apps/pantry-cli (or any other front end)          │   │
//! │  │        inventory import ──► check ──► cook ──► history          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            pantry-db (Kitchen + InventoryStore)                 │   │
//! │  │      lock household ─► load ─► decide ─► save once              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ "decide"                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ quantity  │  │ resolver  │  │ reconcile │  │ validation│  │   │
//! │  │   │  "0.5 kg" │─►│ name match│─►│ decrement │  │  import   │  │   │
//! │  │   │  → 0.5    │  │ missing?  │  │ used_up   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, CookRequest, ConsumptionResult)
//! - [`quantity`] - Lenient quantity/unit parsing
//! - [`resolver`] - Matches recipe ingredients against the inventory
//! - [`reconcile`] - All-or-nothing consumption planning
//! - [`snapshot`] - JSON encoding of inventory snapshots
//! - [`validation`] - Import-time validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_core::{reconcile, resolve, CookRequest, InventoryItem, Outcome, RecipeIngredient};
//!
//! let inventory = vec![InventoryItem::new("Cà chua", 1.0)];
//! let request = CookRequest::new(vec![RecipeIngredient::new("cà chua", "0.5 kg")], vec![]);
//!
//! let resolution = resolve(&inventory, &request);
//! let result = reconcile(&inventory, &resolution).into_result();
//!
//! assert_eq!(result.outcome, Outcome::Committed);
//! assert_eq!(result.consumed_items[0].remaining_amount, 0.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod quantity;
pub mod reconcile;
pub mod resolver;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use quantity::{parse_quantity, parse_unit, Quantity};
pub use reconcile::{reconcile, Reconciliation};
pub use resolver::{resolve, Resolution, Resolved};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Household used when the caller does not scope requests.
///
/// Family-group membership lives outside this workspace; until a caller
/// supplies its own household id, everything lands here.
pub const DEFAULT_HOUSEHOLD_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Fixed storage key under which a household's inventory snapshot lives.
pub const INVENTORY_STORAGE_KEY: &str = "inventory";

/// Maximum length of an inventory item name accepted on import.
pub const MAX_ITEM_NAME_LEN: usize = 200;
