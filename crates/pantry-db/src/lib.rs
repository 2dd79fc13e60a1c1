//! # pantry-db: Storage Layer for Pantry
//!
//! This crate persists household inventory snapshots and runs cooks against
//! them. It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Data Flow                                 │
//! │                                                                         │
//! │  CLI command (pantry cook request.json)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     pantry-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Kitchen     │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │ (kitchen.rs)  │    │ (inventory.rs)│    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ lock, load,   │───►│ InventoryRepo │    │ 001_init.sql │  │   │
//! │  │   │ decide, save  │    │ CookLogRepo   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │          │                                                      │   │
//! │  │          └── InventoryStore trait (store.rs)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/pantry/pantry.db                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - The `InventoryStore` trait and an in-memory implementation
//! - [`repository`] - SQLite repositories (inventory snapshots, cook log)
//! - [`kitchen`] - Serialized load, decide, write-back
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pantry_db::{Database, DbConfig, Kitchen};
//!
//! let db = Database::new(DbConfig::new("path/to/pantry.db")).await?;
//! db.inventory().replace(household, &items).await?;
//!
//! let kitchen = Kitchen::new(db.inventory());
//! let result = kitchen.cook(household, &request).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kitchen;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use kitchen::Kitchen;
pub use pool::{Database, DbConfig};
pub use store::{InventoryStore, LoadedSnapshot, MemoryInventoryStore};

// Repository re-exports for convenience
pub use repository::cook_log::{CookLogEntry, CookLogRepository};
pub use repository::inventory::InventoryRepository;
