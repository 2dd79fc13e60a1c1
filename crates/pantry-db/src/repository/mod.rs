//! # Repository Module
//!
//! SQLite repository implementations for Pantry.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Kitchen / CLI                                                          │
//! │       │                                                                 │
//! │       │  db.inventory().load(household)                                 │
//! │       ▼                                                                 │
//! │  InventoryRepository                                                    │
//! │  ├── load / save / save_cooked   (InventoryStore)                       │
//! │  └── replace                     (import)                               │
//! │       │                                                                 │
//! │  CookLogRepository                                                      │
//! │  ├── insert                                                             │
//! │  └── history / count                                                    │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite (kv_store, cook_log)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`InventoryRepository`](inventory::InventoryRepository) - Snapshot load/replace
//! - [`CookLogRepository`](cook_log::CookLogRepository) - Cook history

pub mod cook_log;
pub mod inventory;
