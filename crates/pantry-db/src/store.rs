//! # Inventory Store
//!
//! The only capability the cook engine has over persisted state: load a
//! household's snapshot, and replace it.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      InventoryStore (trait)                             │
//! │                      ├── load(household)                                │
//! │                      ├── save(household, items, expected_version)       │
//! │                      └── save_cooked(.., cook log entry)                │
//! │                                │                                        │
//! │            ┌───────────────────┴───────────────────┐                    │
//! │            ▼                                       ▼                    │
//! │  InventoryRepository                      MemoryInventoryStore          │
//! │  SQLite kv_store row                      HashMap, for tests and        │
//! │  + cook_log, one transaction              embedding                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every save carries the version read at load time. A store must refuse
//! the write with [`DbError::VersionConflict`] when the stored version moved.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pantry_core::snapshot::{decode_snapshot, encode_snapshot, normalize_snapshot};
use pantry_core::validation::validate_snapshot;
use pantry_core::InventoryItem;
use tokio::sync::Mutex;

use crate::error::{DbError, DbResult};
use crate::repository::cook_log::CookLogEntry;

/// A decoded snapshot plus the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSnapshot {
    pub items: Vec<InventoryItem>,
    pub version: i64,
}

/// Load/save access to per-household inventory snapshots.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Loads the snapshot.
    ///
    /// `SnapshotMissing` when nothing was ever stored, `SnapshotCorrupt`
    /// when the payload does not decode.
    async fn load(&self, household_id: &str) -> DbResult<LoadedSnapshot>;

    /// Replaces the whole snapshot if it is still at `expected_version`.
    /// Returns the new version.
    async fn save(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
    ) -> DbResult<i64>;

    /// Like [`save`](Self::save), also recording the cook.
    ///
    /// Stores without a cook log just save.
    async fn save_cooked(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
        _entry: &CookLogEntry,
    ) -> DbResult<i64> {
        self.save(household_id, items, expected_version).await
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

#[derive(Debug, Clone)]
struct Slot {
    payload: String,
    version: i64,
}

/// HashMap-backed store.
///
/// Payloads are kept as encoded JSON so that tests can compare snapshots
/// byte for byte and seed corrupt payloads.
#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    slots: Mutex<HashMap<String, Slot>>,
    log: Mutex<Vec<CookLogEntry>>,
    saves: AtomicUsize,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a snapshot unconditionally (import).
    ///
    /// Item statuses are re-derived from quantities.
    pub async fn put(&self, household_id: &str, items: &[InventoryItem]) -> DbResult<i64> {
        let mut items = items.to_vec();
        normalize_snapshot(&mut items);
        validate_snapshot(&items)?;
        let payload = encode_snapshot(&items)?;
        Ok(self.put_raw(household_id, payload).await)
    }

    /// Stores a payload as-is, bypassing validation and encoding.
    pub async fn put_raw(&self, household_id: &str, payload: impl Into<String>) -> i64 {
        let mut slots = self.slots.lock().await;
        let version = slots.get(household_id).map_or(1, |slot| slot.version + 1);
        slots.insert(
            household_id.to_string(),
            Slot {
                payload: payload.into(),
                version,
            },
        );
        version
    }

    /// The stored payload, byte for byte.
    pub async fn raw(&self, household_id: &str) -> Option<String> {
        self.slots
            .lock()
            .await
            .get(household_id)
            .map(|slot| slot.payload.clone())
    }

    /// Number of successful `save`/`save_cooked` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Recorded cooks, oldest first.
    pub async fn cook_log(&self) -> Vec<CookLogEntry> {
        self.log.lock().await.clone()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn load(&self, household_id: &str) -> DbResult<LoadedSnapshot> {
        let slot = self
            .slots
            .lock()
            .await
            .get(household_id)
            .cloned()
            .ok_or_else(|| DbError::snapshot_missing(household_id))?;

        Ok(LoadedSnapshot {
            items: decode_snapshot(&slot.payload)?,
            version: slot.version,
        })
    }

    async fn save(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
    ) -> DbResult<i64> {
        let payload = encode_snapshot(items)?;
        let mut slots = self.slots.lock().await;

        let slot = slots
            .get_mut(household_id)
            .ok_or_else(|| DbError::snapshot_missing(household_id))?;

        if slot.version != expected_version {
            return Err(DbError::version_conflict(household_id, expected_version));
        }

        slot.payload = payload;
        slot.version += 1;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(slot.version)
    }

    async fn save_cooked(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
        entry: &CookLogEntry,
    ) -> DbResult<i64> {
        let version = self.save(household_id, items, expected_version).await?;
        self.log.lock().await.push(entry.clone());
        Ok(version)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
