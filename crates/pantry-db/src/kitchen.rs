//! # Kitchen
//!
//! Runs a cook against a store: one load, one decision, at most one save.
//!
//! ## Cook Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kitchen::cook(household, request)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  household lock ◄── concurrent cooks for one household queue here      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.load()  ──── missing / corrupt ──► Failed (no write)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve() + reconcile()       (pantry-core, pure)                      │
//! │       │                                                                 │
//! │       ├── Rejected ──► Rejected (no write)                              │
//! │       ▼                                                                 │
//! │  store.save_cooked(items, version read at load, log entry)              │
//! │       │                                                                 │
//! │       ├── error / VersionConflict ──► Failed                            │
//! │       ▼                                                                 │
//! │  Committed { consumed_items, updated_inventory }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cooking is not idempotent. Submitting the same request twice draws the
//! ingredients twice.

use std::collections::HashMap;
use std::sync::Arc;

use pantry_core::{reconcile, resolve, ConsumptionResult, CookRequest, Reconciliation};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::DbResult;
use crate::repository::cook_log::CookLogEntry;
use crate::store::{InventoryStore, LoadedSnapshot};

/// Cook service over an [`InventoryStore`].
#[derive(Debug)]
pub struct Kitchen<S> {
    store: S,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: InventoryStore> Kitchen<S> {
    pub fn new(store: S) -> Self {
        Kitchen {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn household_lock(&self, household_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(household_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the household's lock entry once no other cook holds or awaits it.
    async fn release_household_lock(&self, household_id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        // One reference in the map, one here.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(household_id);
        }
    }

    /// Cooks a recipe, writing the new snapshot back on success.
    ///
    /// Never returns an error: storage problems come back as
    /// [`Outcome::Failed`](pantry_core::Outcome::Failed) with a message.
    pub async fn cook(&self, household_id: &str, request: &CookRequest) -> ConsumptionResult {
        let lock = self.household_lock(household_id).await;
        let result = {
            let _guard = lock.lock().await;
            self.cook_locked(household_id, request).await
        };
        self.release_household_lock(household_id, lock).await;
        result
    }

    async fn cook_locked(&self, household_id: &str, request: &CookRequest) -> ConsumptionResult {
        debug!(
            household_id = %household_id,
            recipe = ?request.recipe_name,
            available = request.available_ingredients.len(),
            missing = request.missing_ingredients.len(),
            "Cooking"
        );

        let snapshot = match self.store.load(household_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(household_id = %household_id, error = %e, "Cook failed: snapshot unavailable");
                return ConsumptionResult::failed(e.to_string());
            }
        };

        match Self::decide(&snapshot, request) {
            Reconciliation::Rejected { missing } => {
                warn!(
                    household_id = %household_id,
                    missing = missing.len(),
                    "Cook rejected: ingredients missing"
                );
                ConsumptionResult::rejected(missing)
            }
            Reconciliation::Commit {
                consumed,
                updated_inventory,
            } => {
                let entry =
                    CookLogEntry::new(household_id, request.recipe_name.clone(), consumed.clone());

                let version = match self
                    .store
                    .save_cooked(household_id, &updated_inventory, snapshot.version, &entry)
                    .await
                {
                    Ok(version) => version,
                    Err(e) => {
                        warn!(household_id = %household_id, error = %e, "Cook failed: write-back refused");
                        return ConsumptionResult::failed(e.to_string());
                    }
                };

                info!(
                    household_id = %household_id,
                    cook_id = %entry.id,
                    consumed = consumed.len(),
                    version,
                    "Cook committed"
                );

                ConsumptionResult::committed(consumed, updated_inventory)
            }
        }
    }

    /// Computes what [`cook`](Self::cook) would do, without writing.
    pub async fn check(
        &self,
        household_id: &str,
        request: &CookRequest,
    ) -> DbResult<ConsumptionResult> {
        let snapshot = self.store.load(household_id).await?;
        Ok(Self::decide(&snapshot, request).into_result())
    }

    fn decide(snapshot: &LoadedSnapshot, request: &CookRequest) -> Reconciliation {
        let resolution = resolve(&snapshot.items, request);
        reconcile(&snapshot.items, &resolution)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
