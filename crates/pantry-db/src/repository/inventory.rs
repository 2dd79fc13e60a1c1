//! # Inventory Repository
//!
//! SQLite-backed [`InventoryStore`]. Each household's snapshot is one row of
//! `kv_store` under the fixed key [`INVENTORY_STORAGE_KEY`].
//!
//! ## Optimistic Replace
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Write-Back                                  │
//! │                                                                         │
//! │  load()  ──► payload, version = 7                                       │
//! │                                                                         │
//! │  ... decide in pantry-core ...                                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   SINGLE TRANSACTION                            │   │
//! │  │  1. UPDATE kv_store SET payload = ?, version = version + 1      │   │
//! │  │     WHERE household_id = ? AND storage_key = ? AND version = 7  │   │
//! │  │  2. INSERT INTO cook_log (...)          (save_cooked only)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ├── 1 row updated  ──► COMMIT, version = 8                        │
//! │       └── 0 rows updated ──► ROLLBACK, VersionConflict                  │
//! │                              (someone else wrote version 8 first)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use pantry_core::snapshot::{decode_snapshot, encode_snapshot, normalize_snapshot};
use pantry_core::validation::validate_snapshot;
use pantry_core::{InventoryItem, INVENTORY_STORAGE_KEY};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::cook_log::{insert_entry, CookLogEntry};
use crate::store::{InventoryStore, LoadedSnapshot};

/// Repository for inventory snapshots.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Validates and stores a snapshot, ignoring the current version.
    ///
    /// Used for imports. Item statuses are re-derived from quantities.
    /// Creates the row on first use.
    pub async fn replace(&self, household_id: &str, items: &[InventoryItem]) -> DbResult<i64> {
        let mut items = items.to_vec();
        normalize_snapshot(&mut items);
        validate_snapshot(&items)?;
        let payload = encode_snapshot(&items)?;

        debug!(household_id = %household_id, items = items.len(), "Replacing inventory snapshot");

        let version: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO kv_store (household_id, storage_key, payload, version, updated_at)
            VALUES (?1, ?2, ?3, 1, ?4)
            ON CONFLICT (household_id, storage_key) DO UPDATE SET
                payload = excluded.payload,
                version = kv_store.version + 1,
                updated_at = excluded.updated_at
            RETURNING version
            "#,
        )
        .bind(household_id)
        .bind(INVENTORY_STORAGE_KEY)
        .bind(payload)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!(household_id = %household_id, version, "Inventory snapshot imported");
        Ok(version)
    }

    /// Current version, or `None` when no snapshot exists.
    pub async fn version(&self, household_id: &str) -> DbResult<Option<i64>> {
        let version: Option<i64> = sqlx::query_scalar(
            "SELECT version FROM kv_store WHERE household_id = ?1 AND storage_key = ?2",
        )
        .bind(household_id)
        .bind(INVENTORY_STORAGE_KEY)
        .fetch_optional(&self.pool)
        .await?;

        Ok(version)
    }

    /// Conditional overwrite inside an open transaction.
    async fn write_snapshot(
        conn: &mut SqliteConnection,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
    ) -> DbResult<i64> {
        let payload = encode_snapshot(items)?;

        let result = sqlx::query(
            r#"
            UPDATE kv_store SET
                payload = ?3,
                version = version + 1,
                updated_at = ?4
            WHERE household_id = ?1 AND storage_key = ?2 AND version = ?5
            "#,
        )
        .bind(household_id)
        .bind(INVENTORY_STORAGE_KEY)
        .bind(payload)
        .bind(Utc::now())
        .bind(expected_version)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            let exists: Option<i64> = sqlx::query_scalar(
                "SELECT version FROM kv_store WHERE household_id = ?1 AND storage_key = ?2",
            )
            .bind(household_id)
            .bind(INVENTORY_STORAGE_KEY)
            .fetch_optional(&mut *conn)
            .await?;

            return Err(match exists {
                Some(_) => DbError::version_conflict(household_id, expected_version),
                None => DbError::snapshot_missing(household_id),
            });
        }

        Ok(expected_version + 1)
    }
}

#[async_trait]
impl InventoryStore for InventoryRepository {
    async fn load(&self, household_id: &str) -> DbResult<LoadedSnapshot> {
        debug!(household_id = %household_id, "Loading inventory snapshot");

        let row: Option<(String, i64)> = sqlx::query_as(
            "SELECT payload, version FROM kv_store WHERE household_id = ?1 AND storage_key = ?2",
        )
        .bind(household_id)
        .bind(INVENTORY_STORAGE_KEY)
        .fetch_optional(&self.pool)
        .await?;

        let (payload, version) = row.ok_or_else(|| DbError::snapshot_missing(household_id))?;

        Ok(LoadedSnapshot {
            items: decode_snapshot(&payload)?,
            version,
        })
    }

    async fn save(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
    ) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;
        let version = Self::write_snapshot(&mut tx, household_id, items, expected_version).await?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(version)
    }

    async fn save_cooked(
        &self,
        household_id: &str,
        items: &[InventoryItem],
        expected_version: i64,
        entry: &CookLogEntry,
    ) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;
        let version = Self::write_snapshot(&mut tx, household_id, items, expected_version).await?;
        insert_entry(&mut tx, entry).await?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(version)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use pantry_core::ItemStatus;

    async fn repo() -> (Database, InventoryRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.inventory();
        (db, repo)
    }

    #[tokio::test]
    async fn test_load_missing() {
        let (_db, repo) = repo().await;
        assert!(matches!(
            repo.load("h1").await,
            Err(DbError::SnapshotMissing { .. })
        ));
        assert_eq!(repo.version("h1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_then_load() {
        let (_db, repo) = repo().await;
        let items = vec![
            InventoryItem::new("Cà chua", 1.0).with_unit("kg"),
            InventoryItem::new("Bơ", 0.0),
        ];

        assert_eq!(repo.replace("h1", &items).await.unwrap(), 1);
        assert_eq!(repo.replace("h1", &items).await.unwrap(), 2);

        let loaded = repo.load("h1").await.unwrap();
        assert_eq!(loaded.items, items);
        assert_eq!(loaded.version, 2);
        assert_eq!(loaded.items[1].status, ItemStatus::UsedUp);
    }

    #[tokio::test]
    async fn test_replace_rejects_invalid() {
        let (_db, repo) = repo().await;
        let result = repo.replace("h1", &[InventoryItem::new("  ", 1.0)]).await;
        assert!(matches!(result, Err(DbError::Invalid(_))));
        assert_eq!(repo.version("h1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_derives_status() {
        let (_db, repo) = repo().await;
        let mut stocked = InventoryItem::new("Gạo", 5.0);
        stocked.status = ItemStatus::UsedUp;
        let mut empty = InventoryItem::new("Muối", 0.0);
        empty.status = ItemStatus::Normal;

        repo.replace("h1", &[stocked, empty]).await.unwrap();

        let loaded = repo.load("h1").await.unwrap();
        assert_eq!(loaded.items[0].status, ItemStatus::Normal);
        assert_eq!(loaded.items[1].status, ItemStatus::UsedUp);
    }

    #[tokio::test]
    async fn test_load_corrupt_payload() {
        let (db, repo) = repo().await;
        sqlx::query(
            "INSERT INTO kv_store (household_id, storage_key, payload, version, updated_at) VALUES ('h1', 'inventory', 'not json', 1, '2026-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        assert!(matches!(
            repo.load("h1").await,
            Err(DbError::SnapshotCorrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_stale_save_conflicts() {
        let (_db, repo) = repo().await;
        repo.replace("h1", &[InventoryItem::new("Gạo", 2.0)])
            .await
            .unwrap();

        let loaded = repo.load("h1").await.unwrap();
        let v2 = repo
            .save("h1", &[InventoryItem::new("Gạo", 1.0)], loaded.version)
            .await
            .unwrap();
        assert_eq!(v2, loaded.version + 1);

        let stale = repo
            .save("h1", &[InventoryItem::new("Gạo", 1.5)], loaded.version)
            .await;
        assert!(matches!(stale, Err(DbError::VersionConflict { .. })));

        assert_eq!(repo.load("h1").await.unwrap().items[0].quantity, 1.0);
    }

    #[tokio::test]
    async fn test_save_without_snapshot_is_missing() {
        let (_db, repo) = repo().await;
        let result = repo.save("h1", &[InventoryItem::new("Gạo", 1.0)], 1).await;
        assert!(matches!(result, Err(DbError::SnapshotMissing { .. })));
    }

    #[tokio::test]
    async fn test_save_cooked_writes_log_in_same_transaction() {
        let (db, repo) = repo().await;
        let version = repo
            .replace("h1", &[InventoryItem::new("Trứng", 4.0)])
            .await
            .unwrap();

        let entry = CookLogEntry::new("h1", Some("Trứng chiên".to_string()), Vec::new());
        repo.save_cooked("h1", &[InventoryItem::new("Trứng", 2.0)], version, &entry)
            .await
            .unwrap();
        assert_eq!(db.cook_log().count("h1").await.unwrap(), 1);

        // A conflicting save must not leave a log row behind.
        let stale = CookLogEntry::new("h1", None, Vec::new());
        let result = repo
            .save_cooked("h1", &[InventoryItem::new("Trứng", 0.0)], version, &stale)
            .await;
        assert!(matches!(result, Err(DbError::VersionConflict { .. })));
        assert_eq!(db.cook_log().count("h1").await.unwrap(), 1);
    }
}
