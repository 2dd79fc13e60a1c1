//! # Cook Log Repository
//!
//! One row per committed cook. Rows are written by
//! [`InventoryRepository::save_cooked`](crate::repository::inventory::InventoryRepository)
//! inside the snapshot transaction, so a logged cook always matches a
//! snapshot that was actually replaced.

use chrono::{DateTime, Utc};
use pantry_core::ConsumedItem;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

/// A recorded cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookLogEntry {
    pub id: String,
    pub household_id: String,
    pub recipe_name: Option<String>,
    pub consumed: Vec<ConsumedItem>,
    pub cooked_at: DateTime<Utc>,
}

impl CookLogEntry {
    /// Creates an entry with a fresh id, stamped now.
    pub fn new(
        household_id: impl Into<String>,
        recipe_name: Option<String>,
        consumed: Vec<ConsumedItem>,
    ) -> Self {
        CookLogEntry {
            id: Uuid::new_v4().to_string(),
            household_id: household_id.into(),
            recipe_name,
            consumed,
            cooked_at: Utc::now(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CookLogRow {
    id: String,
    household_id: String,
    recipe_name: Option<String>,
    consumed: String,
    cooked_at: DateTime<Utc>,
}

impl TryFrom<CookLogRow> for CookLogEntry {
    type Error = DbError;

    fn try_from(row: CookLogRow) -> DbResult<Self> {
        Ok(CookLogEntry {
            id: row.id,
            household_id: row.household_id,
            recipe_name: row.recipe_name,
            consumed: serde_json::from_str(&row.consumed)?,
            cooked_at: row.cooked_at,
        })
    }
}

/// Inserts an entry on an existing connection or transaction.
pub(crate) async fn insert_entry(conn: &mut SqliteConnection, entry: &CookLogEntry) -> DbResult<()> {
    debug!(id = %entry.id, household_id = %entry.household_id, "Recording cook");

    let consumed = serde_json::to_string(&entry.consumed)?;

    sqlx::query(
        r#"
        INSERT INTO cook_log (id, household_id, recipe_name, consumed, cooked_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.household_id)
    .bind(&entry.recipe_name)
    .bind(consumed)
    .bind(entry.cooked_at)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Repository for cook history.
#[derive(Debug, Clone)]
pub struct CookLogRepository {
    pool: SqlitePool,
}

impl CookLogRepository {
    /// Creates a new CookLogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CookLogRepository { pool }
    }

    /// Inserts an entry outside any snapshot transaction.
    pub async fn insert(&self, entry: &CookLogEntry) -> DbResult<()> {
        let mut conn = self.pool.acquire().await?;
        insert_entry(&mut conn, entry).await
    }

    /// Most recent cooks for a household, newest first.
    pub async fn history(&self, household_id: &str, limit: u32) -> DbResult<Vec<CookLogEntry>> {
        debug!(household_id = %household_id, limit = %limit, "Loading cook history");

        let rows: Vec<CookLogRow> = sqlx::query_as(
            r#"
            SELECT id, household_id, recipe_name, consumed, cooked_at
            FROM cook_log
            WHERE household_id = ?1
            ORDER BY cooked_at DESC, rowid DESC
            LIMIT ?2
            "#,
        )
        .bind(household_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CookLogEntry::try_from).collect()
    }

    /// Counts cooks recorded for a household.
    pub async fn count(&self, household_id: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cook_log WHERE household_id = ?1")
            .bind(household_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::TimeZone;
    use pantry_core::ItemStatus;

    fn consumed(name: &str) -> Vec<ConsumedItem> {
        vec![ConsumedItem {
            name: name.to_string(),
            consumed_amount: 0.5,
            remaining_amount: 0.5,
            status: ItemStatus::Normal,
            unit: "kg".to_string(),
        }]
    }

    #[tokio::test]
    async fn test_history_newest_first_and_scoped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.cook_log();

        let mut first = CookLogEntry::new("h1", Some("Canh chua".to_string()), consumed("Cà chua"));
        first.cooked_at = Utc.with_ymd_and_hms(2026, 10, 1, 18, 0, 0).unwrap();
        let mut second = CookLogEntry::new("h1", None, consumed("Cá hồi"));
        second.cooked_at = Utc.with_ymd_and_hms(2026, 10, 2, 18, 0, 0).unwrap();
        let other = CookLogEntry::new("h2", None, consumed("Trứng"));

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();
        repo.insert(&other).await.unwrap();

        let history = repo.history("h1", 10).await.unwrap();
        assert_eq!(history, vec![second.clone(), first.clone()]);
        assert_eq!(repo.count("h1").await.unwrap(), 2);

        let limited = repo.history("h1", 1).await.unwrap();
        assert_eq!(limited, vec![second]);
    }
}
