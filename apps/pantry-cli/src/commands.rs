//! Command handlers.
//!
//! Each handler returns a serializable value; `main` prints it as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pantry_core::{ConsumptionResult, CookRequest, InventoryItem};
use pantry_db::{CookLogEntry, Database, InventoryStore, Kitchen};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Summary printed after an import.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub household_id: String,
    pub items: usize,
    pub version: i64,
}

pub async fn inventory_show(db: &Database, household_id: &str) -> Result<Vec<InventoryItem>> {
    let snapshot = db
        .inventory()
        .load(household_id)
        .await
        .with_context(|| format!("no inventory for household {household_id}"))?;
    Ok(snapshot.items)
}

pub async fn inventory_import(db: &Database, household_id: &str, file: &Path) -> Result<ImportSummary> {
    let items: Vec<InventoryItem> = read_json(file)?;
    debug!(household_id = %household_id, items = items.len(), "Importing inventory");

    let version = db.inventory().replace(household_id, &items).await?;
    info!(household_id = %household_id, version, "Inventory imported");

    Ok(ImportSummary {
        household_id: household_id.to_string(),
        items: items.len(),
        version,
    })
}

pub async fn cook(db: &Database, household_id: &str, request_file: &Path) -> Result<ConsumptionResult> {
    let request: CookRequest = read_json(request_file)?;
    let kitchen = Kitchen::new(db.inventory());
    Ok(kitchen.cook(household_id, &request).await)
}

pub async fn check(db: &Database, household_id: &str, request_file: &Path) -> Result<ConsumptionResult> {
    let request: CookRequest = read_json(request_file)?;
    let kitchen = Kitchen::new(db.inventory());
    Ok(kitchen.check(household_id, &request).await?)
}

pub async fn history(db: &Database, household_id: &str, limit: u32) -> Result<Vec<CookLogEntry>> {
    Ok(db.cook_log().history(household_id, limit).await?)
}
