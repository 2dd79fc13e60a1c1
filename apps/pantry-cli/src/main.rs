//! # pantry: Command-Line Front End
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CLI Startup                                       │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • Default: info,pantry=debug,sqlx=warn; override with RUST_LOG     │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • PANTRY_* environment variables, then --household / --db flags    │
//! │                                                                         │
//! │  3. Connect to Database ──────────────────────────────────────────────► │
//! │     • SQLite with WAL mode                                              │
//! │     • Run pending migrations                                            │
//! │                                                                         │
//! │  4. Run Command, print JSON to stdout ────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! pantry inventory import items.json
//! pantry check canh-chua.json
//! pantry cook canh-chua.json
//! pantry --household family-42 history --limit 5
//! ```

mod cli;
mod commands;
mod config;

use anyhow::{Context, Result};
use pantry_db::{Database, DbConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, InventoryCommand};
use crate::config::PantryConfig;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = cli::parse_args();
    let mut config = PantryConfig::from_env()?;
    if let Some(household) = args.household {
        config.household_id = household;
    }
    if let Some(db_path) = args.db {
        config.db_path = db_path;
    }

    info!(db_path = %config.db_path.display(), household_id = %config.household_id, "Starting pantry");

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let db = Database::new(DbConfig::new(&config.db_path).max_connections(config.max_connections))
        .await
        .context("failed to open database")?;

    let household = config.household_id.as_str();
    let outcome = match args.command {
        Command::Inventory {
            action: InventoryCommand::Show,
        } => print_json(&commands::inventory_show(&db, household).await?),
        Command::Inventory {
            action: InventoryCommand::Import { file },
        } => print_json(&commands::inventory_import(&db, household, &file).await?),
        Command::Cook { request } => print_json(&commands::cook(&db, household, &request).await?),
        Command::Check { request } => print_json(&commands::check(&db, household, &request).await?),
        Command::History { limit } => {
            let limit = limit.unwrap_or(config.history_limit);
            print_json(&commands::history(&db, household, limit).await?)
        }
    };

    db.close().await;
    outcome
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pantry_db=trace` - Trace the storage layer only
/// - Default: `info,pantry=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pantry=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
