//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pantry",
    author,
    version,
    about = "Household pantry: track inventory and cook recipes against it"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Household to act on (overrides PANTRY_HOUSEHOLD_ID)
    #[arg(long, global = true)]
    pub household: Option<String>,

    /// Database file (overrides PANTRY_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect or replace the inventory snapshot
    Inventory {
        #[command(subcommand)]
        action: InventoryCommand,
    },

    /// Cook a recipe and write the new inventory back
    Cook {
        /// JSON file with `availableIngredients` and `missingIngredients`
        request: PathBuf,
    },

    /// Show what cooking a recipe would do, without changing anything
    Check {
        /// JSON file with `availableIngredients` and `missingIngredients`
        request: PathBuf,
    },

    /// List recent cooks
    History {
        /// Number of entries (defaults to PANTRY_HISTORY_LIMIT)
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Print the current snapshot
    Show,

    /// Replace the snapshot with the items in a JSON file
    Import {
        /// JSON array of inventory items
        file: PathBuf,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cook_with_household() {
        let cli = Cli::try_parse_from(["pantry", "--household", "h9", "cook", "canh.json"]).unwrap();
        assert_eq!(cli.household.as_deref(), Some("h9"));
        assert!(matches!(cli.command, Command::Cook { ref request } if request == &PathBuf::from("canh.json")));
    }

    #[test]
    fn test_parse_history_limit() {
        let cli = Cli::try_parse_from(["pantry", "history", "-l", "5"]).unwrap();
        assert!(matches!(cli.command, Command::History { limit: Some(5) }));
    }

    #[test]
    fn test_parse_inventory_import() {
        let cli = Cli::try_parse_from(["pantry", "inventory", "import", "items.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Inventory {
                action: InventoryCommand::Import { .. }
            }
        ));
    }
}
