//! `assistants` subcommands

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde_json::Value;

use super::ConnectionArgs;
use crate::client::Page;
use crate::config::AssistantConfig;
use crate::error::{CliError, Result};
use crate::output::{print_json, print_status};
use crate::schema::Validated;

#[derive(Subcommand, Debug, Clone)]
pub enum AssistantsCommand {
    /// List all assistants
    List {
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Maximum number of assistants to return
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Offset for pagination
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a specific assistant by ID
    Get {
        assistant_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Create a new assistant from a JSON config file
    Create {
        /// Path to assistant config JSON file
        config_file: PathBuf,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Delete an assistant by ID
    Delete {
        assistant_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
}

pub async fn run(cmd: AssistantsCommand) -> Result<()> {
    match cmd {
        AssistantsCommand::List {
            conn,
            limit,
            offset,
        } => {
            let (_, client) = conn.connect()?;
            let assistants = client.assistants().search(Page { limit, offset }).await?;
            print_json(&assistants)
        }
        AssistantsCommand::Get { assistant_id, conn } => {
            let (_, client) = conn.connect()?;
            print_json(&client.assistants().get(&assistant_id).await?)
        }
        AssistantsCommand::Create { config_file, conn } => {
            let assistant = read_assistant_file(&config_file)?;
            let (_, client) = conn.connect()?;
            print_json(&client.assistants().create(&assistant).await?)
        }
        AssistantsCommand::Delete { assistant_id, conn } => {
            let (_, client) = conn.connect()?;
            client.assistants().delete(&assistant_id).await?;
            print_status(format!("Assistant {assistant_id} deleted successfully"));
            Ok(())
        }
    }
}

/// Read and validate an assistant definition file.
pub fn read_assistant_file(path: &Path) -> Result<AssistantConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::cli_with_cause(format!("Cannot read assistant config {}", path.display()), e)
    })?;
    let raw: Value = serde_json::from_str(&content).map_err(|e| {
        CliError::cli_with_cause(format!("Invalid JSON in assistant config {}", path.display()), e)
    })?;
    AssistantConfig::validate(&raw)
}
