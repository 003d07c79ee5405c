//! `threads` subcommands

use clap::Subcommand;
use serde_json::{Map, Value};

use super::{insert_json_flag, ConnectionArgs};
use crate::client::{Page, ThreadCreateRequest};
use crate::config::ThreadConfig;
use crate::error::Result;
use crate::output::{print_json, print_status};
use crate::schema::Validated;

#[derive(Subcommand, Debug, Clone)]
pub enum ThreadsCommand {
    /// List all threads
    List {
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Maximum number of threads to return
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Offset for pagination
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a specific thread by ID
    Get {
        thread_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Create a new thread
    Create {
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Custom thread ID
        #[arg(long, value_name = "ID")]
        thread_id: Option<String>,
        /// Thread metadata as JSON string
        #[arg(long, value_name = "JSON")]
        metadata: Option<String>,
        /// Action if thread exists (raise|do_nothing)
        #[arg(long, value_name = "ACTION", default_value = "raise")]
        if_exists: String,
    },
    /// Delete a thread by ID
    Delete {
        thread_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Get thread state
    State {
        thread_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
}

pub async fn run(cmd: ThreadsCommand) -> Result<()> {
    match cmd {
        ThreadsCommand::List {
            conn,
            limit,
            offset,
        } => {
            let (_, client) = conn.connect()?;
            print_json(&client.threads().search(Page { limit, offset }).await?)
        }
        ThreadsCommand::Get { thread_id, conn } => {
            let (_, client) = conn.connect()?;
            print_json(&client.threads().get(&thread_id).await?)
        }
        ThreadsCommand::Create {
            conn,
            thread_id,
            metadata,
            if_exists,
        } => {
            let thread = thread_config_from_flags(metadata.as_deref(), Some(&if_exists))?;
            let (_, client) = conn.connect()?;
            let body = ThreadCreateRequest::new(thread_id, thread);
            print_json(&client.threads().create(&body).await?)
        }
        ThreadsCommand::Delete { thread_id, conn } => {
            let (_, client) = conn.connect()?;
            client.threads().delete(&thread_id).await?;
            print_status(format!("Thread {thread_id} deleted successfully"));
            Ok(())
        }
        ThreadsCommand::State { thread_id, conn } => {
            let (_, client) = conn.connect()?;
            print_json(&client.threads().get_state(&thread_id).await?)
        }
    }
}

/// Build and validate a thread config from `--metadata` and `--if-exists`.
pub fn thread_config_from_flags(metadata: Option<&str>, if_exists: Option<&str>) -> Result<ThreadConfig> {
    let mut candidate = Map::new();
    insert_json_flag(&mut candidate, "metadata", "--metadata", metadata)?;
    if let Some(action) = if_exists.filter(|a| !a.is_empty()) {
        candidate.insert("ifExists".to_string(), Value::String(action.to_string()));
    }
    ThreadConfig::validate(&Value::Object(candidate))
}
