//! `runs` subcommands

use clap::{Args, Subcommand};
use futures::StreamExt;
use serde_json::{Map, Value};

use super::{insert_json_flag, ConnectionArgs};
use crate::client::{LangGraphClient, Page, RunRequest, ThreadCreateRequest};
use crate::config::{Config, RunConfig};
use crate::error::{CliError, Result};
use crate::output::{print_json, print_status};
use crate::schema::Validated;

/// JSON payload flags shared by `create`, `stream` and `once`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Run input as JSON string
    #[arg(long, value_name = "JSON")]
    pub input: Option<String>,

    /// Run config as JSON string
    #[arg(long = "config-data", value_name = "JSON")]
    pub config_data: Option<String>,

    /// Run metadata as JSON string
    #[arg(long, value_name = "JSON")]
    pub metadata: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RunsCommand {
    /// List runs for a thread
    List {
        thread_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Maximum number of runs to return
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Offset for pagination
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a specific run by ID
    Get {
        thread_id: String,
        run_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Create a new run
    Create {
        thread_id: String,
        /// Assistant ID (defaults to `defaultAssistant` from the config)
        assistant_id: Option<String>,
        #[command(flatten)]
        conn: ConnectionArgs,
        #[command(flatten)]
        payload: RunFlags,
        /// Multitask strategy (reject|interrupt|rollback)
        #[arg(long, value_name = "STRATEGY")]
        multitask_strategy: Option<String>,
        /// Stream mode (values|updates|debug|messages)
        #[arg(long, value_name = "MODE")]
        stream_mode: Option<String>,
    },
    /// Stream a run with real-time updates
    Stream {
        thread_id: String,
        /// Assistant ID (defaults to `defaultAssistant` from the config)
        assistant_id: Option<String>,
        #[command(flatten)]
        conn: ConnectionArgs,
        #[command(flatten)]
        payload: RunFlags,
        /// Stream mode (values|updates|debug|messages)
        #[arg(long, value_name = "MODE", default_value = "values")]
        stream_mode: String,
    },
    /// Cancel a running execution
    Cancel {
        thread_id: String,
        run_id: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Run once on a temporary thread
    Once {
        /// Assistant ID (defaults to `defaultAssistant` from the config)
        assistant_id: Option<String>,
        #[command(flatten)]
        conn: ConnectionArgs,
        #[command(flatten)]
        payload: RunFlags,
        /// Stream mode (values|updates|debug|messages)
        #[arg(long, value_name = "MODE", default_value = "values")]
        stream_mode: String,
        /// Keep the thread after the run completes
        #[arg(long)]
        keep_thread: bool,
    },
}

pub async fn run(cmd: RunsCommand) -> Result<()> {
    match cmd {
        RunsCommand::List {
            thread_id,
            conn,
            limit,
            offset,
        } => {
            let (_, client) = conn.connect()?;
            print_json(&client.runs().list(&thread_id, Page { limit, offset }).await?)
        }
        RunsCommand::Get {
            thread_id,
            run_id,
            conn,
        } => {
            let (_, client) = conn.connect()?;
            print_json(&client.runs().get(&thread_id, &run_id).await?)
        }
        RunsCommand::Create {
            thread_id,
            assistant_id,
            conn,
            payload,
            multitask_strategy,
            stream_mode,
        } => {
            let run = run_config_from_flags(
                &payload,
                multitask_strategy.as_deref(),
                stream_mode.as_deref(),
            )?;
            let (config, client) = conn.connect()?;
            let body = RunRequest::new(resolve_assistant(assistant_id, &config)?, run);
            print_json(&client.runs().create(&thread_id, &body).await?)
        }
        RunsCommand::Stream {
            thread_id,
            assistant_id,
            conn,
            payload,
            stream_mode,
        } => {
            let run = run_config_from_flags(&payload, None, Some(&stream_mode))?;
            let (config, client) = conn.connect()?;
            let body = RunRequest::new(resolve_assistant(assistant_id, &config)?, run);
            stream_run(&client, &thread_id, &body).await.map(|_| ())
        }
        RunsCommand::Cancel {
            thread_id,
            run_id,
            conn,
        } => {
            let (_, client) = conn.connect()?;
            client.runs().cancel(&thread_id, &run_id).await?;
            print_status(format!("Run {run_id} cancelled successfully"));
            Ok(())
        }
        RunsCommand::Once {
            assistant_id,
            conn,
            payload,
            stream_mode,
            keep_thread,
        } => {
            let run = run_config_from_flags(&payload, None, Some(&stream_mode))?;
            let (config, client) = conn.connect()?;
            let body = RunRequest::new(resolve_assistant(assistant_id, &config)?, run);
            run_once(&client, &body, keep_thread).await
        }
    }
}

/// Build and validate a run config from command-line flags.
pub fn run_config_from_flags(
    flags: &RunFlags,
    multitask_strategy: Option<&str>,
    stream_mode: Option<&str>,
) -> Result<RunConfig> {
    let mut candidate = Map::new();
    insert_json_flag(&mut candidate, "input", "--input", flags.input.as_deref())?;
    insert_json_flag(&mut candidate, "config", "--config-data", flags.config_data.as_deref())?;
    insert_json_flag(&mut candidate, "metadata", "--metadata", flags.metadata.as_deref())?;
    if let Some(strategy) = multitask_strategy {
        candidate.insert("multitaskStrategy".to_string(), Value::String(strategy.to_string()));
    }
    if let Some(mode) = stream_mode {
        candidate.insert("streamMode".to_string(), Value::String(mode.to_string()));
    }
    RunConfig::validate(&Value::Object(candidate))
}

/// Use the explicit assistant ID, else `defaultAssistant` from the config.
pub fn resolve_assistant(explicit: Option<String>, config: &Config) -> Result<String> {
    explicit
        .or_else(|| config.default_assistant.clone())
        .ok_or_else(|| {
            CliError::cli(
                "No assistant ID provided. Pass it as an argument or set \"defaultAssistant\" in the config file.",
            )
        })
}

/// Stream a run, printing each chunk as it arrives. Returns the chunk count.
pub async fn stream_run(client: &LangGraphClient, thread_id: &str, body: &RunRequest) -> Result<usize> {
    let mut parts = client.runs().stream(thread_id, body).await?;
    let mut count = 0;
    while let Some(part) = parts.next().await {
        print_json(&part?)?;
        count += 1;
    }
    tracing::debug!(thread_id, chunks = count, "run stream finished");
    Ok(count)
}

/// Run on a throwaway thread, deleting it afterwards unless `keep_thread`.
///
/// A failed cleanup is only a warning; the run's own outcome is returned.
pub async fn run_once(client: &LangGraphClient, body: &RunRequest, keep_thread: bool) -> Result<()> {
    let thread = client.threads().create(&ThreadCreateRequest::default()).await?;
    let thread_id = thread
        .get("thread_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CliError::api("thread create response has no thread_id", None))?;
    print_status(format!("Created temporary thread: {thread_id}"));

    let outcome = stream_run(client, &thread_id, body).await;

    if keep_thread {
        print_status(format!("Thread {thread_id} preserved (--keep-thread was used)"));
    } else {
        match client.threads().delete(&thread_id).await {
            Ok(()) => print_status(format!("Cleaned up temporary thread: {thread_id}")),
            Err(e) => {
                tracing::warn!(thread_id = %thread_id, error = %e, "failed to clean up temporary thread")
            }
        }
    }

    outcome.map(|_| ())
}
