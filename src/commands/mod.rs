//! Subcommand implementations
//!
//! Each entity group has its own module with a clap `Subcommand` enum and a
//! `run` function. Shared pieces live here: the connection flags every
//! command accepts and JSON flag parsing.

pub mod assistants;
pub mod config;
pub mod runs;
pub mod store;
pub mod threads;

use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::client::{create_client, LangGraphClient};
use crate::config::{load_config, merge_config, Config, Environment, ProcessEnv};
use crate::error::{CliError, Result};

/// `--config`, `--url` and `--api-key`, accepted by every entity subcommand
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Path to config file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// LangGraph server URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// API key for authentication
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

impl ConnectionArgs {
    /// The CLI layer of the configuration; unset flags stay `None`.
    pub fn overrides(&self) -> Config {
        Config {
            url: self.url.clone(),
            api_key: self.api_key.clone(),
            ..Default::default()
        }
    }

    /// Load the config file and apply environment and flag overrides.
    pub fn resolve(&self, env: &impl Environment) -> Result<Config> {
        let file_config = load_config(self.config.as_deref())?;
        Ok(merge_config(&file_config, env, &self.overrides()))
    }

    /// Resolve against the process environment and build a client.
    pub fn connect(&self) -> Result<(Config, LangGraphClient)> {
        let config = self.resolve(&ProcessEnv)?;
        let client = create_client(&config)?;
        Ok((config, client))
    }
}

/// Parse the value of a JSON-valued flag such as `--input`.
pub fn parse_json_flag(flag: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| CliError::cli_with_cause(format!("Invalid JSON for {flag}"), e))
}

/// Parse an optional JSON flag into the candidate object under `field`.
pub(crate) fn insert_json_flag(
    candidate: &mut serde_json::Map<String, Value>,
    field: &str,
    flag: &str,
    raw: Option<&str>,
) -> Result<()> {
    if let Some(raw) = raw {
        candidate.insert(field.to_string(), parse_json_flag(flag, raw)?);
    }
    Ok(())
}
