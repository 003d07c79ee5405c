//! LangGraph client CLI
//!
//! Library half of the `langgraph-client-cli` binary: configuration
//! resolution, payload validation, the HTTP client for a LangGraph server and
//! the command implementations built on top of them.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod namespace;
pub mod output;
pub mod schema;

pub use client::{create_client, LangGraphClient};
pub use config::{load_config, merge_config, Config, Environment, ProcessEnv};
pub use error::{CliError, Result};
pub use namespace::parse_namespace;
