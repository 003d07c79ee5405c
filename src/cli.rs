//! CLI module
//!
//! Top-level argument parsing and dispatch to the entity subcommands.

use clap::{Parser, Subcommand};

use crate::commands::{
    assistants::{self, AssistantsCommand},
    config::{self, ConfigCommand},
    runs::{self, RunsCommand},
    store::{self, StoreCommand},
    threads::{self, ThreadsCommand},
};
use crate::error::Result;

/// Command-line client for LangGraph servers
#[derive(Parser, Debug)]
#[command(name = "langgraph-client-cli")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Manage assistants
    #[command(subcommand)]
    Assistants(AssistantsCommand),
    /// Manage threads
    #[command(subcommand)]
    Threads(ThreadsCommand),
    /// Manage runs
    #[command(subcommand)]
    Runs(RunsCommand),
    /// Key-value store operations
    #[command(subcommand)]
    Store(StoreCommand),
}

/// Main entry point for the CLI
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Config(cmd) => config::run(cmd).await,
        Command::Assistants(cmd) => assistants::run(cmd).await,
        Command::Threads(cmd) => threads::run(cmd).await,
        Command::Runs(cmd) => runs::run(cmd).await,
        Command::Store(cmd) => store::run(cmd).await,
    }
}
