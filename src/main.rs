//! langgraph-client-cli - command-line client for LangGraph servers
//!
//! Exposes assistants, threads, runs and the key-value store of a remote
//! LangGraph server, printing every result as formatted JSON.

use clap::Parser;
use langgraph_client_cli::cli::{self, Args};
use langgraph_client_cli::error::handle_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging; stdout is reserved for JSON results
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    // Variables from .env never override ones already in the environment
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    // Run the CLI
    if let Err(e) = cli::run(args).await {
        handle_error(&e);
    }
}
