//! `config show` and `config init`

use std::path::PathBuf;

use clap::Subcommand;
use serde_json::{json, Value};

use crate::config::{
    init_config_file, load_config, mask, merge_config, Config, Environment, ProcessEnv,
    ENV_API_KEY, ENV_API_URL, ENV_RETRIES, ENV_TIMEOUT,
};
use crate::error::Result;
use crate::output::{print_status, to_pretty_json};

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Path to config file
        #[arg(short = 'c', long = "config", value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Initialize a new configuration file
    Init {
        /// Overwrite existing config file
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { config } => {
            let file_config = load_config(config.as_deref())?;
            print_status(render_show(&file_config, &ProcessEnv)?);
        }
        ConfigCommand::Init { force } => {
            let path = init_config_file(std::env::current_dir()?, force)?;
            print_status(format!("✅ Created configuration file: {}", path.display()));
            print_status("🔧 Please edit the file to set your actual API key and server URL.");
        }
    }
    Ok(())
}

/// Environment variables as shown by `config show`; the API key is masked.
pub fn env_summary(env: &impl Environment) -> Value {
    let plain = |key: &str| env.get_non_empty(key).unwrap_or_else(|| "not set".to_string());
    json!({
        ENV_API_URL: plain(ENV_API_URL),
        ENV_API_KEY: mask(env.get_non_empty(ENV_API_KEY).as_deref()),
        ENV_TIMEOUT: plain(ENV_TIMEOUT),
        ENV_RETRIES: plain(ENV_RETRIES),
    })
}

/// The full `config show` report: effective config, file config, environment
/// and the precedence order.
pub fn render_show(file_config: &Config, env: &impl Environment) -> Result<String> {
    let effective = merge_config(file_config, env, &Config::default());

    let sections = [
        "📋 Current Configuration:".to_string(),
        String::new(),
        "🔧 Effective Configuration (after precedence):".to_string(),
        to_pretty_json(&effective.masked())?,
        String::new(),
        "📁 Configuration File:".to_string(),
        to_pretty_json(&file_config.masked())?,
        String::new(),
        "🌍 Environment Variables:".to_string(),
        to_pretty_json(&env_summary(env))?,
        String::new(),
        "📋 Configuration Precedence:".to_string(),
        "1. Command-line options (highest)".to_string(),
        "2. Environment variables".to_string(),
        "3. Configuration file (lowest)".to_string(),
    ];
    Ok(sections.join("\n"))
}
