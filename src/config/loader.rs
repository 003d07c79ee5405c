//! Config file discovery and loading

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::Config;
use crate::error::{CliError, Result};
use crate::schema::Validated;

/// Name of the config file searched for in the working directory and its parents
pub const CONFIG_FILENAME: &str = "langgraph-cli.json";

/// Find the config file by searching upward from `start`.
///
/// Every ancestor is checked, the filesystem root included. Returns the first
/// (closest) match.
pub fn find_config_file(start: impl AsRef<Path>) -> Option<PathBuf> {
    let mut current = start.as_ref().to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Load and validate the config file.
///
/// With `explicit_path` that file is used, otherwise the closest
/// `langgraph-cli.json` above the working directory. A missing file yields an
/// empty config. Read, parse and schema failures all become a single
/// configuration error naming the file.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let path = match explicit_path {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| find_config_file(cwd)),
    };

    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("no config file found, using empty configuration");
        return Ok(Config::default());
    };

    read_config_file(&path).map_err(|e| {
        CliError::config_with_cause(format!("Failed to load config from {}", path.display()), e)
    })
}

fn read_config_file(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&content)?;
    Config::validate(&raw)
}

/// Write the starter config into `dir`, refusing to overwrite unless `force`.
pub fn init_config_file(dir: impl AsRef<Path>, force: bool) -> Result<PathBuf> {
    let path = dir.as_ref().join(CONFIG_FILENAME);

    if path.exists() && !force {
        return Err(CliError::cli(
            "Configuration file already exists. Use --force to overwrite.",
        ));
    }

    let content = serde_json::to_string_pretty(&Config::starter())?;
    std::fs::write(&path, content)?;
    Ok(path)
}
