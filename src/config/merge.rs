//! Layering of file config, environment variables and CLI flags

use std::collections::HashMap;

use super::Config;

pub const ENV_API_URL: &str = "LANGGRAPH_API_URL";
pub const ENV_API_KEY: &str = "LANGGRAPH_API_KEY";
pub const ENV_TIMEOUT: &str = "LANGGRAPH_TIMEOUT";
pub const ENV_RETRIES: &str = "LANGGRAPH_RETRIES";

/// Read access to environment variables
pub trait Environment {
    fn get(&self, key: &str) -> Option<String>;

    /// Like [`get`](Self::get) but treats an empty value as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Environment for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.to_string())
    }
}

/// Combine the three config layers. Precedence: CLI > environment > file.
///
/// `cli` fields left as `None` were not passed and never override anything.
/// Numeric environment variables that do not parse are ignored, and so is a
/// zero timeout.
pub fn merge_config(file: &Config, env: &impl Environment, cli: &Config) -> Config {
    let mut merged = file.clone();

    if let Some(url) = env.get_non_empty(ENV_API_URL) {
        merged.url = Some(url);
    }
    if let Some(key) = env.get_non_empty(ENV_API_KEY) {
        merged.api_key = Some(key);
    }
    if let Some(timeout) = parse_env::<u64>(env, ENV_TIMEOUT).filter(|ms| *ms > 0) {
        merged.timeout = Some(timeout as f64);
    }
    if let Some(retries) = parse_env(env, ENV_RETRIES) {
        merged.retries = Some(retries);
    }

    Config {
        url: cli.url.clone().or(merged.url),
        api_key: cli.api_key.clone().or(merged.api_key),
        default_assistant: cli.default_assistant.clone().or(merged.default_assistant),
        timeout: cli.timeout.or(merged.timeout),
        retries: cli.retries.or(merged.retries),
    }
}

fn parse_env<T: std::str::FromStr>(env: &impl Environment, key: &str) -> Option<T> {
    let raw = env.get_non_empty(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::debug!(key, value = %raw, "ignoring non-numeric environment variable");
            None
        }
    }
}
