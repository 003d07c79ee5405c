//! CLI configuration
//!
//! The resolved configuration is built fresh on every invocation from three
//! layers, lowest precedence first: the `langgraph-cli.json` file, the
//! `LANGGRAPH_*` environment variables, and command-line flags.

mod loader;
mod merge;
pub mod payloads;

use serde::{Deserialize, Serialize, Serializer};

use crate::schema::{Bound, FieldKind, FieldSpec, Schema, Validated};

pub use loader::{find_config_file, init_config_file, load_config, CONFIG_FILENAME};
pub use merge::{
    merge_config, Environment, ProcessEnv, ENV_API_KEY, ENV_API_URL, ENV_RETRIES, ENV_TIMEOUT,
};
pub use payloads::{AssistantConfig, IfExists, MultitaskStrategy, RunConfig, StreamMode, ThreadConfig};

/// Connection settings. Every field is optional; an empty config is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Absolute URL of the LangGraph server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Assistant used by run commands when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_assistant: Option<String>,
    /// Request timeout in milliseconds; fractions allowed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_millis"
    )]
    pub timeout: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
}

pub static CONFIG_SCHEMA: Schema = Schema {
    name: "configuration",
    fields: &[
        FieldSpec::optional("url", FieldKind::Url),
        FieldSpec::optional("apiKey", FieldKind::String),
        FieldSpec::optional("defaultAssistant", FieldKind::String),
        FieldSpec::optional("timeout", FieldKind::Number(Bound::Positive)),
        FieldSpec::optional("retries", FieldKind::Integer(Bound::NonNegative)),
    ],
};

impl Validated for Config {
    const SCHEMA: &'static Schema = &CONFIG_SCHEMA;
}

impl Config {
    /// The defaults written by `config init`
    pub fn starter() -> Self {
        Self {
            url: Some("http://localhost:2024".to_string()),
            api_key: Some("your-api-key-here".to_string()),
            default_assistant: None,
            timeout: Some(30_000.0),
            retries: Some(3),
        }
    }

    /// JSON view with the API key replaced by a set/not-set marker
    pub fn masked(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(object) = value.as_object_mut() {
            object.insert("apiKey".to_string(), mask(self.api_key.as_deref()).into());
        }
        value
    }
}

/// Whole milliseconds are written as integers, so `30000` stays `30000`.
fn serialize_millis<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(ms) if ms.fract() == 0.0 && *ms >= 0.0 && *ms <= u64::MAX as f64 => {
            serializer.serialize_some(&(*ms as u64))
        }
        other => other.serialize(serializer),
    }
}

/// `***set***` when a secret is present, `not set` otherwise.
pub fn mask(secret: Option<&str>) -> &'static str {
    match secret {
        Some(_) => "***set***",
        None => "not set",
    }
}
