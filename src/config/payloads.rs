//! Typed run, thread and assistant payloads
//!
//! Candidates are assembled from flags or files as JSON with camelCase keys,
//! checked against their schema, then turned into these types. Outgoing
//! request bodies use the server's snake_case names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{FieldKind, FieldSpec, Nullable, Schema, Validated};

pub type JsonMap = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultitaskStrategy {
    Reject,
    Interrupt,
    Rollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamMode {
    Values,
    Updates,
    Debug,
    Messages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IfExists {
    Raise,
    DoNothing,
}

const MULTITASK_STRATEGIES: &[&str] = &["reject", "interrupt", "rollback"];
const STREAM_MODES: &[&str] = &["values", "updates", "debug", "messages"];
const IF_EXISTS: &[&str] = &["raise", "do_nothing"];

/// Options for creating or streaming a run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    #[serde(default)]
    pub input: Nullable<JsonMap>,
    #[serde(default)]
    pub config: Nullable<JsonMap>,
    #[serde(default)]
    pub metadata: Nullable<JsonMap>,
    #[serde(default)]
    pub multitask_strategy: Nullable<MultitaskStrategy>,
    #[serde(default)]
    pub stream_mode: Nullable<StreamMode>,
}

pub static RUN_CONFIG_SCHEMA: Schema = Schema {
    name: "run config",
    fields: &[
        FieldSpec::nullable("input", FieldKind::Object),
        FieldSpec::nullable("config", FieldKind::Object),
        FieldSpec::nullable("metadata", FieldKind::Object),
        FieldSpec::nullable("multitaskStrategy", FieldKind::Enum(MULTITASK_STRATEGIES)),
        FieldSpec::nullable("streamMode", FieldKind::Enum(STREAM_MODES)),
    ],
};

impl Validated for RunConfig {
    const SCHEMA: &'static Schema = &RUN_CONFIG_SCHEMA;
}

/// Options for creating a thread
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadConfig {
    #[serde(default)]
    pub metadata: Nullable<JsonMap>,
    #[serde(default)]
    pub if_exists: Nullable<IfExists>,
}

pub static THREAD_CONFIG_SCHEMA: Schema = Schema {
    name: "thread config",
    fields: &[
        FieldSpec::nullable("metadata", FieldKind::Object),
        FieldSpec::nullable("ifExists", FieldKind::Enum(IF_EXISTS)),
    ],
};

impl Validated for ThreadConfig {
    const SCHEMA: &'static Schema = &THREAD_CONFIG_SCHEMA;
}

/// Assistant definition, read from a JSON file by `assistants create`.
///
/// Serializes straight into the `POST /assistants` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    #[serde(rename(serialize = "graph_id"))]
    pub graph_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<JsonMap>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub config: Nullable<JsonMap>,
    #[serde(
        default,
        rename(serialize = "assistant_id"),
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub assistant_id: Nullable<String>,
    #[serde(
        default,
        rename(serialize = "if_exists"),
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub if_exists: Nullable<IfExists>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
}

pub static ASSISTANT_CONFIG_SCHEMA: Schema = Schema {
    name: "assistant config",
    fields: &[
        FieldSpec::required("graphId", FieldKind::String),
        FieldSpec::nullable("metadata", FieldKind::Object),
        FieldSpec::nullable("config", FieldKind::Object),
        FieldSpec::nullable("assistantId", FieldKind::String),
        FieldSpec::nullable("ifExists", FieldKind::Enum(IF_EXISTS)),
        FieldSpec::nullable("name", FieldKind::String),
    ],
};

impl Validated for AssistantConfig {
    const SCHEMA: &'static Schema = &ASSISTANT_CONFIG_SCHEMA;
}
