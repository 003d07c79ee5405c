//! Error types for the LangGraph client CLI
//!
//! One closed error enum covers every failure the CLI can surface. The
//! reporting routine at the bottom classifies an error into a presentation
//! case, prints it to stderr and terminates the process with exit status 1.

use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

/// Main result type for the CLI
pub type Result<T> = std::result::Result<T, CliError>;

/// Boxed underlying failure kept as the cause of a CLI or configuration error
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A single field that failed schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// CLI errors with structured data
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{message}")]
    Cli {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error("Validation error: invalid {schema}: {}", join_violations(.violations))]
    SchemaValidation {
        schema: &'static str,
        violations: Vec<Violation>,
    },

    #[error("API error: {message}")]
    Api { message: String, status: Option<u16> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Unknown(String),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CliError {
    /// Create a new base CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a base CLI error wrapping an underlying failure
    pub fn cli_with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::Cli {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a configuration error wrapping an underlying failure
    pub fn config_with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::Config {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a new schema validation error
    pub fn schema(schema: &'static str, violations: Vec<Violation>) -> Self {
        Self::SchemaValidation { schema, violations }
    }

    /// Create a new API error
    pub fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status,
        }
    }

    /// Status code carried by an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Convert to JSON-serializable error object
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Cli { message, cause } => serde_json::json!({
                "name": "CliError",
                "data": {
                    "message": message,
                    "cause": cause.as_ref().map(|c| c.to_string()),
                }
            }),
            Self::Config { cause, .. } => serde_json::json!({
                "name": "ConfigError",
                "data": {
                    "message": self.to_string(),
                    "cause": cause.as_ref().map(|c| c.to_string()),
                }
            }),
            Self::SchemaValidation { schema, violations } => serde_json::json!({
                "name": "SchemaValidationError",
                "data": {
                    "schema": schema,
                    "violations": violations
                        .iter()
                        .map(|v| serde_json::json!({ "field": v.field, "message": v.message }))
                        .collect::<Vec<_>>(),
                }
            }),
            Self::Api { status, .. } => serde_json::json!({
                "name": "APIError",
                "data": {
                    "message": self.to_string(),
                    "statusCode": status,
                }
            }),
            Self::Io(e) => serde_json::json!({
                "name": "IOError",
                "data": {
                    "message": e.to_string(),
                }
            }),
            Self::Json(e) => serde_json::json!({
                "name": "JSONError",
                "data": {
                    "message": e.to_string(),
                }
            }),
            Self::Http(e) => serde_json::json!({
                "name": "HTTPError",
                "data": {
                    "message": chain_message(e),
                }
            }),
            Self::Unknown(msg) => serde_json::json!({
                "name": "UnknownError",
                "data": {
                    "message": msg,
                }
            }),
        }
    }
}

/// Flattens an error and its sources into one line.
///
/// reqwest puts the interesting part ("Connection refused") in the source
/// chain, not in the top-level message.
fn chain_message(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        source = s.source();
    }
    msg
}

/// How a failure is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Errors raised deliberately by the CLI (config, validation, API, usage)
    Known,
    /// Transport, IO and decoding failures nobody anticipated
    Unexpected,
    /// Failures without any structured error attached
    Unknown,
}

impl CliError {
    pub fn presentation(&self) -> Presentation {
        match self {
            Self::Cli { .. } | Self::Config { .. } | Self::SchemaValidation { .. } | Self::Api { .. } => {
                Presentation::Known
            }
            Self::Io(_) | Self::Json(_) | Self::Http(_) => Presentation::Unexpected,
            Self::Unknown(_) => Presentation::Unknown,
        }
    }
}

const SEND_FAILURE_MARKERS: &[&str] = &["fetch failed", "error sending request"];
const CONNECTION_REFUSED_MARKERS: &[&str] = &["ECONNREFUSED", "Connection refused", "connection refused"];

/// Write the user-facing report for `err`.
pub fn report(err: &CliError, out: &mut impl Write) -> io::Result<()> {
    match err.presentation() {
        Presentation::Known => {
            writeln!(out, "❌ {err}")?;
            if let Some(cause) = err.source() {
                writeln!(out, "Caused by: {cause}")?;
            }
            if let CliError::Api {
                status: Some(code), ..
            } = err
            {
                writeln!(out, "Status code: {code}")?;
            }
        }
        Presentation::Unexpected => {
            let message = match err {
                CliError::Http(e) => chain_message(e),
                other => other.to_string(),
            };
            writeln!(out, "❌ Unexpected error: {message}")?;

            if SEND_FAILURE_MARKERS.iter().any(|m| message.contains(m)) {
                writeln!(out)?;
                writeln!(out, "💡 This usually means:")?;
                writeln!(out, "   • The LangGraph server is not running")?;
                writeln!(out, "   • The server URL is incorrect")?;
                writeln!(out, "   • Network connectivity issues")?;
                writeln!(out)?;
                writeln!(out, "🔧 Try:")?;
                writeln!(out, "   • Check if the server is running at the specified URL")?;
                writeln!(out, "   • Verify the URL with --url or in your config file")?;
                writeln!(out, "   • Start a local server with: langgraph dev")?;
            } else if CONNECTION_REFUSED_MARKERS.iter().any(|m| message.contains(m)) {
                writeln!(out)?;
                writeln!(out, "💡 Connection refused - the server is not accepting connections")?;
                writeln!(out, "🔧 Try starting the LangGraph server first")?;
            }
        }
        Presentation::Unknown => {
            writeln!(out, "❌ Unknown error: {err}")?;
        }
    }
    Ok(())
}

/// Print the report for `err` to stderr and exit with status 1.
pub fn handle_error(err: &CliError) -> ! {
    tracing::debug!(error = ?err, "command failed");
    let stderr = io::stderr();
    let mut lock = stderr.lock();
    let _ = report(err, &mut lock);
    let _ = lock.flush();
    std::process::exit(1)
}
