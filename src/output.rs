//! Output helpers
//!
//! Results go to stdout as indented JSON; status lines for destructive or
//! creating actions are plain text on stdout as well.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Render a value as indented JSON
pub fn to_pretty_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a value to stdout as indented JSON
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let json = to_pretty_json(value)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    writeln!(lock, "{json}")?;
    lock.flush()?;
    Ok(())
}

/// Print a human-readable status line to stdout
pub fn print_status(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

/// `{"message": ...}` object used for store acknowledgements
pub fn message(text: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "message": text.into() })
}
