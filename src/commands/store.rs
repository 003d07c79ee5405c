//! `store` subcommands

use clap::Subcommand;
use serde_json::{json, Value};

use super::ConnectionArgs;
use crate::client::{Item, LangGraphClient, ListNamespacesRequest, SearchItemsRequest};
use crate::error::Result;
use crate::namespace::{display_namespace, parse_namespace};
use crate::output::{message, print_json};

#[derive(Subcommand, Debug, Clone)]
pub enum StoreCommand {
    /// Get an item from the store
    Get {
        /// Namespace, `.` or `,` separated
        namespace: String,
        key: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Set an item in the store
    Set {
        /// Namespace, `.` or `,` separated
        namespace: String,
        key: String,
        /// Value as JSON, or plain text
        value: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// Delete an item from the store
    Delete {
        /// Namespace, `.` or `,` separated
        namespace: String,
        key: String,
        #[command(flatten)]
        conn: ConnectionArgs,
    },
    /// List items in a namespace
    List {
        /// Namespace prefix, `.` or `,` separated
        namespace: String,
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Maximum number of items to return
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Offset for pagination
        #[arg(long)]
        offset: Option<u32>,
        /// Search query
        #[arg(long)]
        query: Option<String>,
    },
    /// List namespaces
    Namespaces {
        #[command(flatten)]
        conn: ConnectionArgs,
        /// Maximum number of namespaces to return
        #[arg(long, default_value_t = 50)]
        limit: u32,
        /// Offset for pagination
        #[arg(long)]
        offset: Option<u32>,
        /// Namespace prefix filter
        #[arg(long)]
        prefix: Option<String>,
        /// Namespace suffix filter
        #[arg(long)]
        suffix: Option<String>,
    },
}

pub async fn run(cmd: StoreCommand) -> Result<()> {
    match cmd {
        StoreCommand::Get {
            namespace,
            key,
            conn,
        } => {
            let (_, client) = conn.connect()?;
            let ns = parse_namespace(&namespace);
            let item = client.store().get_item(&ns, &key).await?;
            print_json(&render_item(item, &ns, &key))
        }
        StoreCommand::Set {
            namespace,
            key,
            value,
            conn,
        } => {
            let (_, client) = conn.connect()?;
            let ns = parse_namespace(&namespace);
            set_item(&client, &ns, &key, &value).await?;
            print_json(&message(format!(
                "Item set successfully: {}/{key}",
                display_namespace(&ns)
            )))
        }
        StoreCommand::Delete {
            namespace,
            key,
            conn,
        } => {
            let (_, client) = conn.connect()?;
            let ns = parse_namespace(&namespace);
            client.store().delete_item(&ns, &key).await?;
            print_json(&message(format!(
                "Item deleted successfully: {}/{key}",
                display_namespace(&ns)
            )))
        }
        StoreCommand::List {
            namespace,
            conn,
            limit,
            offset,
            query,
        } => {
            let (_, client) = conn.connect()?;
            let ns = parse_namespace(&namespace);
            let options = SearchItemsRequest {
                limit,
                offset,
                query,
            };
            let items = client.store().search_items(&ns, &options).await?;
            if items.is_empty() {
                return print_json(&message(format!(
                    "No items found in namespace: {}",
                    display_namespace(&ns)
                )));
            }
            let rendered: Vec<Value> = items.iter().map(Item::to_json).collect();
            print_json(&rendered)
        }
        StoreCommand::Namespaces {
            conn,
            limit,
            offset,
            prefix,
            suffix,
        } => {
            let (_, client) = conn.connect()?;
            let options = ListNamespacesRequest {
                limit,
                offset,
                prefix: prefix.as_deref().map(parse_namespace),
                suffix: suffix.as_deref().map(parse_namespace),
            };
            let namespaces = client.store().list_namespaces(&options).await?;
            if namespaces.is_empty() {
                return print_json(&message("No namespaces found"));
            }
            print_json(&namespaces)
        }
    }
}

/// Interpret a `store set` value: JSON when it parses, otherwise the raw text.
pub fn parse_store_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Store `raw` under `namespace`/`key`, wrapped as `{"value": ...}`.
pub async fn set_item(client: &LangGraphClient, namespace: &[String], key: &str, raw: &str) -> Result<()> {
    let value = json!({ "value": parse_store_value(raw) });
    tracing::debug!(namespace = %display_namespace(namespace), key, "putting store item");
    client.store().put_item(namespace, key, &value).await
}

/// What `store get` prints: the item, or an error object when the item or
/// its value is missing.
pub fn render_item(item: Option<Item>, namespace: &[String], key: &str) -> Value {
    match item {
        Some(item) if item.value.is_some() => item.to_json(),
        _ => json!({
            "error": format!("Item not found: {}/{key}", display_namespace(namespace))
        }),
    }
}
