//! `/store` endpoints of the key-value store

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LangGraphClient;
use crate::error::{CliError, Result};
use crate::namespace::display_namespace;

/// A stored item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub namespace: Vec<String>,
    pub key: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Item {
    /// Display form with camelCase timestamps
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "namespace": self.namespace,
            "key": self.key,
            "value": self.value,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
        })
    }
}

#[derive(Debug, Serialize)]
struct ItemRef<'a> {
    namespace: &'a [String],
    key: &'a str,
}

#[derive(Debug, Serialize)]
struct PutItem<'a> {
    namespace: &'a [String],
    key: &'a str,
    value: &'a Value,
}

/// Options for `POST /store/items/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchItemsRequest {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchItemsBody<'a> {
    namespace_prefix: &'a [String],
    #[serde(flatten)]
    options: &'a SearchItemsRequest,
}

#[derive(Debug, Deserialize)]
struct SearchItemsResponse {
    #[serde(default)]
    items: Vec<Item>,
}

/// Options for `POST /store/namespaces`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListNamespacesRequest {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ListNamespacesResponse {
    #[serde(default)]
    namespaces: Vec<Vec<String>>,
}

/// Store operations, borrowed from a [`LangGraphClient`]
#[derive(Debug, Clone, Copy)]
pub struct StoreClient<'a> {
    client: &'a LangGraphClient,
}

impl<'a> StoreClient<'a> {
    pub(crate) fn new(client: &'a LangGraphClient) -> Self {
        Self { client }
    }

    /// `GET /store/items`. A 404 or null body means the item does not exist.
    pub async fn get_item(&self, namespace: &[String], key: &str) -> Result<Option<Item>> {
        let req = self
            .client
            .request(Method::GET, &["store", "items"])
            .query(&[("namespace", display_namespace(namespace).as_str()), ("key", key)]);

        match self.client.send_json::<Option<Item>>(req).await {
            Err(CliError::Api {
                status: Some(404), ..
            }) => Ok(None),
            other => other,
        }
    }

    /// `PUT /store/items`
    pub async fn put_item(&self, namespace: &[String], key: &str, value: &Value) -> Result<()> {
        let req = self.client.request(Method::PUT, &["store", "items"]).json(&PutItem {
            namespace,
            key,
            value,
        });
        self.client.send_empty(req).await
    }

    /// `DELETE /store/items`
    pub async fn delete_item(&self, namespace: &[String], key: &str) -> Result<()> {
        let req = self
            .client
            .request(Method::DELETE, &["store", "items"])
            .json(&ItemRef { namespace, key });
        self.client.send_empty(req).await
    }

    /// `POST /store/items/search`
    pub async fn search_items(
        &self,
        namespace_prefix: &[String],
        options: &SearchItemsRequest,
    ) -> Result<Vec<Item>> {
        let req = self
            .client
            .request(Method::POST, &["store", "items", "search"])
            .json(&SearchItemsBody {
                namespace_prefix,
                options,
            });
        let response: SearchItemsResponse = self.client.send_json(req).await?;
        Ok(response.items)
    }

    /// `POST /store/namespaces`
    pub async fn list_namespaces(&self, options: &ListNamespacesRequest) -> Result<Vec<Vec<String>>> {
        let req = self
            .client
            .request(Method::POST, &["store", "namespaces"])
            .json(options);
        let response: ListNamespacesResponse = self.client.send_json(req).await?;
        Ok(response.namespaces)
    }
}
