//! `/threads` endpoints

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{LangGraphClient, Page};
use crate::config::payloads::JsonMap;
use crate::config::{IfExists, ThreadConfig};
use crate::error::Result;
use crate::schema::Nullable;

/// Body of `POST /threads`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThreadCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<JsonMap>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub if_exists: Nullable<IfExists>,
}

impl ThreadCreateRequest {
    pub fn new(thread_id: Option<String>, config: ThreadConfig) -> Self {
        Self {
            thread_id,
            metadata: config.metadata,
            if_exists: config.if_exists,
        }
    }
}

/// Thread operations, borrowed from a [`LangGraphClient`]
#[derive(Debug, Clone, Copy)]
pub struct ThreadsClient<'a> {
    client: &'a LangGraphClient,
}

impl<'a> ThreadsClient<'a> {
    pub(crate) fn new(client: &'a LangGraphClient) -> Self {
        Self { client }
    }

    /// `POST /threads/search`
    pub async fn search(&self, page: Page) -> Result<Value> {
        let req = self.client.request(Method::POST, &["threads", "search"]).json(&page);
        self.client.send_json(req).await
    }

    /// `GET /threads/{thread_id}`
    pub async fn get(&self, thread_id: &str) -> Result<Value> {
        let req = self
            .client
            .request(Method::GET, &["threads", thread_id]);
        self.client.send_json(req).await
    }

    /// `POST /threads`
    pub async fn create(&self, body: &ThreadCreateRequest) -> Result<Value> {
        let req = self.client.request(Method::POST, &["threads"]).json(body);
        self.client.send_json(req).await
    }

    /// `DELETE /threads/{thread_id}`
    pub async fn delete(&self, thread_id: &str) -> Result<()> {
        let req = self
            .client
            .request(Method::DELETE, &["threads", thread_id]);
        self.client.send_empty(req).await
    }

    /// `GET /threads/{thread_id}/state`
    pub async fn get_state(&self, thread_id: &str) -> Result<Value> {
        let req = self
            .client
            .request(Method::GET, &["threads", thread_id, "state"]);
        self.client.send_json(req).await
    }
}
