//! `/assistants` endpoints

use reqwest::Method;
use serde_json::Value;

use super::{LangGraphClient, Page};
use crate::config::AssistantConfig;
use crate::error::Result;

/// Assistant operations, borrowed from a [`LangGraphClient`]
#[derive(Debug, Clone, Copy)]
pub struct AssistantsClient<'a> {
    client: &'a LangGraphClient,
}

impl<'a> AssistantsClient<'a> {
    pub(crate) fn new(client: &'a LangGraphClient) -> Self {
        Self { client }
    }

    /// `POST /assistants/search`
    pub async fn search(&self, page: Page) -> Result<Value> {
        let req = self
            .client
            .request(Method::POST, &["assistants", "search"])
            .json(&page);
        self.client.send_json(req).await
    }

    /// `GET /assistants/{assistant_id}`
    pub async fn get(&self, assistant_id: &str) -> Result<Value> {
        let req = self
            .client
            .request(Method::GET, &["assistants", assistant_id]);
        self.client.send_json(req).await
    }

    /// `POST /assistants`
    pub async fn create(&self, assistant: &AssistantConfig) -> Result<Value> {
        let req = self.client.request(Method::POST, &["assistants"]).json(assistant);
        self.client.send_json(req).await
    }

    /// `DELETE /assistants/{assistant_id}`
    pub async fn delete(&self, assistant_id: &str) -> Result<()> {
        let req = self
            .client
            .request(Method::DELETE, &["assistants", assistant_id]);
        self.client.send_empty(req).await
    }
}
