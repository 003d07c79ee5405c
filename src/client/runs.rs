//! `/threads/{thread_id}/runs` endpoints, including server-sent event streaming

use eventsource_stream::{EventStreamError, Eventsource};
use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{LangGraphClient, Page};
use crate::config::payloads::JsonMap;
use crate::config::{MultitaskStrategy, RunConfig, StreamMode};
use crate::error::{CliError, Result};
use crate::schema::Nullable;

/// Body of the run create and stream endpoints.
///
/// Fields left absent in the [`RunConfig`] are omitted; explicit nulls are
/// sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRequest {
    pub assistant_id: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub input: Nullable<JsonMap>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub config: Nullable<JsonMap>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<JsonMap>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub multitask_strategy: Nullable<MultitaskStrategy>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub stream_mode: Nullable<StreamMode>,
}

impl RunRequest {
    pub fn new(assistant_id: impl Into<String>, run: RunConfig) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            input: run.input,
            config: run.config,
            metadata: run.metadata,
            multitask_strategy: run.multitask_strategy,
            stream_mode: run.stream_mode,
        }
    }
}

/// One chunk of a run stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamPart {
    pub event: String,
    /// Parsed JSON, or the raw text when the payload is not JSON
    pub data: Value,
}

impl StreamPart {
    fn from_event(event: String, data: &str) -> Self {
        let data = serde_json::from_str(data).unwrap_or_else(|_| Value::String(data.to_string()));
        Self { event, data }
    }
}

/// Chunks of a run, in arrival order
pub type RunStream = BoxStream<'static, Result<StreamPart>>;

/// Run operations, borrowed from a [`LangGraphClient`]
#[derive(Debug, Clone, Copy)]
pub struct RunsClient<'a> {
    client: &'a LangGraphClient,
}

impl<'a> RunsClient<'a> {
    pub(crate) fn new(client: &'a LangGraphClient) -> Self {
        Self { client }
    }

    /// `GET /threads/{thread_id}/runs`
    pub async fn list(&self, thread_id: &str, page: Page) -> Result<Value> {
        let req = self
            .client
            .request(Method::GET, &["threads", thread_id, "runs"])
            .query(&page);
        self.client.send_json(req).await
    }

    /// `GET /threads/{thread_id}/runs/{run_id}`
    pub async fn get(&self, thread_id: &str, run_id: &str) -> Result<Value> {
        let req = self
            .client
            .request(Method::GET, &["threads", thread_id, "runs", run_id]);
        self.client.send_json(req).await
    }

    /// `POST /threads/{thread_id}/runs`
    pub async fn create(&self, thread_id: &str, body: &RunRequest) -> Result<Value> {
        let req = self
            .client
            .request(Method::POST, &["threads", thread_id, "runs"])
            .json(body);
        self.client.send_json(req).await
    }

    /// `POST /threads/{thread_id}/runs/{run_id}/cancel`
    pub async fn cancel(&self, thread_id: &str, run_id: &str) -> Result<()> {
        let req = self.client.request(
            Method::POST,
            &["threads", thread_id, "runs", run_id, "cancel"],
        );
        self.client.send_empty(req).await
    }

    /// `POST /threads/{thread_id}/runs/stream`
    ///
    /// Resolves once the server has accepted the run; chunks are then pulled
    /// from the returned stream as they arrive.
    pub async fn stream(&self, thread_id: &str, body: &RunRequest) -> Result<RunStream> {
        let req = self
            .client
            .request(Method::POST, &["threads", thread_id, "runs", "stream"])
            .header(ACCEPT, "text/event-stream")
            .json(body);
        let response = self.client.send_streaming(req).await?;

        let parts = response.bytes_stream().eventsource().map(|frame| match frame {
            Ok(event) => Ok(StreamPart::from_event(event.event, &event.data)),
            Err(EventStreamError::Transport(e)) => Err(CliError::Http(e)),
            Err(e) => Err(CliError::Unknown(format!("malformed event stream: {e}"))),
        });

        Ok(parts.boxed())
    }
}
