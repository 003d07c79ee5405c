//! HTTP client for the LangGraph server API
//!
//! A thin wrapper over `reqwest`: one handle carrying the server URL, API key
//! and timeout, with entity-scoped accessors (`client.threads().get(..)`)
//! shaped after the official SDKs.

mod assistants;
mod runs;
mod store;
mod threads;

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{CliError, Result};

pub use assistants::AssistantsClient;
pub use runs::{RunRequest, RunStream, RunsClient, StreamPart};
pub use store::{Item, ListNamespacesRequest, SearchItemsRequest, StoreClient};
pub use threads::{ThreadCreateRequest, ThreadsClient};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Pagination shared by the list/search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

/// Handle to a LangGraph server
#[derive(Debug, Clone)]
pub struct LangGraphClient {
    base_url: String,
    base: Url,
    api_key: Option<String>,
    timeout: Option<Duration>,
    http: reqwest::Client,
}

impl LangGraphClient {
    /// Returns a builder for the server at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            api_key: None,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn assistants(&self) -> AssistantsClient<'_> {
        AssistantsClient::new(self)
    }

    pub fn threads(&self) -> ThreadsClient<'_> {
        ThreadsClient::new(self)
    }

    pub fn runs(&self) -> RunsClient<'_> {
        RunsClient::new(self)
    }

    pub fn store(&self) -> StoreClient<'_> {
        StoreClient::new(self)
    }

    /// URL of the endpoint under the base URL. Each segment is
    /// percent-encoded, so IDs cannot add path components or a query.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `build` rejects URLs that cannot carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request to the endpoint at `segments` with auth applied.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        tracing::debug!(%method, path = url.path(), "LangGraph API request");
        let mut req = self.http.request(method, url);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        req
    }

    /// Send with the configured timeout and fail on non-2xx statuses.
    pub(crate) async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let req = match self.timeout {
            Some(timeout) => req.timeout(timeout),
            None => req,
        };
        check_status(req.send().await?).await
    }

    /// Send without the request timeout, for long-lived event streams.
    pub(crate) async fn send_streaming(&self, req: RequestBuilder) -> Result<Response> {
        check_status(req.send().await?).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let response = self.send(req).await?;
        Ok(response.json().await?)
    }

    /// Send and discard the response body.
    pub(crate) async fn send_empty(&self, req: RequestBuilder) -> Result<()> {
        self.send(req).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CliError::api(error_detail(status, &body), Some(status.as_u16())))
}

/// Server errors come as `{"detail": ...}` (or `message`); fall back to the raw body.
fn error_detail(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["detail", "message", "error"]
            .iter()
            .find_map(|key| v.get(*key))
            .map(|d| match d {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    });

    let detail = match detail {
        Some(d) => d,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status.canonical_reason().unwrap_or("request failed").to_string(),
    };

    format!("HTTP {}: {}", status.as_u16(), detail)
}

/// Builder for [`LangGraphClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client, rejecting a URL that does not parse.
    pub fn build(self) -> Result<LangGraphClient> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            CliError::config_with_cause(format!("Invalid server URL: {}", self.base_url), e)
        })?;
        if base.cannot_be_a_base() {
            return Err(CliError::config(format!(
                "Invalid server URL: {}",
                self.base_url
            )));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(LangGraphClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            base,
            api_key: self.api_key,
            timeout: self.timeout,
            http,
        })
    }
}

/// Build a client from the resolved configuration.
///
/// The URL is mandatory. A missing API key only produces a warning since
/// local development servers run without authentication.
pub fn create_client(config: &Config) -> Result<LangGraphClient> {
    let Some(url) = config.url.as_deref() else {
        return Err(CliError::config(
            "No LangGraph server URL provided. Please set --url option, add \"url\" to config file, or set LANGGRAPH_API_URL environment variable.",
        ));
    };

    tracing::info!(url, "connecting to LangGraph server");
    match config.api_key {
        Some(_) => tracing::info!("using API key for authentication"),
        None => tracing::warn!("no API key provided - some operations may fail"),
    }

    LangGraphClient::builder(url)
        .api_key(config.api_key.clone())
        .timeout(config.timeout.and_then(millis_to_duration))
        .build()
}

/// Zero, negative and non-finite values mean no timeout.
fn millis_to_duration(ms: f64) -> Option<Duration> {
    if ms.is_finite() && ms > 0.0 {
        Duration::try_from_secs_f64(ms / 1000.0).ok()
    } else {
        None
    }
}
