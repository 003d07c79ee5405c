use futures::StreamExt;
use langgraph_client_cli::client::{RunRequest, StreamPart};
use langgraph_client_cli::commands::runs::run_once;
use langgraph_client_cli::config::{RunConfig, StreamMode};
use langgraph_client_cli::schema::Nullable;
use langgraph_client_cli::LangGraphClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SSE_BODY: &str = "event: metadata\n\
data: {\"run_id\": \"r-1\"}\n\
\n\
event: values\n\
data: {\"messages\": []}\n\
\n\
event: end\n\
data: done\n\
\n";

#[tokio::test]
async fn test_stream_decodes_events_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/t-1/runs/stream"))
        .and(header("accept", "text/event-stream"))
        .and(body_json(json!({"assistant_id": "agent", "stream_mode": "values"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(SSE_BODY),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = LangGraphClient::builder(server.uri()).build().unwrap();
    let run = RunConfig {
        stream_mode: Nullable::Present(StreamMode::Values),
        ..Default::default()
    };
    let body = RunRequest::new("agent", run);

    let parts: Vec<StreamPart> = client
        .runs()
        .stream("t-1", &body)
        .await
        .unwrap()
        .map(|part| part.unwrap())
        .collect()
        .await;

    assert_eq!(
        parts,
        vec![
            StreamPart {
                event: "metadata".into(),
                data: json!({"run_id": "r-1"}),
            },
            StreamPart {
                event: "values".into(),
                data: json!({"messages": []}),
            },
            StreamPart {
                event: "end".into(),
                data: json!("done"),
            },
        ]
    );
}

#[tokio::test]
async fn test_stream_rejected_run_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/t-1/runs/stream"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "Thread is busy"})))
        .mount(&server)
        .await;

    let client = LangGraphClient::builder(server.uri()).build().unwrap();
    let body = RunRequest::new("agent", RunConfig::default());

    let err = match client.runs().stream("t-1", &body).await {
        Ok(_) => panic!("expected the stream to be rejected"),
        Err(e) => e,
    };
    assert_eq!(err.status_code(), Some(409));
    assert!(err.to_string().contains("Thread is busy"));
}

async fn mount_temporary_thread(server: &MockServer, delete_status: u16) {
    Mock::given(method("POST"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"thread_id": "tmp-1"})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/threads/tmp-1/runs/stream"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(SSE_BODY),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/threads/tmp-1"))
        .respond_with(ResponseTemplate::new(delete_status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_once_deletes_temporary_thread() {
    let server = MockServer::start().await;
    mount_temporary_thread(&server, 204).await;

    let client = LangGraphClient::builder(server.uri()).build().unwrap();
    let body = RunRequest::new("agent", RunConfig::default());
    run_once(&client, &body, false).await.unwrap();
}

#[tokio::test]
async fn test_once_cleanup_failure_is_not_an_error() {
    let server = MockServer::start().await;
    mount_temporary_thread(&server, 500).await;

    let client = LangGraphClient::builder(server.uri()).build().unwrap();
    let body = RunRequest::new("agent", RunConfig::default());
    run_once(&client, &body, false).await.unwrap();
}

#[tokio::test]
async fn test_once_keep_thread_skips_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"thread_id": "tmp-2"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/threads/tmp-2/runs/stream"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(SSE_BODY),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = LangGraphClient::builder(server.uri()).build().unwrap();
    let body = RunRequest::new("agent", RunConfig::default());
    run_once(&client, &body, true).await.unwrap();
}
