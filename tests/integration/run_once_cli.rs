#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SSE_BODY: &str = "event: values\ndata: {\"messages\": []}\n\n";

#[tokio::test(flavor = "multi_thread")]
async fn test_once_reports_failed_cleanup_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"thread_id": "tmp-9"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/threads/tmp-9/runs/stream"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(SSE_BODY),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/threads/tmp-9"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let cwd = TempDir::new().unwrap();
        Command::new(cargo_bin("langgraph-client-cli"))
            .current_dir(cwd.path())
            .env_remove("LANGGRAPH_API_URL")
            .env_remove("LANGGRAPH_API_KEY")
            .env_remove("RUST_LOG")
            .args(["runs", "once", "agent", "--url", &uri])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created temporary thread: tmp-9"));
    assert!(!stdout.contains("Cleaned up"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("clean up").count(), 1, "stderr was: {stderr}");
}
