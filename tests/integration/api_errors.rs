use langgraph_client_cli::client::Page;
use langgraph_client_cli::{create_client, CliError, Config};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, api_key: Option<&str>) -> Config {
    Config {
        url: Some(server.uri()),
        api_key: api_key.map(str::to_string),
        timeout: Some(5_000.0),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_not_found_maps_to_api_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assistants/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Assistant not found"})))
        .mount(&server)
        .await;

    let client = create_client(&config_for(&server, None)).unwrap();
    let err = client.assistants().get("missing").await.unwrap_err();

    match &err {
        CliError::Api { message, status } => {
            assert_eq!(*status, Some(404));
            assert!(message.contains("Assistant not found"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("API error:"));
}

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/search"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"thread_id": "t-1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&config_for(&server, Some("test-key"))).unwrap();
    let threads = client
        .threads()
        .search(Page { limit: 10, offset: 0 })
        .await
        .unwrap();
    assert_eq!(threads[0]["thread_id"], "t-1");
}

#[tokio::test]
async fn test_runs_list_sends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t-1/runs"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&config_for(&server, None)).unwrap();
    let runs = client
        .runs()
        .list("t-1", Page { limit: 5, offset: 2 })
        .await
        .unwrap();
    assert_eq!(runs, json!([]));
}

#[tokio::test]
async fn test_server_error_without_body_uses_reason() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/threads/t-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_client(&config_for(&server, None)).unwrap();
    let err = client.threads().delete("t-1").await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("HTTP 500: Internal Server Error"));
}

#[tokio::test]
async fn test_ids_cannot_escape_their_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/a%2Fb%3Fx/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&config_for(&server, None)).unwrap();
    let state = client.threads().get_state("a/b?x").await.unwrap();
    assert_eq!(state, json!({"values": {}}));
}
