use langgraph_client_cli::client::{ListNamespacesRequest, SearchItemsRequest};
use langgraph_client_cli::commands::store::set_item;
use langgraph_client_cli::{parse_namespace, LangGraphClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LangGraphClient {
    LangGraphClient::builder(server.uri()).build().unwrap()
}

#[tokio::test]
async fn test_set_wraps_json_value() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/store/items"))
        .and(body_json(json!({
            "namespace": ["a", "b", "c"],
            "key": "test-key",
            "value": {"value": {"data": "test-value"}}
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let namespace = parse_namespace("a.b.c");
    set_item(&client, &namespace, "test-key", r#"{"data":"test-value"}"#)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_falls_back_to_raw_string() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/store/items"))
        .and(body_json(json!({
            "namespace": ["users", "prefs"],
            "key": "theme",
            "value": {"value": "plain-string"}
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let namespace = parse_namespace(" users , prefs ");
    set_item(&client, &namespace, "theme", "plain-string")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_passes_dotted_namespace() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/items"))
        .and(query_param("namespace", "a.b"))
        .and(query_param("key", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "namespace": ["a", "b"],
            "key": "k",
            "value": {"value": 1},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = client
        .store()
        .get_item(&parse_namespace("a,b"), "k")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.namespace, vec!["a", "b"]);
    assert_eq!(item.value, Some(json!({"value": 1})));
}

#[tokio::test]
async fn test_get_missing_item_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/items"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Item not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = client
        .store()
        .get_item(&parse_namespace("a"), "missing")
        .await
        .unwrap();
    assert_eq!(item, None);
}

#[tokio::test]
async fn test_list_searches_by_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/store/items/search"))
        .and(body_json(json!({
            "namespace_prefix": ["a", "b"],
            "limit": 10,
            "query": "prefs"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"namespace": ["a", "b"], "key": "k", "value": {"x": 1}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = SearchItemsRequest {
        limit: 10,
        offset: None,
        query: Some("prefs".into()),
    };
    let items = client
        .store()
        .search_items(&parse_namespace("a.b"), &options)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key, "k");
}

#[tokio::test]
async fn test_delete_sends_item_reference() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/store/items"))
        .and(body_json(json!({"namespace": ["a"], "key": "k"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .store()
        .delete_item(&parse_namespace("a"), "k")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_namespaces_with_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/store/namespaces"))
        .and(body_json(json!({"limit": 50, "prefix": ["users"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "namespaces": [["users", "alice"], ["users", "bob"]]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ListNamespacesRequest {
        limit: 50,
        prefix: Some(parse_namespace("users")),
        ..Default::default()
    };
    let namespaces = client.store().list_namespaces(&options).await.unwrap();
    assert_eq!(namespaces, vec![vec!["users", "alice"], vec!["users", "bob"]]);
}
