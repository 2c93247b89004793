use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panel_client::{ClientConfig, ClientError, PanelClient};

fn client_for(base_url: &str) -> PanelClient {
    PanelClient::new(ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn success(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "success",
        "data": data,
    }))
}

#[tokio::test]
async fn node_list_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/node/list"))
        .respond_with(success(json!([{
            "id": 1,
            "is_local": true,
            "name": "local",
            "display_name": "Local",
            "address": "127.0.0.1",
            "ssh_port": 22,
            "agent_port": 9100,
            "ssh_user": "root",
            "ssh_password": "",
            "status": "online"
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let nodes = client.nodes().list().await.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "local");
    assert!(nodes[0].is_local);
}

#[tokio::test]
async fn application_page_sends_page_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/page"))
        .and(body_json(json!({"page": 2, "page_size": 10})))
        .respond_with(success(json!({
            "total": 31,
            "current_page": 2,
            "page_size": 10,
            "apps": [{"id": 11, "name": "redis"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let page = client.applications().page(2, 10).await.unwrap();
    assert_eq!(page.total, 31);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.apps[0].name, "redis");
}

#[tokio::test]
async fn envelope_error_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/node/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": -1,
            "message": "node not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.nodes().get(999).await.unwrap_err();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, -1);
            assert_eq!(message, "node not found");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn http_failure_becomes_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/env/scopes"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.envs().scopes().await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected Status error, got {other}"),
    }
}

#[tokio::test]
async fn success_without_data_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/application/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "success"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.applications().get(1).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingData(_)));
}

#[tokio::test]
async fn delete_accepts_null_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/env/delete"))
        .and(body_json(json!({"id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "success",
            "data": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.envs().delete(7).await.unwrap();
}

#[tokio::test]
async fn docker_calls_carry_node_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/docker/info"))
        .and(header("x-node-id", "7"))
        .respond_with(success(json!({
            "version": "27.0.1",
            "api_version": "1.45",
            "os": "linux",
            "arch": "amd64",
            "total_memory": 8589934592u64,
            "total_cpu": 4,
            "total_disk": 107374182400u64
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let info = client.docker().info(7).await.unwrap();
    assert_eq!(info.version, "27.0.1");
    assert_eq!(info.total_cpu, 4);
}

#[tokio::test]
async fn env_scopes_decode_plain_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/env/scopes"))
        .respond_with(success(json!(["global", "redis"])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let scopes = client.envs().scopes().await.unwrap();
    assert_eq!(scopes, vec!["global", "redis"]);
}

#[tokio::test]
async fn workspace_listing_decodes_camel_case_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/workspace/list"))
        .and(body_json(json!({"app_name": "redis", "path": "conf"})))
        .respond_with(success(json!({
            "currentPath": "conf",
            "entries": [{
                "name": "redis.conf",
                "path": "conf/redis.conf",
                "is_dir": false,
                "size": 512,
                "mod_time": "2026-02-01T10:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let listing = client.workspace().list("redis", "conf").await.unwrap();
    assert_eq!(listing.current_path, "conf");
    assert_eq!(listing.entries[0].name, "redis.conf");
}

#[tokio::test]
async fn service_save_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/save"))
        .respond_with(success(json!({"id": 42})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let saved = client
        .services()
        .save(&panel_client::models::SaveService {
            id: 0,
            name: "cache".to_string(),
            app_id: 3,
            node_id: 1,
            qa_values: Default::default(),
        })
        .await
        .unwrap();
    assert_eq!(saved.id, 42);
}

#[tokio::test]
async fn health_uses_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.health().await.unwrap();
}

#[tokio::test]
async fn dashboard_stats_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/dashboard/stats"))
        .respond_with(success(json!({
            "total_nodes": 3,
            "total_applications": 12,
            "total_services": 7
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_nodes, 3);
    assert_eq!(stats.total_services, 7);
}
