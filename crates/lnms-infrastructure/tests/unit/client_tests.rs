//! LibreNMS API client tests against a local mock server

use lnms_domain::Error;
use lnms_infrastructure::client::{LibreNmsClient, Query};
use lnms_infrastructure::config::LibreNmsConfig;
use mockito::Server;
use serde_json::json;

fn client_for(server: &Server) -> LibreNmsClient {
    let config = LibreNmsConfig {
        base_url: server.url(),
        token: "test-token".to_string(),
        ..Default::default()
    };
    LibreNmsClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn get_sends_auth_token_and_decodes_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/devices")
        .match_header("x-auth-token", "test-token")
        .with_status(200)
        .with_body(r#"{"status":"ok","count":2}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.get("devices", None).await.expect("request should succeed");

    assert_eq!(result["status"], "ok");
    assert_eq!(result["count"], 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_forwards_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/devices")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("type".into(), "down".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut query = Query::new();
    query.insert("type".to_string(), json!("down"));
    query.insert("limit".to_string(), json!(5));
    client
        .get("devices", Some(&query))
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/devices")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({"hostname": "sw01"})))
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .post("devices", Some(&json!({"hostname": "sw01"})))
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_can_carry_a_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v0/devicegroups/core/devices")
        .match_body(mockito::Matcher::Json(json!({"devices": [1, 2]})))
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .delete("devicegroups/core/devices", Some(&json!({"devices": [1, 2]})))
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_preserves_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v0/devices/999")
        .with_status(404)
        .with_body(r#"{"status":"error","message":"Device not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get("devices/999", None).await.expect_err("expected failure");

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Device not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_network_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v0/system")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get("system", None).await.expect_err("expected failure");
    assert!(matches!(err, Error::Network { .. }));
}

#[test]
fn trailing_slash_in_base_url_is_trimmed() {
    let config = LibreNmsConfig {
        base_url: "https://nms.example.com/".to_string(),
        token: "t".to_string(),
        ..Default::default()
    };
    // construction succeeds; the URL join is covered by the mock tests
    assert!(LibreNmsClient::new(&config).is_ok());
}
