//! Handler wire-format tests
//!
//! Exercise the request shapes the LibreNMS API is picky about:
//! the field/data reshaping on device updates, encoded path segments,
//! and the from/to query key translation.

use std::sync::Arc;

use lnms_infrastructure::LibreNmsClient;
use lnms_infrastructure::config::LibreNmsConfig;
use lnms_server::handlers::ToolHandlers;
use lnms_server::tools::route_tool_call;
use mockito::Matcher;
use rmcp::model::CallToolRequestParam;
use serde_json::json;

fn handlers_for(server: &mockito::Server) -> ToolHandlers {
    let config = LibreNmsConfig {
        base_url: server.url(),
        token: "test-token".to_string(),
        verify_ssl: true,
        timeout_secs: 5,
    };
    ToolHandlers::new(Arc::new(
        LibreNmsClient::new(&config).expect("client should build"),
    ))
}

fn request(name: &'static str, arguments: serde_json::Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.into(),
        arguments: arguments.as_object().cloned(),
        task: None,
        meta: None,
    }
}

fn content_text(result: &rmcp::model::CallToolResult) -> String {
    let content = serde_json::to_value(&result.content[0]).expect("content serializes");
    content["text"].as_str().expect("text content").to_string()
}

#[tokio::test]
async fn device_update_reshapes_a_single_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/v0/devices/router-01")
        .match_body(Matcher::Json(json!({"field": "notes", "data": "rack 7"})))
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    let result = route_tool_call(
        request(
            "device_update",
            json!({"hostname": "router-01", "payload": {"notes": "rack 7"}}),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
    assert_ne!(result.is_error, Some(true));
}

#[tokio::test]
async fn device_update_reshapes_multiple_fields_as_arrays() {
    let mut server = mockito::Server::new_async().await;
    // serde_json maps iterate in key order, so ignore sorts before notes
    let mock = server
        .mock("PATCH", "/api/v0/devices/router-01")
        .match_body(Matcher::Json(
            json!({"field": ["ignore", "notes"], "data": [1, "rack 7"]}),
        ))
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    route_tool_call(
        request(
            "device_update",
            json!({"hostname": "router-01", "payload": {"notes": "rack 7", "ignore": 1}}),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn device_update_rejects_non_object_payloads() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);

    let err = route_tool_call(
        request(
            "device_update",
            json!({"hostname": "router-01", "payload": "notes"}),
        ),
        &handlers,
    )
    .await
    .expect_err("should be rejected");
    assert!(err.message.contains("JSON object"));
}

#[tokio::test]
async fn interface_names_are_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/devices/router-01/ports/GigabitEthernet0%2F1")
        .with_body(r#"{"port": {}}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    route_tool_call(
        request(
            "device_ports_get",
            json!({"hostname": "router-01", "ifname": "GigabitEthernet0/1"}),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn log_time_filters_use_api_key_names() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/logs/eventlog/router-01")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "1700000000".into()),
            Matcher::UrlEncoded("to".into(), "1700003600".into()),
            Matcher::UrlEncoded("limit".into(), "50".into()),
        ]))
        .with_body(r#"{"logs": []}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    route_tool_call(
        request(
            "logs_eventlog",
            json!({
                "hostname": "router-01",
                "from_ts": "1700000000",
                "to_ts": "1700003600",
                "limit": 50
            }),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn devicegroup_remove_devices_sends_delete_with_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v0/devicegroups/core/devices")
        .match_body(Matcher::Json(json!({"devices": [1, 2]})))
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    route_tool_call(
        request(
            "devicegroup_remove_devices",
            json!({"name": "core", "payload": {"devices": [1, 2]}}),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn bgp_session_edit_posts_to_the_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/bgp/42")
        .match_body(Matcher::Json(json!({"bgp_descr": "transit"})))
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    route_tool_call(
        request(
            "bgp_session_edit",
            json!({"bgp_id": 42, "payload": {"bgp_descr": "transit"}}),
        ),
        &handlers,
    )
    .await
    .expect("call should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn alert_rule_edit_requires_rule_id_in_payload() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);

    let err = route_tool_call(
        request("alert_rule_edit", json!({"payload": {"name": "High CPU"}})),
        &handlers,
    )
    .await
    .expect_err("should be rejected");
    assert!(err.message.contains("rule_id"));
}

#[tokio::test]
async fn api_errors_come_back_as_error_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v0/devices/missing")
        .with_status(404)
        .with_body(r#"{"status": "error", "message": "Device not found"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    let result = route_tool_call(request("device_get", json!({"hostname": "missing"})), &handlers)
        .await
        .expect("API failures must not fail the protocol call");
    assert_eq!(result.is_error, Some(true));

    let text = content_text(&result);
    assert!(text.contains("404"));
    assert!(text.contains("Device not found"));
}

#[tokio::test]
async fn server_side_failures_keep_the_call_readable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v0/system")
        .with_status(500)
        .with_body(r#"{"status": "error", "message": "boom"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    let result = route_tool_call(request("system_info", json!({})), &handlers)
        .await
        .expect("API failures must not fail the protocol call");
    assert_eq!(result.is_error, Some(true));
    assert!(content_text(&result).contains("500"));
}

#[tokio::test]
async fn responses_are_rendered_as_json_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v0/system")
        .with_body(r#"{"system": [{"local_ver": "24.1.0"}], "status": "ok"}"#)
        .create_async()
        .await;
    let handlers = handlers_for(&server);

    let result = route_tool_call(request("system_info", json!({})), &handlers)
        .await
        .expect("call should succeed");

    assert_ne!(result.is_error, Some(true));
    assert!(content_text(&result).contains("24.1.0"));
}
