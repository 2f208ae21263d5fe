//! Tool routing tests
//!
//! The routed handlers talk to a mockito server with no mocks
//! registered, so every dispatched call fails at the HTTP layer. That
//! is enough to prove the router reached a handler instead of falling
//! through to the unknown-tool arm.

use std::sync::Arc;

use lnms_infrastructure::LibreNmsClient;
use lnms_infrastructure::config::LibreNmsConfig;
use lnms_server::handlers::ToolHandlers;
use lnms_server::tools::{catalog, route_tool_call};
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

/// A superset of every required argument in the catalog, so each tool
/// can at least be dispatched.
fn universal_arguments() -> serde_json::Value {
    json!({
        "hostname": "router-01",
        "new_hostname": "router-02",
        "ifname": "eth0",
        "name": "core",
        "location": "dc1",
        "type": "temperature",
        "sensor_id": 1,
        "alert_id": 1,
        "rule_id": 1,
        "template_id": 1,
        "bill_id": 1,
        "history_id": 1,
        "graph_type": "bits",
        "bgp_id": 1,
        "mac": "aabbccddeeff",
        "poller_group": "all",
        "search": "uplink",
        "field": "ifName",
        "port_id": 1,
        "port_group_id": 1,
        "service_id": 1,
        "payload": {"key": "value"}
    })
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);

    let err = route_tool_call(request("no_such_tool", json!({})), &handlers)
        .await
        .expect_err("should be rejected");
    assert!(err.message.contains("Unknown tool"));
}

#[tokio::test]
async fn missing_required_arguments_are_invalid() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);

    let err = route_tool_call(request("alert_get_by_id", json!({})), &handlers)
        .await
        .expect_err("should be rejected");
    assert!(err.message.contains("Invalid arguments"));
}

#[tokio::test]
async fn out_of_range_ids_are_invalid() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);

    let err = route_tool_call(request("alert_get_by_id", json!({"alert_id": 0})), &handlers)
        .await
        .expect_err("should be rejected");
    assert!(err.message.contains("alert_id"));
}

#[tokio::test]
async fn every_catalog_tool_routes_to_a_handler() {
    let server = mockito::Server::new_async().await;
    let handlers = handlers_for(&server);
    let arguments = universal_arguments();

    for spec in catalog() {
        let call = CallToolRequestParam {
            name: spec.meta.name.into(),
            arguments: arguments.as_object().cloned(),
            task: None,
            meta: None,
        };
        // reaching the handler means an error-flagged result from the
        // HTTP layer or an argument refusal, never the unknown-tool arm
        match route_tool_call(call, &handlers).await {
            Ok(result) => assert_eq!(
                result.is_error,
                Some(true),
                "{} should have failed at the HTTP layer",
                spec.meta.name
            ),
            Err(err) => assert!(
                !err.message.contains("Unknown tool"),
                "{} did not route",
                spec.meta.name
            ),
        }
    }
}
