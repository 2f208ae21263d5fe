//! Server builder tests

use std::sync::Arc;

use lnms_infrastructure::LibreNmsClient;
use lnms_infrastructure::config::LibreNmsConfig;
use lnms_server::builder::BuilderError;
use lnms_server::{AccessPolicy, McpServerBuilder};

fn test_client() -> Arc<LibreNmsClient> {
    let config = LibreNmsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        token: "test-token".to_string(),
        verify_ssl: true,
        timeout_secs: 5,
    };
    Arc::new(LibreNmsClient::new(&config).expect("client should build"))
}

#[test]
fn build_fails_without_a_client() {
    let result = McpServerBuilder::new().build();
    assert!(matches!(result, Err(BuilderError::MissingDependency(_))));
}

#[test]
fn build_succeeds_with_just_a_client() {
    let server = McpServerBuilder::new()
        .with_client(test_client())
        .build()
        .expect("server should build");
    assert!(!server.policy().read_only());
}

#[test]
fn policy_is_carried_into_the_server() {
    let server = McpServerBuilder::new()
        .with_client(test_client())
        .with_policy(AccessPolicy::new(true, vec![]))
        .build()
        .expect("server should build");
    assert!(server.policy().read_only());
}
