//! Access policy and rate limit gating at the server level

use std::sync::Arc;
use std::time::Duration;

use lnms_infrastructure::config::LibreNmsConfig;
use lnms_infrastructure::{LibreNmsClient, SlidingWindowRateLimiter};
use lnms_server::{AccessPolicy, McpServer, McpServerBuilder};

fn server_with(policy: AccessPolicy, limiter: Option<SlidingWindowRateLimiter>) -> McpServer {
    let config = LibreNmsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        token: "test-token".to_string(),
        verify_ssl: true,
        timeout_secs: 5,
    };
    let client = Arc::new(LibreNmsClient::new(&config).expect("client should build"));

    let mut builder = McpServerBuilder::new().with_client(client).with_policy(policy);
    if let Some(limiter) = limiter {
        builder = builder.with_rate_limiter(Arc::new(limiter));
    }
    builder.build().expect("server should build")
}

#[test]
fn default_policy_permits_write_tools() {
    let server = server_with(AccessPolicy::default(), None);
    assert!(server.check_call("device_delete").is_ok());
}

#[test]
fn read_only_mode_refuses_write_tools() {
    let server = server_with(AccessPolicy::new(true, vec![]), None);
    assert!(server.check_call("devices_list").is_ok());

    let err = server
        .check_call("device_delete")
        .expect_err("write tool should be refused");
    assert!(err.message.contains("read-only"));
}

#[test]
fn disabled_tag_makes_tools_unknown() {
    let server = server_with(AccessPolicy::new(false, vec!["bills".to_string()]), None);
    let err = server
        .check_call("bill_get")
        .expect_err("disabled tool should be refused");
    assert!(err.message.contains("Unknown tool"));
    // other families stay callable
    assert!(server.check_call("devices_list").is_ok());
}

#[test]
fn unknown_tools_are_refused_before_routing() {
    let server = server_with(AccessPolicy::default(), None);
    let err = server
        .check_call("no_such_tool")
        .expect_err("unknown tool should be refused");
    assert!(err.message.contains("Unknown tool"));
}

#[test]
fn rate_limit_applies_after_policy() {
    let limiter = SlidingWindowRateLimiter::new(2, Duration::from_secs(60));
    let server = server_with(AccessPolicy::default(), Some(limiter));

    assert!(server.check_call("devices_list").is_ok());
    assert!(server.check_call("system_info").is_ok());

    let err = server
        .check_call("ping")
        .expect_err("third call should be limited");
    assert!(err.message.contains("Rate limit"));
    // throttling carries its own code so clients can tell it from a
    // server fault
    assert_eq!(err.code.0, lnms_server::constants::JSONRPC_RATE_LIMITED);
}

#[test]
fn policy_refusal_does_not_consume_rate_limit_slots() {
    let limiter = SlidingWindowRateLimiter::new(1, Duration::from_secs(60));
    let server = server_with(AccessPolicy::new(true, vec![]), Some(limiter));

    // refused by policy, should not count against the window
    assert!(server.check_call("device_delete").is_err());
    assert!(server.check_call("devices_list").is_ok());
}
