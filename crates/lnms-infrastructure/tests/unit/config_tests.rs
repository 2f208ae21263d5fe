//! Configuration loading tests
//!
//! Uses `figment::Jail` so file and environment mutations are scoped
//! to each test.

use figment::Jail;
use lnms_infrastructure::config::{AppConfig, ConfigLoader, TransportMode};

#[test]
fn defaults_are_sensible() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("defaults should load");
        assert_eq!(config.server.transport_mode, TransportMode::Stdio);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.librenms.verify_ssl);
        assert_eq!(config.librenms.timeout_secs, 30);
        assert!(!config.access.read_only);
        assert!(config.access.disabled_tags.is_empty());
        assert!(!config.rate_limit.enabled);
        assert_eq!(config.logging.level, "info");
        assert!(config.telemetry.dsn.is_none());
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "librenms-mcp.toml",
            r#"
            [librenms]
            base_url = "https://nms.example.com"
            token = "abc123"
            verify_ssl = false

            [server]
            transport_mode = "http"
            port = 9090

            [access]
            read_only = true
            disabled_tags = ["admin"]
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("librenms-mcp.toml")
            .load()
            .expect("config should load");

        assert_eq!(config.librenms.base_url, "https://nms.example.com");
        assert_eq!(config.librenms.token, "abc123");
        assert!(!config.librenms.verify_ssl);
        assert_eq!(config.server.transport_mode, TransportMode::Http);
        assert_eq!(config.server.port, 9090);
        assert!(config.access.read_only);
        assert_eq!(config.access.disabled_tags, vec!["admin".to_string()]);
        Ok(())
    });
}

#[test]
fn env_vars_override_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "librenms-mcp.toml",
            r#"
            [server]
            port = 9090
            "#,
        )?;
        jail.set_env("LIBRENMS_MCP_SERVER__PORT", "7070");
        jail.set_env("LIBRENMS_MCP_LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new()
            .with_config_path("librenms-mcp.toml")
            .load()
            .expect("config should load");

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn legacy_env_vars_fill_missing_credentials() {
    Jail::expect_with(|jail| {
        jail.set_env("LIBRENMS_URL", "https://legacy.example.com");
        jail.set_env("LIBRENMS_TOKEN", "legacy-token");

        let config = ConfigLoader::new().load().expect("config should load");
        assert_eq!(config.librenms.base_url, "https://legacy.example.com");
        assert_eq!(config.librenms.token, "legacy-token");
        Ok(())
    });
}

#[test]
fn prefixed_env_wins_over_legacy() {
    Jail::expect_with(|jail| {
        jail.set_env("LIBRENMS_URL", "https://legacy.example.com");
        jail.set_env("LIBRENMS_MCP_LIBRENMS__BASE_URL", "https://new.example.com");

        let config = ConfigLoader::new().load().expect("config should load");
        assert_eq!(config.librenms.base_url, "https://new.example.com");
        Ok(())
    });
}

#[test]
fn zero_port_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LIBRENMS_MCP_SERVER__PORT", "0");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn enabled_rate_limit_requires_nonzero_window() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "librenms-mcp.toml",
            r#"
            [rate_limit]
            enabled = true
            max_requests = 10
            window_secs = 0
            "#,
        )?;
        let result = ConfigLoader::new()
            .with_config_path("librenms-mcp.toml")
            .load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LIBRENMS_MCP_LOGGING__LEVEL", "verbose");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .expect("missing file should not be fatal");
        assert_eq!(config.server.port, 8080);
        Ok(())
    });
}

#[test]
fn require_credentials_rejects_blank_fields() {
    let mut config = AppConfig::default();
    assert!(config.require_credentials().is_err());

    config.librenms.base_url = "https://nms.example.com".to_string();
    assert!(config.require_credentials().is_err());

    config.librenms.token = "abc".to_string();
    assert!(config.require_credentials().is_ok());
}

#[test]
fn transport_mode_parses_case_insensitively() {
    assert_eq!("STDIO".parse::<TransportMode>(), Ok(TransportMode::Stdio));
    assert_eq!("Http".parse::<TransportMode>(), Ok(TransportMode::Http));
    assert_eq!("hybrid".parse::<TransportMode>(), Ok(TransportMode::Hybrid));
    assert!("websocket".parse::<TransportMode>().is_err());
}
