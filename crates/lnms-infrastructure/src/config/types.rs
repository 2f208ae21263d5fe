//! Configuration data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Transport the MCP server listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// MCP over stdin/stdout (default)
    #[default]
    Stdio,
    /// JSON-RPC over HTTP with SSE notifications
    Http,
    /// Both stdio and HTTP, running concurrently
    Hybrid,
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!(
                "Invalid transport mode: {other}. Use stdio, http, or hybrid"
            )),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Http => write!(f, "http"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Connection settings for the LibreNMS API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreNmsConfig {
    /// LibreNMS base URL, e.g. `https://nms.example.com`
    pub base_url: String,
    /// LibreNMS API token (sent as `X-Auth-Token`)
    pub token: String,
    /// Verify TLS certificates when talking to the API
    pub verify_ssl: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LibreNmsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            verify_ssl: true,
            timeout_secs: 30,
        }
    }
}

/// MCP server transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport mode (stdio, http, hybrid)
    pub transport_mode: TransportMode,
    /// Host to bind the HTTP transport to
    pub host: String,
    /// Port for the HTTP transport
    pub port: u16,
    /// Add CORS headers for browser clients
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::Stdio,
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Access policy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Refuse every tool that is not tagged read-only
    pub read_only: bool,
    /// Tools carrying any of these tags are removed from the catalog
    #[serde(default)]
    pub disabled_tags: Vec<String>,
}

/// Sliding-window rate limiting for tool calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable the limiter
    pub enabled: bool,
    /// Maximum tool calls per window
    pub max_requests: usize,
    /// Window length in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_requests: 60,
            window_secs: 60,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Optional Sentry error tracking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Sentry DSN; telemetry is disabled when unset or empty
    pub dsn: Option<String>,
    /// Fraction of transactions sampled for performance monitoring
    #[serde(default)]
    pub traces_sample_rate: f32,
    /// Environment name reported with events
    pub environment: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// LibreNMS API connection
    #[serde(default)]
    pub librenms: LibreNmsConfig,
    /// Server transport settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Access policy
    #[serde(default)]
    pub access: AccessConfig,
    /// Rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Error tracking
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Check that the LibreNMS credentials required at runtime are present
    ///
    /// Deferred from load time so that listing-only invocations (e.g.
    /// `--help`) and tests do not need credentials.
    pub fn require_credentials(&self) -> lnms_domain::Result<()> {
        if self.librenms.base_url.trim().is_empty() {
            return Err(lnms_domain::Error::configuration(
                "Missing LibreNMS base URL (set librenms.base_url or LIBRENMS_URL)",
            ));
        }
        if self.librenms.token.trim().is_empty() {
            return Err(lnms_domain::Error::configuration(
                "Missing LibreNMS API token (set librenms.token or LIBRENMS_TOKEN)",
            ));
        }
        Ok(())
    }
}
