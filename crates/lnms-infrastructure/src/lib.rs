//! # LibreNMS MCP Infrastructure Layer
//!
//! Cross-cutting concerns for the LibreNMS MCP server:
//!
//! - [`config`]: typed configuration with TOML/environment loading
//! - [`logging`]: structured logging via the tracing ecosystem
//! - [`telemetry`]: optional Sentry error tracking
//! - [`client`]: async HTTP client for the LibreNMS REST API
//! - [`rate_limit`]: sliding-window rate limiter for tool calls

pub mod client;
pub mod config;
pub mod logging;
pub mod rate_limit;
pub mod telemetry;

pub use client::{LibreNmsClient, Query, encode_segment};
pub use config::{AppConfig, ConfigLoader, TransportMode};
pub use logging::init_logging;
pub use rate_limit::SlidingWindowRateLimiter;
pub use telemetry::{TelemetryGuard, init_telemetry};
