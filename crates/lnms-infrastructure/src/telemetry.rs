//! Optional Sentry error tracking
//!
//! Telemetry is off unless a DSN is configured. Events captured by the
//! `sentry_tracing` layer are only delivered while the returned guard
//! is alive, so the caller must hold it for the lifetime of the
//! process.

use crate::config::TelemetryConfig;
use tracing::info;

/// Keeps the Sentry client alive; dropping it flushes pending events
pub struct TelemetryGuard {
    _guard: Option<sentry::ClientInitGuard>,
}

impl TelemetryGuard {
    /// Whether a Sentry client was actually initialized
    pub fn is_enabled(&self) -> bool {
        self._guard.is_some()
    }
}

/// Initialize Sentry if a DSN is configured
pub fn init_telemetry(config: &TelemetryConfig) -> TelemetryGuard {
    let dsn = match config.dsn.as_deref() {
        Some(dsn) if !dsn.trim().is_empty() => dsn.to_string(),
        _ => return TelemetryGuard { _guard: None },
    };

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: config.traces_sample_rate,
            environment: config
                .environment
                .clone()
                .map(std::borrow::Cow::Owned),
            ..Default::default()
        },
    ));

    info!("Sentry error tracking enabled");
    TelemetryGuard {
        _guard: Some(guard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_dsn() {
        let guard = init_telemetry(&TelemetryConfig::default());
        assert!(!guard.is_enabled());
    }

    #[test]
    fn disabled_with_blank_dsn() {
        let config = TelemetryConfig {
            dsn: Some("   ".to_string()),
            ..Default::default()
        };
        let guard = init_telemetry(&config);
        assert!(!guard.is_enabled());
    }
}
