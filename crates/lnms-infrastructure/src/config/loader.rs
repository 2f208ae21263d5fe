//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment
//! variables, and default values, using Figment for merging.

use crate::config::AppConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lnms_domain::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "LIBRENMS_MCP_";
/// Default configuration file name searched in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "librenms-mcp.toml";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if present)
    /// 3. Environment variables with prefix, nested keys split on `__`
    ///    (e.g. `LIBRENMS_MCP_SERVER__PORT=9000`)
    /// 4. The original client's bare `LIBRENMS_URL` / `LIBRENMS_TOKEN`
    ///    variables, as a compatibility fallback when the fields are
    ///    still unset after the merge
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                info!("Configuration loaded from {}", default_path.display());
            }
        }

        figment = figment.merge(Env::prefixed(&self.env_prefix).split("__"));

        let mut app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to extract configuration", e))?;

        apply_legacy_env(&mut app_config);
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fall back to the bare environment variables the original server used
fn apply_legacy_env(config: &mut AppConfig) {
    if config.librenms.base_url.is_empty() {
        if let Ok(url) = env::var("LIBRENMS_URL") {
            config.librenms.base_url = url;
        }
    }
    if config.librenms.token.is_empty() {
        if let Ok(token) = env::var("LIBRENMS_TOKEN") {
            config.librenms.token = token;
        }
    }
}

/// Validate application configuration
///
/// Credentials are checked separately at server startup via
/// [`AppConfig::require_credentials`].
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_rate_limit_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_rate_limit_config(config: &AppConfig) -> Result<()> {
    if config.rate_limit.enabled {
        if config.rate_limit.max_requests == 0 {
            return Err(Error::configuration(
                "Rate limit max_requests cannot be 0 when rate limiting is enabled",
            ));
        }
        if config.rate_limit.window_secs == 0 {
            return Err(Error::configuration(
                "Rate limit window cannot be 0 when rate limiting is enabled",
            ));
        }
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    crate::logging::parse_log_level(&config.logging.level).map(|_| ())
}
