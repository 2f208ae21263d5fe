//! MCP server builder
//!
//! Makes server construction explicit: the API client is required, the
//! access policy defaults to allow-all, and the rate limiter is
//! optional.

use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, SlidingWindowRateLimiter};

use crate::McpServer;
use crate::access::AccessPolicy;
use crate::handlers::ToolHandlers;

/// Builder for [`McpServer`]
#[derive(Default)]
pub struct McpServerBuilder {
    client: Option<Arc<LibreNmsClient>>,
    policy: AccessPolicy,
    rate_limiter: Option<Arc<SlidingWindowRateLimiter>>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the LibreNMS API client
    pub fn with_client(mut self, client: Arc<LibreNmsClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the access policy
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the rate limiter
    pub fn with_rate_limiter(mut self, limiter: Arc<SlidingWindowRateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the API client was
    /// not provided.
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let client = self
            .client
            .ok_or(BuilderError::MissingDependency("LibreNMS API client"))?;

        Ok(McpServer::new(
            ToolHandlers::new(client),
            self.policy,
            self.rate_limiter,
        ))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
