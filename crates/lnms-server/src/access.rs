//! Tool access policy
//!
//! Applies the configured read-only mode and disabled tags to the tool
//! catalog. Tools removed by a disabled tag are hidden from `tools/list`
//! and refused on `tools/call`; read-only mode hides write tools from
//! the listing and refuses calling them by name.

use lnms_domain::ToolMeta;
use lnms_infrastructure::config::AccessConfig;
use rmcp::ErrorData as McpError;

/// Access policy derived from configuration
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    read_only: bool,
    disabled_tags: Vec<String>,
}

impl AccessPolicy {
    /// Build a policy from the access configuration
    pub fn from_config(config: &AccessConfig) -> Self {
        Self {
            read_only: config.read_only,
            disabled_tags: config.disabled_tags.clone(),
        }
    }

    /// Create a policy directly, mainly for tests
    pub fn new(read_only: bool, disabled_tags: Vec<String>) -> Self {
        Self {
            read_only,
            disabled_tags,
        }
    }

    /// Whether read-only mode is active
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the tool appears in the catalog at all
    pub fn is_listed(&self, meta: &ToolMeta) -> bool {
        if self.read_only && !meta.is_read_only() {
            return false;
        }
        !self.is_disabled(meta)
    }

    fn is_disabled(&self, meta: &ToolMeta) -> bool {
        self.disabled_tags.iter().any(|tag| meta.has_tag(tag))
    }

    /// Check whether a call to the tool is permitted
    ///
    /// A tool removed by a disabled tag reports as unknown so clients
    /// cannot probe for its existence. Write tools called by name in
    /// read-only mode get an explicit refusal instead.
    pub fn check_call(&self, meta: &ToolMeta) -> Result<(), McpError> {
        if self.is_disabled(meta) {
            return Err(McpError::invalid_params(
                format!("Unknown tool: {}", meta.name),
                None,
            ));
        }
        if self.read_only && !meta.is_read_only() {
            return Err(McpError::invalid_params(
                format!("Tool {} is not available in read-only mode", meta.name),
                None,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnms_domain::{TAG_ADMIN, TAG_LIBRENMS, TAG_READ_ONLY, ToolHints};

    const READ_TOOL: ToolMeta = ToolMeta {
        name: "devices_list",
        description: "List devices",
        tags: &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
        hints: ToolHints::read(),
    };

    const WRITE_TOOL: ToolMeta = ToolMeta {
        name: "device_delete",
        description: "Delete a device",
        tags: &[TAG_LIBRENMS, "devices", TAG_ADMIN],
        hints: ToolHints::update(),
    };

    #[test]
    fn default_policy_allows_everything() {
        let policy = AccessPolicy::default();
        assert!(policy.is_listed(&READ_TOOL));
        assert!(policy.is_listed(&WRITE_TOOL));
        assert!(policy.check_call(&WRITE_TOOL).is_ok());
    }

    #[test]
    fn read_only_mode_hides_and_blocks_write_tools() {
        let policy = AccessPolicy::new(true, vec![]);
        assert!(policy.check_call(&READ_TOOL).is_ok());
        assert!(policy.is_listed(&READ_TOOL));
        assert!(!policy.is_listed(&WRITE_TOOL));

        let err = policy
            .check_call(&WRITE_TOOL)
            .expect_err("write tool should be refused");
        assert!(err.message.contains("read-only"));
    }

    #[test]
    fn disabled_tag_hides_and_blocks() {
        let policy = AccessPolicy::new(false, vec!["admin".to_string()]);
        assert!(!policy.is_listed(&WRITE_TOOL));
        assert!(policy.check_call(&WRITE_TOOL).is_err());
        assert!(policy.is_listed(&READ_TOOL));
    }

    #[test]
    fn blocked_tool_reports_as_unknown() {
        let policy = AccessPolicy::new(false, vec!["devices".to_string()]);
        let err = policy.check_call(&READ_TOOL).expect_err("should be blocked");
        assert!(err.message.contains("Unknown tool"));
    }
}
