//! Tool metadata value objects
//!
//! Every tool exposed over MCP carries a set of tags and a set of
//! behavior hints. Tags drive the access policy (read-only mode,
//! disable-by-tag); hints are surfaced to MCP clients as tool
//! annotations.

/// Tag applied to every tool in the catalog
pub const TAG_LIBRENMS: &str = "librenms";
/// Tag for tools that never mutate LibreNMS state
pub const TAG_READ_ONLY: &str = "read-only";
/// Tag for tools that require administrative access
pub const TAG_ADMIN: &str = "admin";
/// Tag for read-only tools whose scope is the whole installation
pub const TAG_GLOBAL_READ: &str = "global-read";

/// MCP behavior hints for a tool
///
/// Mirrors the `readOnlyHint` / `destructiveHint` / `idempotentHint`
/// annotations of the MCP tool model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolHints {
    /// Tool does not mutate LibreNMS state
    pub read_only: bool,
    /// Tool may destroy or overwrite existing state
    pub destructive: bool,
    /// Repeating the call with the same arguments has no further effect
    pub idempotent: bool,
}

impl ToolHints {
    /// Hints for a plain read operation
    pub const fn read() -> Self {
        Self {
            read_only: true,
            destructive: false,
            idempotent: true,
        }
    }

    /// Hints for a non-idempotent create operation
    pub const fn create() -> Self {
        Self {
            read_only: false,
            destructive: true,
            idempotent: false,
        }
    }

    /// Hints for an idempotent update or delete operation
    pub const fn update() -> Self {
        Self {
            read_only: false,
            destructive: true,
            idempotent: true,
        }
    }

    /// Hints for a non-destructive write (e.g. acknowledge, maintenance)
    pub const fn write() -> Self {
        Self {
            read_only: false,
            destructive: false,
            idempotent: true,
        }
    }

    /// Hints for a non-destructive, non-idempotent action (e.g. trigger)
    pub const fn action() -> Self {
        Self {
            read_only: false,
            destructive: false,
            idempotent: false,
        }
    }
}

/// Static metadata describing one tool in the catalog
#[derive(Debug, Clone, Copy)]
pub struct ToolMeta {
    /// Tool name as exposed over MCP
    pub name: &'static str,
    /// Human-readable description surfaced to clients
    pub description: &'static str,
    /// Tags used by the access policy
    pub tags: &'static [&'static str],
    /// MCP behavior hints
    pub hints: ToolHints,
}

impl ToolMeta {
    /// Whether the tool carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether the tool is safe to expose in read-only mode
    pub fn is_read_only(&self) -> bool {
        self.has_tag(TAG_READ_ONLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: ToolMeta = ToolMeta {
        name: "devices_list",
        description: "List devices",
        tags: &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
        hints: ToolHints::read(),
    };

    #[test]
    fn tag_lookup() {
        assert!(META.has_tag("devices"));
        assert!(!META.has_tag(TAG_ADMIN));
        assert!(META.is_read_only());
    }

    #[test]
    fn hint_presets() {
        assert!(ToolHints::read().read_only);
        assert!(!ToolHints::create().idempotent);
        assert!(ToolHints::update().destructive);
        assert!(!ToolHints::write().destructive);
    }
}
