//! Response formatting for MCP tool results
//!
//! Tool handlers return the raw JSON the LibreNMS API produced. This
//! module renders it into MCP text content. API and transport failures
//! become error-flagged tool results carrying the failure text, so
//! clients can read them; protocol errors are reserved for requests
//! the server refuses to dispatch.

use lnms_domain::Error;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};

/// Response formatter for MCP server tools
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Wrap an API response as pretty-printed JSON text content
    pub fn json_response(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(format!("Failed to render response: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Render the outcome of a LibreNMS API call as a tool result
    ///
    /// Failures on the LibreNMS side do not fail the protocol call;
    /// they come back as an `is_error` result with the error string as
    /// text content.
    pub fn api_response(
        result: Result<serde_json::Value, Error>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(value) => Self::json_response(&value),
            Err(Error::InvalidArgument { message }) => Err(McpError::invalid_params(message, None)),
            Err(error) => Ok(CallToolResult::error(vec![Content::text(Self::error_text(
                &error,
            ))])),
        }
    }

    fn error_text(error: &Error) -> String {
        match error {
            Error::Api { status, body } => {
                format!("LibreNMS API returned status {status}: {body}")
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_response_pretty_prints() {
        let result =
            ResponseFormatter::json_response(&json!({"status": "ok"})).expect("should format");
        assert_eq!(result.is_error, None);
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn invalid_argument_becomes_a_protocol_error() {
        let err = ResponseFormatter::api_response(Err(Error::invalid_argument("bad hostname")))
            .expect_err("should be a protocol error");
        assert_eq!(err.code, McpError::invalid_params("x", None).code);
    }

    #[test]
    fn api_failure_becomes_an_error_result() {
        let result = ResponseFormatter::api_response(Err(Error::api(404, "not found")))
            .expect("should stay a tool result");
        assert_eq!(result.is_error, Some(true));
        let content = serde_json::to_value(&result.content[0]).expect("content serializes");
        let text = content["text"].as_str().expect("text content");
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }
}
