//! Transport layer types
//!
//! JSON-RPC message types shared by transport implementations.

use serde::{Deserialize, Serialize};

/// MCP request payload (JSON-RPC format)
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC method
    pub method: String,
    /// Request parameters
    pub params: Option<serde_json::Value>,
    /// Request ID
    pub id: Option<serde_json::Value>,
}

/// MCP response payload (JSON-RPC format)
#[derive(Debug, Serialize)]
pub struct McpResponse {
    /// JSON-RPC version
    pub jsonrpc: &'static str,
    /// Response result (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Request ID
    pub id: Option<serde_json::Value>,
}

/// MCP error response (JSON-RPC format)
#[derive(Debug, Serialize)]
pub struct McpError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl McpResponse {
    /// Create a success response
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
            }),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_response_omits_error_field() {
        let response = McpResponse::success(Some(json!(1)), json!({"ok": true}));
        let rendered = serde_json::to_value(&response).unwrap();
        assert_eq!(rendered["jsonrpc"], "2.0");
        assert!(rendered.get("error").is_none());
        assert_eq!(rendered["result"]["ok"], true);
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let response = McpResponse::error(Some(json!("abc")), -32601, "Unknown method");
        let rendered = serde_json::to_value(&response).unwrap();
        assert!(rendered.get("result").is_none());
        assert_eq!(rendered["error"]["code"], -32601);
        assert_eq!(rendered["error"]["message"], "Unknown method");
        assert_eq!(rendered["id"], "abc");
    }

    #[test]
    fn request_parses_without_params_or_id() {
        let request: McpRequest = serde_json::from_value(json!({"method": "ping"})).unwrap();
        assert_eq!(request.method, "ping");
        assert!(request.params.is_none());
        assert!(request.id.is_none());
    }
}
