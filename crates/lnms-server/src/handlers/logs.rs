//! Log retrieval and syslog ingestion tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use crate::args::{AuthLogArgs, DeviceLogArgs, SyslogSinkArgs};
use crate::formatter::ResponseFormatter;

/// Handler for the logs API
#[derive(Clone)]
pub struct LogsHandler {
    client: Arc<LibreNmsClient>,
}

impl LogsHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn logs_eventlog(
        &self,
        Parameters(args): Parameters<DeviceLogArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.device_logs("eventlog", args).await
    }

    pub async fn logs_syslog(
        &self,
        Parameters(args): Parameters<DeviceLogArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.device_logs("syslog", args).await
    }

    pub async fn logs_alertlog(
        &self,
        Parameters(args): Parameters<DeviceLogArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.device_logs("alertlog", args).await
    }

    pub async fn logs_authlog(
        &self,
        Parameters(args): Parameters<AuthLogArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = log_query(args.start, args.limit, args.from_ts, args.to_ts, args.sortorder);
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get("logs/authlog", query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn logs_syslogsink(
        &self,
        Parameters(args): Parameters<SyslogSinkArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("syslogsink", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    async fn device_logs(
        &self,
        kind: &str,
        args: DeviceLogArgs,
    ) -> Result<CallToolResult, McpError> {
        let query = log_query(args.start, args.limit, args.from_ts, args.to_ts, args.sortorder);
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("logs/{kind}/{}", args.hostname), query)
            .await;
        ResponseFormatter::api_response(response)
    }
}

/// Shared pagination and time-window parameters
///
/// The API spells the time bounds `from` and `to`, which clash with
/// keywords in too many client languages, so the tools take `from_ts`
/// and `to_ts` and translate here.
fn log_query(
    start: Option<u64>,
    limit: Option<u64>,
    from_ts: Option<String>,
    to_ts: Option<String>,
    sortorder: Option<String>,
) -> Query {
    let mut query = Query::new();
    if let Some(start) = start {
        query.insert("start".into(), start.into());
    }
    if let Some(limit) = limit {
        query.insert("limit".into(), limit.into());
    }
    if let Some(from_ts) = from_ts {
        query.insert("from".into(), from_ts.into());
    }
    if let Some(to_ts) = to_ts {
        query.insert("to".into(), to_ts.into());
    }
    if let Some(sortorder) = sortorder {
        query.insert("sortorder".into(), sortorder.into());
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_query_maps_timestamp_keys() {
        let query = log_query(
            Some(0),
            Some(50),
            Some("1700000000".into()),
            Some("1700003600".into()),
            Some("DESC".into()),
        );
        assert_eq!(query.get("from").and_then(|v| v.as_str()), Some("1700000000"));
        assert_eq!(query.get("to").and_then(|v| v.as_str()), Some("1700003600"));
        assert!(!query.contains_key("from_ts"));
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn log_query_skips_absent_filters() {
        let query = log_query(None, None, None, None, None);
        assert!(query.is_empty());
    }
}
