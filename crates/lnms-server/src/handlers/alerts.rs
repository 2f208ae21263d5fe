//! Alert, alert rule, and alert template tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use super::check_args;
use crate::args::{
    AlertAcknowledgeArgs, AlertIdArgs, AlertsListArgs, NoArgs, RuleIdArgs, RulePayloadArgs,
    TemplateIdArgs, TemplatePayloadArgs,
};
use crate::formatter::ResponseFormatter;

/// Handler for the alerting API
#[derive(Clone)]
pub struct AlertsHandler {
    client: Arc<LibreNmsClient>,
}

impl AlertsHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn alerts_get(
        &self,
        Parameters(args): Parameters<AlertsListArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if let Some(state) = args.state {
            query.insert("state".into(), state.into());
        }
        if let Some(severity) = args.severity {
            query.insert("severity".into(), severity.into());
        }
        if let Some(alert_rule) = args.alert_rule {
            query.insert("alert_rule".into(), alert_rule.into());
        }
        if let Some(order) = args.order {
            query.insert("order".into(), order.into());
        }
        let response = self
            .client
            .get("alerts", Some(&query))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_get_by_id(
        &self,
        Parameters(args): Parameters<AlertIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("alerts/{}", args.alert_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_acknowledge(
        &self,
        Parameters(args): Parameters<AlertAcknowledgeArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let mut body = serde_json::Map::new();
        if let Some(note) = args.note {
            body.insert("note".into(), note.into());
        }
        if let Some(until_clear) = args.until_clear {
            body.insert("until_clear".into(), until_clear.into());
        }
        let body = (!body.is_empty()).then(|| serde_json::Value::Object(body));
        let response = self
            .client
            .put(&format!("alerts/{}", args.alert_id), body.as_ref())
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_unmute(
        &self,
        Parameters(args): Parameters<AlertIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .put(&format!("alerts/unmute/{}", args.alert_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_rules_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("rules", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_rule_get(
        &self,
        Parameters(args): Parameters<RuleIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("rules/{}", args.rule_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_rule_add(
        &self,
        Parameters(args): Parameters<RulePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("rules", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    /// Edits go to the collection path with `rule_id` in the payload
    pub async fn alert_rule_edit(
        &self,
        Parameters(args): Parameters<RulePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        if args.payload.get("rule_id").is_none() {
            return Err(McpError::invalid_params(
                "Alert rule edits require rule_id in the payload",
                None,
            ));
        }
        let response = self
            .client
            .put("rules", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_rule_delete(
        &self,
        Parameters(args): Parameters<RuleIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .delete(&format!("rules/{}", args.rule_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_templates_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("templates", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_template_get(
        &self,
        Parameters(args): Parameters<TemplateIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("templates/{}", args.template_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_template_create(
        &self,
        Parameters(args): Parameters<TemplatePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("templates", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_template_edit(
        &self,
        Parameters(args): Parameters<TemplatePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        if args.payload.get("id").is_none() {
            return Err(McpError::invalid_params(
                "Alert template edits require id in the payload",
                None,
            ));
        }
        let response = self
            .client
            .put("templates", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn alert_template_delete(
        &self,
        Parameters(args): Parameters<TemplateIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .delete(&format!("templates/{}", args.template_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
