//! Bandwidth billing tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use super::check_args;
use crate::args::{
    BillGetArgs, BillGraphArgs, BillHistoryGraphArgs, BillIdArgs, BillPayloadArgs, BillsListArgs,
};
use crate::formatter::ResponseFormatter;

/// Handler for the billing API
#[derive(Clone)]
pub struct BillsHandler {
    client: Arc<LibreNmsClient>,
}

impl BillsHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn bills_list(
        &self,
        Parameters(args): Parameters<BillsListArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if let Some(period) = args.period {
            query.insert("period".into(), period.into());
        }
        if let Some(bill_ref) = args.bill_ref {
            query.insert("ref".into(), bill_ref.into());
        }
        if let Some(custid) = args.custid {
            query.insert("custid".into(), custid.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get("bills", query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_get(
        &self,
        Parameters(args): Parameters<BillGetArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let mut query = Query::new();
        if let Some(period) = args.period {
            query.insert("period".into(), period.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("bills/{}", args.bill_id), query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_graph(
        &self,
        Parameters(args): Parameters<BillGraphArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(
                &format!("bills/{}/graphs/{}", args.bill_id, args.graph_type),
                None,
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_graph_data(
        &self,
        Parameters(args): Parameters<BillGraphArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(
                &format!("bills/{}/graphdata/{}", args.bill_id, args.graph_type),
                None,
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_history(
        &self,
        Parameters(args): Parameters<BillIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("bills/{}/history", args.bill_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_history_graph(
        &self,
        Parameters(args): Parameters<BillHistoryGraphArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(
                &format!(
                    "bills/{}/history/{}/graphs/{}",
                    args.bill_id, args.history_id, args.graph_type
                ),
                None,
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_history_graph_data(
        &self,
        Parameters(args): Parameters<BillHistoryGraphArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(
                &format!(
                    "bills/{}/history/{}/graphdata/{}",
                    args.bill_id, args.history_id, args.graph_type
                ),
                None,
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_create_or_update(
        &self,
        Parameters(args): Parameters<BillPayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("bills", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bill_delete(
        &self,
        Parameters(args): Parameters<BillIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .delete(&format!("bills/{}", args.bill_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
