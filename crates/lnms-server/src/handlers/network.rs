//! Network resource tools: ARP, BGP, OSPF, VRF, VLANs, links, FDB

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use super::check_args;
use crate::args::{ArpSearchArgs, BgpEditArgs, BgpIdArgs, BgpSessionsArgs, MacArgs, NoArgs};
use crate::formatter::ResponseFormatter;

/// Handler for network resource APIs
#[derive(Clone)]
pub struct NetworkHandler {
    client: Arc<LibreNmsClient>,
}

impl NetworkHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn arp_search(
        &self,
        Parameters(args): Parameters<ArpSearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("resources/ip/arp/{}", args.query), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bgp_sessions(
        &self,
        Parameters(args): Parameters<BgpSessionsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if let Some(hostname) = args.hostname {
            query.insert("hostname".into(), hostname.into());
        }
        if let Some(asn) = args.asn {
            query.insert("asn".into(), asn.into());
        }
        if let Some(remote_asn) = args.remote_asn {
            query.insert("remote_asn".into(), remote_asn.into());
        }
        if let Some(remote_address) = args.remote_address {
            query.insert("remote_address".into(), remote_address.into());
        }
        if let Some(local_address) = args.local_address {
            query.insert("local_address".into(), local_address.into());
        }
        if let Some(bgp_descr) = args.bgp_descr {
            query.insert("bgp_descr".into(), bgp_descr.into());
        }
        if let Some(bgp_state) = args.bgp_state {
            query.insert("bgp_state".into(), bgp_state.into());
        }
        if let Some(bgp_adminstate) = args.bgp_adminstate {
            query.insert("bgp_adminstate".into(), bgp_adminstate.into());
        }
        if let Some(bgp_family) = args.bgp_family {
            query.insert("bgp_family".into(), bgp_family.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get("bgp", query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bgp_session_get(
        &self,
        Parameters(args): Parameters<BgpIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("bgp/{}", args.bgp_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn bgp_session_edit(
        &self,
        Parameters(args): Parameters<BgpEditArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .post(&format!("bgp/{}", args.bgp_id), Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn routing_ip_addresses(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("resources/ip/addresses", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn switching_vlans(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("resources/vlans", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn switching_links(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("resources/links", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn fdb_lookup(
        &self,
        Parameters(args): Parameters<MacArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("resources/fdb/{}", args.mac), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ospf_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("ospf", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ospf_ports(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("ospf_ports", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn vrf_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("routing/vrf", None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
