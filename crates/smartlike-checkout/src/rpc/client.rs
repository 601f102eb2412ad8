/*
[INPUT]:  Signed transaction envelopes and client configuration
[OUTPUT]: Normalized gateway replies
[POS]:    RPC layer - JSON-RPC submission to the Smartlike network gateway
[UPDATE]: When the gateway endpoint or envelope format changes
*/

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, warn};

use crate::rpc::Result;
use crate::types::{RpcReply, SignedMessage, TxKind};

/// Production Smartlike network gateway
const NETWORK_URL: &str = "https://smartlike.org/network";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// JSON-RPC 2.0 envelope around a signed message
#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    id: u64,
    params: RpcParams<'a>,
}

#[derive(Serialize)]
struct RpcParams<'a> {
    signed_message: &'a SignedMessage,
}

/// HTTP client for the Smartlike network gateway
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http_client: Client,
    network_url: Url,
}

impl NetworkClient {
    /// Create a new client against the production gateway
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom timeouts
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_network_url(config, NETWORK_URL)
    }

    /// Create a new client against an explicit gateway URL
    pub fn with_config_and_network_url(config: ClientConfig, network_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            network_url: Url::parse(network_url)?,
        })
    }

    /// Gateway URL this client submits to
    pub fn network_url(&self) -> &Url {
        &self.network_url
    }

    /// Submit a signed transaction via JSON-RPC.
    ///
    /// Transport failures never surface on the error channel: an
    /// unreachable gateway becomes a "failed to connect" reply and a
    /// non-200 status becomes "http code N", so every submission ends in
    /// a reply value.
    pub async fn submit(&self, method: TxKind, message: &SignedMessage) -> RpcReply {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: method.as_str(),
            id: rand::random::<u64>(),
            params: RpcParams {
                signed_message: message,
            },
        };

        debug!(
            method = method.as_str(),
            id = request.id,
            "submitting signed transaction"
        );

        let response = match self
            .http_client
            .post(self.network_url.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "network gateway unreachable");
                return RpcReply::connect_failed();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(code = status.as_u16(), "gateway returned non-success status");
            return RpcReply::http_code(status.as_u16());
        }

        match response.json::<RpcReply>().await {
            Ok(reply) => {
                debug!(status = %reply.status, "gateway reply received");
                reply
            }
            Err(err) => {
                warn!(error = %err, "gateway reply did not parse");
                RpcReply::invalid_response(&err.to_string())
            }
        }
    }
}
