//! Internal trait abstracting the HTTP round trip of an RPC exchange.
//!
//! This module provides the [`RpcTransport`] trait which abstracts the underlying
//! HTTP client, enabling mocking in tests.

use bytes::Bytes;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use url::Url;

use transmission_rpc_types::RpcError;

use crate::config::ClientConfig;

/// Header carrying the session token in both directions.
pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// Status and headers of interest of one HTTP response, with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RpcReply {
    pub(crate) status: u16,
    pub(crate) session_id: Option<String>,
    pub(crate) body: Bytes,
}

/// Internal trait that abstracts posting an encoded envelope.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait RpcTransport {
    /// Posts `body` with `session_id` attached. Only failures to obtain a response are errors.
    async fn post(&self, body: Bytes, session_id: String) -> Result<RpcReply, RpcError>;
}

/// HTTP transport posting envelopes to the RPC endpoint with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RpcError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.rpc_url.clone(),
        })
    }
}

impl RpcTransport for HttpTransport {
    async fn post(&self, body: Bytes, session_id: String) -> Result<RpcReply, RpcError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "text/json; charset=UTF-8")
            .header(ACCEPT, "text/json")
            .header(SESSION_ID_HEADER, session_id)
            .body(body)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let session_id = response
            .headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        Ok(RpcReply {
            status,
            session_id,
            body,
        })
    }
}
