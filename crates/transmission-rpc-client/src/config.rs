//! Client configuration.

use std::{env, time::Duration};

use url::Url;

use transmission_rpc_types::RpcError;

/// Endpoint used when none is configured.
pub const DEFAULT_RPC_URL: &str = "http://localhost:9091/transmission/rpc";

/// Configuration of a [`TransmissionClient`](crate::TransmissionClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The RPC endpoint, e.g. `http://host:9091/transmission/rpc`.
    pub rpc_url: Url,
    /// How many times a request is re-sent after the daemon rejects the session token.
    pub max_session_retries: u32,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration for `rpc_url` with default retry and timeout settings.
    pub fn new(rpc_url: &str) -> Result<Self, RpcError> {
        Ok(Self {
            rpc_url: parse_url(rpc_url)?,
            ..Default::default()
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// - `TRANSMISSION_RPC_URL` (default: [`DEFAULT_RPC_URL`])
    /// - `TRANSMISSION_SESSION_RETRIES` (default: 3)
    /// - `TRANSMISSION_TIMEOUT_SECS` (default: 30, `0` disables the timeout)
    pub fn from_env() -> Result<Self, RpcError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RpcError> {
        let mut config = Self::default();

        if let Some(url) = lookup("TRANSMISSION_RPC_URL") {
            config.rpc_url = parse_url(&url)?;
        }
        if let Some(retries) = lookup("TRANSMISSION_SESSION_RETRIES") {
            config.max_session_retries = retries.trim().parse().map_err(|e| {
                RpcError::Config(format!("invalid TRANSMISSION_SESSION_RETRIES: {e}"))
            })?;
        }
        if let Some(secs) = lookup("TRANSMISSION_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                RpcError::Config(format!("invalid TRANSMISSION_TIMEOUT_SECS: {e}"))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: Url::parse(DEFAULT_RPC_URL).expect("default RPC URL is valid"),
            max_session_retries: 3,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

fn parse_url(rpc_url: &str) -> Result<Url, RpcError> {
    Url::parse(rpc_url).map_err(|e| RpcError::Config(format!("Invalid RPC URL: {}", e)))
}
