//! Request and response envelopes of the RPC protocol.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use transmission_rpc_types::RpcError;

/// Result string of a successful response.
pub(crate) const SUCCESS: &str = "success";

#[derive(Serialize)]
struct RequestEnvelope<'a, A: ?Sized> {
    method: &'a str,
    arguments: &'a A,
}

/// Response envelope. `arguments` is kept undecoded until a destination claims it.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    pub(crate) result: String,
    #[serde(default)]
    pub(crate) arguments: Option<Box<RawValue>>,
}

/// Serializes `{method, arguments}` once, so retries replay the same bytes.
pub(crate) fn encode_request<A: Serialize + ?Sized>(
    method: &str,
    arguments: &A,
) -> Result<Bytes, RpcError> {
    serde_json::to_vec(&RequestEnvelope { method, arguments })
        .map(Bytes::from)
        .map_err(|e| RpcError::Encode(e.to_string()))
}

pub(crate) fn decode_response(method: &str, body: &[u8]) -> Result<ResponseEnvelope, RpcError> {
    serde_json::from_slice(body).map_err(|e| RpcError::decode(method, e))
}
