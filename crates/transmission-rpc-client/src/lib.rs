//! # Transmission RPC client.
//!
//! usage:
//!
//! ```rust,ignore
//! use transmission_rpc_client::TransmissionClient;
//! use transmission_rpc_types::{TorrentAddRequest, TorrentGetRequest, TorrentRpc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransmissionClient::new("http://localhost:9091/transmission/rpc")?;
//!     let added = client.add(TorrentAddRequest::new("magnet:?xt=urn:btih:...")).await?;
//!     println!("Added torrent: {:?}", added);
//!     for torrent in client.get(TorrentGetRequest::new()).await? {
//!         println!("{} {} {:.1}%", torrent.id, torrent.name, torrent.percent_done * 100.0);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Methods without a typed wrapper can be called through
//! [`TransmissionClient::exchange`] with one of the [`destination`] types.

mod client;
mod config;
pub mod destination;
mod envelope;
mod session;
mod transport;

#[cfg(test)]
mod testutil;

#[cfg(test)]
use httpmock as _;
#[cfg(test)]
use test_log as _;
#[cfg(test)]
use tracing_subscriber as _;

pub use client::TransmissionClient;
pub use config::{ClientConfig, DEFAULT_RPC_URL};
pub use destination::{Destination, Discard, StringSink, Typed};
pub use transport::{HttpTransport, SESSION_ID_HEADER};
