//! # Transmission RPC Types
//!
//! This crate defines the wire shapes, error taxonomy and operations trait shared by
//! Transmission RPC clients.

use thiserror::Error;

mod request;
mod torrent;

pub use request::{
    AddedTorrent, DEFAULT_TORRENT_FIELDS, TorrentActionRequest, TorrentAddRequest,
    TorrentAddResponse, TorrentGetRequest, TorrentGetResponse, TorrentId, TorrentRemoveRequest,
    TorrentSetRequest,
};
pub use torrent::{Torrent, TorrentFile, TorrentStatus, UnknownStatus};

/// RPC method names understood by the daemon.
pub mod methods {
    /// List torrents.
    pub const TORRENT_GET: &str = "torrent-get";
    /// Add a torrent from a file path, URL or magnet link.
    pub const TORRENT_ADD: &str = "torrent-add";
    /// Start torrents, bypassing the download queue.
    pub const TORRENT_START_NOW: &str = "torrent-start-now";
    /// Stop torrents.
    pub const TORRENT_STOP: &str = "torrent-stop";
    /// Mutate torrent settings such as file selection.
    pub const TORRENT_SET: &str = "torrent-set";
    /// Remove torrents.
    pub const TORRENT_REMOVE: &str = "torrent-remove";
}

/// Error type for Transmission RPC operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// The request never produced a response (connection failure, DNS, timeout, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The daemon kept rejecting the session token.
    #[error("session negotiation failed after {attempts} attempts")]
    SessionNegotiation {
        /// Number of requests sent before giving up.
        attempts: u32,
    },

    /// The daemon requires RPC authentication.
    #[error("authentication required")]
    Unauthorized,

    /// The endpoint answered with an unexpected HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The daemon answered with a `result` other than `success`.
    #[error("{0}")]
    Remote(String),

    /// The response could not be decoded into the requested shape.
    #[error("failed to decode `{method}` response: {message}")]
    Decode {
        /// RPC method the response belongs to.
        method: String,
        /// Decoder message.
        message: String,
    },

    /// The request arguments could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// Writing decoded output to a sink failed.
    #[error("io error: {0}")]
    Io(String),

    /// The daemon did not return the torrent the operation refers to.
    #[error("invalid torrent: {0}")]
    InvalidTorrent(String),

    /// Client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RpcError {
    /// Builds a [`RpcError::Decode`] for `method`.
    pub fn decode(method: &str, message: impl ToString) -> Self {
        Self::Decode {
            method: method.to_string(),
            message: message.to_string(),
        }
    }
}

/// TorrentRpc defines the torrent operations offered by a Transmission daemon.
///
/// The daemon is the sole validator of ids, filenames and field names.
#[allow(async_fn_in_trait)]
pub trait TorrentRpc {
    /// List torrents, optionally filtered by id, returning the requested fields.
    async fn get(&self, request: TorrentGetRequest) -> Result<Vec<Torrent>, RpcError>;
    /// Add a torrent from a filename, URL or magnet link.
    /// A torrent the daemon already knows is returned as well.
    async fn add(&self, request: TorrentAddRequest) -> Result<AddedTorrent, RpcError>;
    /// Start torrents immediately, ignoring the download queue.
    async fn start_now(&self, ids: Vec<TorrentId>) -> Result<(), RpcError>;
    /// Stop torrents.
    async fn stop(&self, ids: Vec<TorrentId>) -> Result<(), RpcError>;
    /// Change which files of a torrent are downloaded.
    async fn set(&self, request: TorrentSetRequest) -> Result<(), RpcError>;
    /// Remove torrents. If `delete_local_data` is set the downloaded data is deleted as well.
    async fn remove(&self, request: TorrentRemoveRequest) -> Result<(), RpcError>;
}
