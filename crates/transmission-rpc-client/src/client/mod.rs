//! Transmission RPC client implementation.

use serde::Serialize;
use tracing::debug;

use transmission_rpc_types::{
    AddedTorrent, RpcError, Torrent, TorrentActionRequest, TorrentAddRequest, TorrentAddResponse,
    TorrentGetRequest, TorrentGetResponse, TorrentId, TorrentRemoveRequest, TorrentRpc,
    TorrentSetRequest, methods,
};

use crate::config::ClientConfig;
use crate::destination::{Destination, Discard, Typed};
use crate::envelope::{SUCCESS, decode_response, encode_request};
use crate::session::SessionToken;
use crate::transport::{HttpTransport, RpcReply, RpcTransport};


const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_CONFLICT: u16 = 409;

/// TransmissionClient talks to a Transmission daemon over its JSON RPC endpoint.
///
/// The session token is negotiated transparently and shared by every call made
/// through the same client, so a client can be shared between tasks.
#[allow(missing_debug_implementations, private_bounds)]
pub struct TransmissionClient<T: RpcTransport = HttpTransport> {
    transport: T,
    session: SessionToken,
    max_session_retries: u32,
}

impl TransmissionClient {
    /// Create a new TransmissionClient for `rpc_url` with default settings.
    pub fn new(rpc_url: &str) -> Result<Self, RpcError> {
        Self::with_config(ClientConfig::new(rpc_url)?)
    }

    /// Create a new TransmissionClient from a [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self, RpcError> {
        debug!("Using Transmission RPC at {}", config.rpc_url);
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, config.max_session_retries))
    }
}

#[allow(private_bounds)]
impl<T: RpcTransport> TransmissionClient<T> {
    /// Create a TransmissionClient with a custom transport.
    /// This is primarily useful for testing with mocks.
    pub(crate) fn with_transport(transport: T, max_session_retries: u32) -> Self {
        Self {
            transport,
            session: SessionToken::default(),
            max_session_retries,
        }
    }

    /// The session token the next request will carry.
    pub fn session_id(&self) -> String {
        self.session.current()
    }

    /// Performs one exchange: sends `method` with `arguments` and hands the `arguments`
    /// of the response to `destination`.
    ///
    /// A 409 answer means the session token is stale; the token advertised by the daemon
    /// is stored and the identical request is sent again, at most `max_session_retries`
    /// times. Dropping the returned future cancels the exchange.
    pub async fn exchange<A, D>(
        &self,
        method: &str,
        arguments: &A,
        destination: D,
    ) -> Result<D::Output, RpcError>
    where
        A: Serialize + ?Sized,
        D: Destination,
    {
        let body = encode_request(method, arguments)?;
        let mut retries = 0;

        loop {
            let session_id = self.session.current();
            let reply = self.transport.post(body.clone(), session_id.clone()).await?;

            if reply.status != STATUS_CONFLICT {
                return accept_reply(method, reply, destination);
            }

            if retries == self.max_session_retries {
                return Err(RpcError::SessionNegotiation {
                    attempts: retries + 1,
                });
            }
            let fresh = reply
                .session_id
                .ok_or(RpcError::SessionNegotiation {
                    attempts: retries + 1,
                })?;
            if self.session.refresh(&session_id, fresh) {
                debug!("Refreshed session token for {method}");
            }
            retries += 1;
        }
    }
}

fn accept_reply<D: Destination>(
    method: &str,
    reply: RpcReply,
    destination: D,
) -> Result<D::Output, RpcError> {
    match reply.status {
        STATUS_UNAUTHORIZED => return Err(RpcError::Unauthorized),
        200..=299 => {}
        status => return Err(RpcError::Status(status)),
    }

    let envelope = decode_response(method, &reply.body)?;
    if envelope.result != SUCCESS {
        return Err(RpcError::Remote(envelope.result));
    }

    destination.accept(method, envelope.arguments.as_deref())
}

#[allow(private_bounds)]
impl<T: RpcTransport> TorrentRpc for TransmissionClient<T> {
    async fn get(&self, request: TorrentGetRequest) -> Result<Vec<Torrent>, RpcError> {
        debug!("Listing torrents {:?}", request.ids);
        let response: TorrentGetResponse = self
            .exchange(methods::TORRENT_GET, &request, Typed::new())
            .await?;
        debug!("Received {} torrents", response.torrents.len());

        Ok(response.torrents)
    }

    async fn add(&self, request: TorrentAddRequest) -> Result<AddedTorrent, RpcError> {
        debug!("Adding torrent from: {}", request.filename);
        let response: TorrentAddResponse = self
            .exchange(methods::TORRENT_ADD, &request, Typed::new())
            .await?;

        if let Some(torrent) = response.torrent_added {
            debug!("Added {torrent:?}");
            return Ok(torrent);
        }
        let torrent = response
            .torrent_duplicate
            .ok_or_else(|| RpcError::InvalidTorrent("No torrent returned".into()))?;
        debug!("Torrent already present: {torrent:?}");

        Ok(torrent)
    }

    async fn start_now(&self, ids: Vec<TorrentId>) -> Result<(), RpcError> {
        debug!("Starting torrents {ids:?}");
        self.exchange(
            methods::TORRENT_START_NOW,
            &TorrentActionRequest { ids },
            Discard,
        )
        .await?;
        debug!("Start command sent");
        Ok(())
    }

    async fn stop(&self, ids: Vec<TorrentId>) -> Result<(), RpcError> {
        debug!("Stopping torrents {ids:?}");
        self.exchange(methods::TORRENT_STOP, &TorrentActionRequest { ids }, Discard)
            .await?;
        debug!("Stop command sent");
        Ok(())
    }

    async fn set(&self, request: TorrentSetRequest) -> Result<(), RpcError> {
        debug!(
            "Setting files on torrents {:?}: wanted={:?} unwanted={:?}",
            request.ids, request.files_wanted, request.files_unwanted
        );
        self.exchange(methods::TORRENT_SET, &request, Discard).await?;
        debug!("Set command sent");
        Ok(())
    }

    async fn remove(&self, request: TorrentRemoveRequest) -> Result<(), RpcError> {
        debug!(
            "Removing torrents {:?}, delete_local_data={}",
            request.ids, request.delete_local_data
        );
        self.exchange(methods::TORRENT_REMOVE, &request, Discard).await?;
        debug!("Remove command sent");
        Ok(())
    }
}
