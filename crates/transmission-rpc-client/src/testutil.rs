//! Shared test utilities and fixtures.

use bytes::Bytes;
use serde_json::{Value, json};

use transmission_rpc_types::{Torrent, TorrentFile, TorrentStatus};

use crate::transport::RpcReply;

pub(crate) fn make_test_torrent(id: i64, name: &str, hash: &str) -> Torrent {
    Torrent {
        id,
        name: name.to_string(),
        hash_string: hash.to_string(),
        error: 0,
        error_string: String::new(),
        files: vec![TorrentFile {
            bytes_completed: 500,
            length: 1000,
            name: format!("{name}/file.bin"),
        }],
        have_valid: 500,
        is_finished: false,
        percent_done: 0.5,
        rate_download: 1024,
        rate_upload: 128,
        status: TorrentStatus::Downloading,
        total_size: 1000,
        peers: vec![json!({"address": "10.0.0.2", "port": 51413})],
    }
}

/// A reply with `status` and a JSON body.
pub(crate) fn reply(status: u16, body: Value) -> RpcReply {
    RpcReply {
        status,
        session_id: None,
        body: Bytes::from(body.to_string()),
    }
}

/// A successful reply carrying `arguments`.
pub(crate) fn success(arguments: Value) -> RpcReply {
    reply(200, json!({"result": "success", "arguments": arguments}))
}

/// A 409 session challenge advertising `session_id`.
pub(crate) fn conflict(session_id: &str) -> RpcReply {
    RpcReply {
        status: 409,
        session_id: Some(session_id.to_string()),
        body: Bytes::from_static(b"<h1>409: Conflict</h1>"),
    }
}
