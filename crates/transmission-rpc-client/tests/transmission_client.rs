//! Integration test for TransmissionClient with a chained sequence:
//! add -> get -> set -> stop -> start-now -> remove.
//! Requires a running Transmission RPC and environment configuration:
//! - TRANSMISSION_RPC_URL (default: http://localhost:9091/transmission/rpc)
//! - TRANSMISSION_TEST_MAGNET (default: the Big Buck Bunny magnet link)
//!
//! Run with `cargo test -- --ignored`.

#![allow(unused_crate_dependencies)]

use std::env;

use transmission_rpc_client::{ClientConfig, TransmissionClient};
use transmission_rpc_types::{
    TorrentAddRequest, TorrentGetRequest, TorrentId, TorrentRemoveRequest, TorrentRpc,
    TorrentSetRequest,
};

const BBB_MAGNET: &str = "magnet:?xt=urn:btih:674D163D2184353CE21F3DE5196B0A6D7C2F9FC2&dn=bbb_sunflower_1080p_60fps_stereo_abl.mp4&tr=udp%3a%2f%2ftracker.openbittorrent.com%3a80%2fannounce&tr=udp%3a%2f%2ftracker.publicbt.com%3a80%2fannounce";

fn magnet() -> String {
    env::var("TRANSMISSION_TEST_MAGNET").unwrap_or_else(|_| BBB_MAGNET.into())
}

#[test_log::test(tokio::test)]
#[ignore = "requires a running transmission-daemon"]
async fn transmission_client_chained_flow() {
    // Arrange client
    let config = ClientConfig::from_env().expect("invalid environment configuration");
    let client = TransmissionClient::with_config(config).expect("failed to build client");

    // 1. Add torrent, paused so nothing is downloaded
    let added = client
        .add(TorrentAddRequest {
            paused: Some(true),
            ..TorrentAddRequest::new(magnet())
        })
        .await
        .expect("failed to add torrent");
    let id = TorrentId::from(added.hash_string.clone());

    // 2. List torrents, find ours by hash
    let list = client
        .get(TorrentGetRequest::new().with_ids([id.clone()]))
        .await
        .expect("failed to list torrents");
    let t = list
        .iter()
        .find(|t| t.id == added.id || t.hash_string == added.hash_string)
        .expect("added torrent not found in list");
    assert_eq!(t.name, added.name);

    // 3. Deselect every file that is known so far
    client
        .set(TorrentSetRequest {
            ids: vec![id.clone()],
            files_wanted: vec![],
            files_unwanted: (0..t.files.len() as i64).collect(),
        })
        .await
        .expect("failed to set files");

    // 4. Stop, then start bypassing the queue
    client
        .stop(vec![id.clone()])
        .await
        .expect("failed to stop torrent");
    client
        .start_now(vec![id.clone()])
        .await
        .expect("failed to start torrent");

    // 5. Remove our torrent (no local data deletion)
    client
        .remove(TorrentRemoveRequest {
            ids: vec![id.clone()],
            delete_local_data: false,
        })
        .await
        .expect("failed to remove torrent");

    // 6. Ensure our torrent is gone
    let final_list = client
        .get(TorrentGetRequest::new())
        .await
        .expect("failed to list torrents");
    let still_present = final_list
        .iter()
        .any(|t| t.hash_string == added.hash_string);
    assert!(!still_present, "torrent was not removed");
}
