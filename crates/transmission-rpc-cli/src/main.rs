//! # Transmission RPC command line
//!
//! ## Usage
//!
//! ```sh,ignore
//! cargo run --release --bin transmission-rpc -- --url http://localhost:9091/transmission/rpc list
//! ```

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use transmission_rpc_client::TransmissionClient;
use transmission_rpc_types::{
    Torrent, TorrentAddRequest, TorrentGetRequest, TorrentRemoveRequest, TorrentRpc,
    TorrentSetRequest,
};

use crate::cli::{Cli, Command};

mod cli;

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Formats one line of the `list` output.
fn torrent_line(torrent: &Torrent) -> String {
    let mut line = format!(
        "{:>4}  {:<13} {:>6.1}%  {}",
        torrent.id,
        torrent.status,
        torrent.percent_done * 100.0,
        torrent.name
    );
    if torrent.error != 0 {
        line.push_str(&format!("  [error {}: {}]", torrent.error, torrent.error_string));
    }
    line
}

async fn run<C: TorrentRpc>(
    client: &C,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List { ids } => {
            let torrents = client.get(TorrentGetRequest::new().with_ids(ids)).await?;
            debug!("Listed {} torrents", torrents.len());
            for torrent in &torrents {
                println!("{}", torrent_line(torrent));
            }
        }
        Command::Add {
            filename,
            download_dir,
            paused,
        } => {
            let torrent = client
                .add(TorrentAddRequest {
                    filename,
                    download_dir,
                    paused: paused.then_some(true),
                })
                .await?;
            info!("Added torrent {} ({}) {}", torrent.id, torrent.hash_string, torrent.name);
        }
        Command::StartNow { ids } => {
            client.start_now(ids).await?;
            info!("Started");
        }
        Command::Stop { ids } => {
            client.stop(ids).await?;
            info!("Stopped");
        }
        Command::Set {
            ids,
            wanted,
            unwanted,
        } => {
            client
                .set(TorrentSetRequest {
                    ids,
                    files_wanted: wanted,
                    files_unwanted: unwanted,
                })
                .await?;
            info!("File selection updated");
        }
        Command::Remove {
            ids,
            delete_local_data,
        } => {
            client
                .remove(TorrentRemoveRequest {
                    ids,
                    delete_local_data,
                })
                .await?;
            info!("Removed");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.connection.into_config()?;
    info!("Using Transmission RPC at {}", config.rpc_url);
    let client = TransmissionClient::with_config(config)?;

    run(&client, cli.command).await
}

#[cfg(test)]
mod tests {
    use transmission_rpc_types::TorrentStatus;

    use super::*;

    #[test]
    fn formats_torrent_line() {
        let torrent = Torrent {
            id: 3,
            name: "debian.iso".into(),
            percent_done: 0.5,
            status: TorrentStatus::Downloading,
            ..Default::default()
        };
        assert_eq!(
            torrent_line(&torrent),
            "   3  downloading     50.0%  debian.iso"
        );

        let torrent = Torrent {
            error: 3,
            error_string: "No data found".into(),
            ..torrent
        };
        assert!(torrent_line(&torrent).ends_with("[error 3: No data found]"));
    }
}
