use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use transmission_rpc_client::ClientConfig;
use transmission_rpc_types::{RpcError, TorrentId};

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Connection options
    #[command(flatten)]
    pub connection: CliConnectionOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection options. Unset options fall back to the `TRANSMISSION_*` environment variables.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct CliConnectionOptions {
    /// RPC endpoint, e.g. http://localhost:9091/transmission/rpc
    #[arg(short, long)]
    pub url: Option<String>,

    /// How often a request is re-sent after a session token challenge.
    #[arg(long)]
    pub session_retries: Option<u32>,

    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl CliConnectionOptions {
    /// Applies the options on top of the environment configuration.
    pub(crate) fn into_config(self) -> Result<ClientConfig, RpcError> {
        self.apply(ClientConfig::from_env()?)
    }

    fn apply(self, mut config: ClientConfig) -> Result<ClientConfig, RpcError> {
        if let Some(url) = self.url {
            config.rpc_url = ClientConfig::new(&url)?.rpc_url;
        }
        if let Some(retries) = self.session_retries {
            config.max_session_retries = retries;
        }
        if let Some(secs) = self.timeout {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List torrents.
    List {
        /// Only list these torrents (numeric id or hash).
        #[arg(value_parser = str::parse::<TorrentId>)]
        ids: Vec<TorrentId>,
    },

    /// Add a torrent from a .torrent path on the daemon host, a URL or a magnet link.
    Add {
        /// Torrent file, URL or magnet link.
        filename: String,

        /// Download directory.
        #[arg(short, long)]
        download_dir: Option<String>,

        /// Add without starting.
        #[arg(long, default_value_t = false)]
        paused: bool,
    },

    /// Start torrents now, bypassing the queue.
    StartNow {
        #[arg(required = true, value_parser = str::parse::<TorrentId>)]
        ids: Vec<TorrentId>,
    },

    /// Stop torrents.
    Stop {
        #[arg(required = true, value_parser = str::parse::<TorrentId>)]
        ids: Vec<TorrentId>,
    },

    /// Select which files of a torrent are downloaded.
    Set {
        #[arg(required = true, value_parser = str::parse::<TorrentId>)]
        ids: Vec<TorrentId>,

        /// File indices to download (comma-separated).
        #[arg(long, value_delimiter = ',')]
        wanted: Vec<i64>,

        /// File indices to skip (comma-separated).
        #[arg(long, value_delimiter = ',')]
        unwanted: Vec<i64>,
    },

    /// Remove torrents.
    Remove {
        #[arg(required = true, value_parser = str::parse::<TorrentId>)]
        ids: Vec<TorrentId>,

        /// Also delete downloaded data.
        #[arg(long, default_value_t = false)]
        delete_local_data: bool,
    },
}
