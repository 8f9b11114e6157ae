//! Torrent projection returned by `torrent-get`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Lifecycle status of a torrent, as reported by the daemon.
///
/// Transitions happen daemon-side; the client only observes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TorrentStatus {
    /// Torrent is stopped.
    #[default]
    Stopped,
    /// Queued for a local data check.
    CheckWait,
    /// Checking local data.
    Checking,
    /// Queued for download.
    DownloadWait,
    /// Downloading.
    Downloading,
    /// Queued for seeding.
    SeedWait,
    /// Seeding.
    Seeding,
}

/// A status ordinal outside the known range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown torrent status {0}")]
pub struct UnknownStatus(pub i64);

impl TryFrom<i64> for TorrentStatus {
    type Error = UnknownStatus;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Stopped),
            1 => Ok(Self::CheckWait),
            2 => Ok(Self::Checking),
            3 => Ok(Self::DownloadWait),
            4 => Ok(Self::Downloading),
            5 => Ok(Self::SeedWait),
            6 => Ok(Self::Seeding),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<TorrentStatus> for i64 {
    fn from(status: TorrentStatus) -> Self {
        status as i64
    }
}

impl fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stopped => "stopped",
            Self::CheckWait => "check-wait",
            Self::Checking => "checking",
            Self::DownloadWait => "download-wait",
            Self::Downloading => "downloading",
            Self::SeedWait => "seed-wait",
            Self::Seeding => "seeding",
        };
        f.pad(label)
    }
}

// The below mirror the Transmission RPC field names. Any field may be absent
// from a response, depending on the requested field list.

/// Torrent information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)] // rationale: these are the same fields as in Transmission RPC
pub struct Torrent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub hash_string: String,

    #[serde(default, deserialize_with = "lenient")]
    pub error: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub error_string: String,

    #[serde(default, deserialize_with = "lenient")]
    pub files: Vec<TorrentFile>,

    #[serde(default, deserialize_with = "lenient")]
    pub have_valid: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub is_finished: bool,

    #[serde(default, deserialize_with = "lenient")]
    pub percent_done: f64,

    #[serde(default, deserialize_with = "lenient")]
    pub rate_download: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub rate_upload: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub status: TorrentStatus,

    #[serde(default, deserialize_with = "lenient")]
    pub total_size: i64,

    /// Peer records, passed through undecoded.
    #[serde(default, deserialize_with = "lenient")]
    pub peers: Vec<serde_json::Value>,
}

/// Per-file completion record of a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TorrentFile {
    #[serde(default, deserialize_with = "lenient")]
    pub bytes_completed: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub length: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// Decodes a field, falling back to its default when the JSON value has the wrong type.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Like [`lenient`] for integers, also accepting whole floating point numbers such as `1.0`.
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let integer = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    });
    Ok(integer.unwrap_or_default())
}
