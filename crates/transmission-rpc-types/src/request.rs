//! Request and response argument shapes of the torrent methods.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Torrent,
    torrent::{lenient, lenient_integer},
};

/// Fields requested by [`TorrentGetRequest::new`].
pub const DEFAULT_TORRENT_FIELDS: &[&str] = &[
    "id",
    "name",
    "hashString",
    "percentDone",
    "totalSize",
    "rateDownload",
    "rateUpload",
    "files",
    "isFinished",
    "status",
    "error",
    "haveValid",
    "errorString",
    "peers",
];

/// Identifies a torrent either by its session id or by its info hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TorrentId {
    /// Numeric id, only stable for the lifetime of a daemon session.
    Id(i64),
    /// Hex-encoded info hash.
    Hash(String),
}

impl From<i64> for TorrentId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for TorrentId {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_string())
    }
}

impl From<String> for TorrentId {
    fn from(hash: String) -> Self {
        Self::Hash(hash)
    }
}

impl FromStr for TorrentId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(|_| Self::from(s), Self::Id))
    }
}

impl fmt::Display for TorrentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Hash(hash) => f.write_str(hash),
        }
    }
}

/// Arguments of `torrent-get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TorrentGetRequest {
    /// Restrict the listing to these torrents. Empty means all torrents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<TorrentId>,
    /// Torrent fields to return.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl TorrentGetRequest {
    /// Request every torrent with [`DEFAULT_TORRENT_FIELDS`].
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            fields: DEFAULT_TORRENT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Restrict the request to the given torrents.
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = TorrentId>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Replace the requested field list.
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for TorrentGetRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments of `torrent-get` as returned by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TorrentGetResponse {
    /// Requested torrents.
    #[serde(default)]
    pub torrents: Vec<Torrent>,
}

/// Arguments of `torrent-add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TorrentAddRequest {
    /// Path of a `.torrent` file on the daemon host, a URL or a magnet link.
    pub filename: String,
    /// Directory to download into. The daemon default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,
    /// Add the torrent without starting it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

impl TorrentAddRequest {
    /// Add `filename` with the daemon's default settings.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }
}

/// Arguments of `torrent-add` as returned by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TorrentAddResponse {
    /// Set when the torrent was newly added.
    #[serde(default)]
    pub torrent_added: Option<AddedTorrent>,
    /// Set when the daemon already had the torrent.
    #[serde(default)]
    pub torrent_duplicate: Option<AddedTorrent>,
}

/// Summary of a torrent returned by `torrent-add`.
///
/// Decoded as leniently as [`Torrent`]. The daemon may send the id as `1.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct AddedTorrent {
    #[serde(default, deserialize_with = "lenient")]
    pub hash_string: String,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// Arguments of the methods that only take an id list, such as `torrent-stop`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TorrentActionRequest {
    /// Torrents to act on. An empty list is omitted, which the daemon reads as all torrents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<TorrentId>,
}

/// Arguments of `torrent-set` concerning file selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TorrentSetRequest {
    /// Torrents to modify.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<TorrentId>,
    /// Indices of files to download.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_wanted: Vec<i64>,
    /// Indices of files to skip.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_unwanted: Vec<i64>,
}

/// Arguments of `torrent-remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TorrentRemoveRequest {
    /// Torrents to remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<TorrentId>,
    /// Also delete downloaded data.
    pub delete_local_data: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn torrent_id_parsing() {
        assert_eq!("3".parse::<TorrentId>(), Ok(TorrentId::Id(3)));
        assert_eq!(
            "674d163d2184353ce21f3de5196b0a6d7c2f9fc2".parse::<TorrentId>(),
            Ok(TorrentId::Hash("674d163d2184353ce21f3de5196b0a6d7c2f9fc2".into()))
        );
    }

    #[test]
    fn torrent_ids_serialize_untagged() {
        let request = TorrentActionRequest {
            ids: vec![TorrentId::Id(3), TorrentId::from("abc")],
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"ids": [3, "abc"]}));
    }

    #[test]
    fn empty_lists_are_omitted() {
        assert_eq!(
            serde_json::to_value(TorrentActionRequest::default()).unwrap(),
            json!({})
        );

        let request = TorrentSetRequest {
            ids: vec![TorrentId::Id(3)],
            files_wanted: vec![1, 3],
            files_unwanted: vec![],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"ids": [3], "files-wanted": [1, 3]})
        );
    }

    #[test]
    fn remove_always_sends_delete_flag() {
        let request = TorrentRemoveRequest {
            ids: vec![TorrentId::Id(3)],
            delete_local_data: false,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"ids": [3], "delete-local-data": false})
        );
    }

    #[test]
    fn get_request_defaults_to_all_fields() {
        let request = TorrentGetRequest::new();
        assert!(request.ids.is_empty());
        assert_eq!(request.fields.len(), DEFAULT_TORRENT_FIELDS.len());

        let value = serde_json::to_value(request.with_ids([TorrentId::Id(1)])).unwrap();
        assert_eq!(value["ids"], json!([1]));
        assert_eq!(value["fields"][0], "id");
    }

    #[test]
    fn add_request_skips_unset_options() {
        let request = TorrentAddRequest::new("magnet:?xt=urn:btih:674d163d");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"filename": "magnet:?xt=urn:btih:674d163d"})
        );

        let request = TorrentAddRequest {
            download_dir: Some("/downloads".into()),
            paused: Some(true),
            ..request
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filename": "magnet:?xt=urn:btih:674d163d",
                "download-dir": "/downloads",
                "paused": true
            })
        );
    }

    #[test]
    fn add_response_reports_duplicates() {
        let response: TorrentAddResponse = serde_json::from_value(json!({
            "torrent-duplicate": {"hashString": "abc", "id": 7, "name": "dup"}
        }))
        .unwrap();
        assert!(response.torrent_added.is_none());
        assert_eq!(response.torrent_duplicate.unwrap().id, 7);
    }

    #[test]
    fn added_torrent_accepts_float_ids() {
        let response: TorrentAddResponse = serde_json::from_value(json!({
            "torrent-added": {"hashString": "abc", "id": 1.0, "name": 5}
        }))
        .unwrap();
        let added = response.torrent_added.unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(added.hash_string, "abc");
        assert_eq!(added.name, "");

        let added: AddedTorrent = serde_json::from_value(json!({"id": 1.5})).unwrap();
        assert_eq!(added.id, 0);
    }
}
