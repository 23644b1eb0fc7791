use serde::{Deserialize, Serialize};

use crate::mount::MountType;

/// DirectoryEntry
///
/// One resource from a directory-listing response, after the listing layer
/// has decoded it. This is the raw material a
/// [`RemoteFile`](crate::remote_file::RemoteFile) is built from: the
/// listing layer resolves hrefs into decoded absolute paths and collects
/// the property set; `RemoteFile::from_entry` copies the fields over and
/// validates the path. How the listing protocol itself is parsed is the
/// listing layer's concern, not this crate's.
///
/// Timestamps are epoch seconds, 0 when the server did not report one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Absolute, URL-decoded path of the resource
    #[serde(rename = "decodedPath")]
    pub decoded_path: String,
    #[serde(rename = "contentLength")]
    pub content_length: i64,
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none", default)]
    pub content_type: Option<String>,
    #[serde(rename = "createTimestamp")]
    pub create_timestamp: i64,
    #[serde(rename = "modifiedTimestamp")]
    pub modified_timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub etag: Option<String>,
    /// Opaque permission flags exactly as the server sent them
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub permissions: Option<String>,
    #[serde(rename = "remoteId", skip_serializing_if = "Option::is_none", default)]
    pub remote_id: Option<String>,
    pub size: i64,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(rename = "mountType", skip_serializing_if = "Option::is_none", default)]
    pub mount_type: Option<MountType>,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    #[serde(rename = "ownerDisplayName", default)]
    pub owner_display_name: String,
    #[serde(default)]
    pub note: String,
}
