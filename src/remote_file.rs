//! Remote files and parcels
//! ------------------------
//!
//! When the Nimbus client lists a folder, every resource in the listing
//! surfaces as a `RemoteFile`: a snapshot of the server-side metadata for
//! one file or directory (path, sizes, timestamps, permission text, owner,
//! favorite/encryption flags, preview flag, note).
//!
//! Records cross component boundaries as "parcels", an ordered-field
//! envelope with no field tags. Reading is positional, so the slot order
//! below is the binding contract between writer and reader.
//!
//! A `RemoteFile` parcel contains the following slots:
//!
//! ```ascii
//!     [String:"<remote_path>"]
//!     [String:"<mime_type>"]            /* null when the server sent none */
//!     [Int64:length]
//!     [Int64:creation_timestamp]
//!     [Int64:modified_timestamp]
//!     [String:"<etag>"]                 /* null when the server sent none */
//!     [String:"<permissions>"]          /* null when the server sent none */
//!     [String:"<remote_id>"]            /* null when the server sent none */
//!     [Int64:size]
//!     [String:"true"|"false"]           /* is_favorite */
//!     [String:"true"|"false"]           /* is_encrypted */
//!     [MountType:mount_type]            /* null flag + Int32 variant tag */
//!     [String:"<owner_id>"]
//!     [String:"<owner_display_name>"]
//!     [String:"true"|"false"]           /* has_preview */
//!     [String:"<note>"]
//! ```
//!
//! Notes:
//!
//! - Booleans travel as the string tokens `"true"`/`"false"`, not as flag
//!   bytes. Decoding matches `"true"` case-insensitively; any other value,
//!   including a null slot, decodes to `false`.
//!
//! - `unread_comments_count` never crosses the parcel boundary. Reading a
//!   parcel into an existing record leaves that field untouched.
//!
//! - `length` and `size` are two independent byte counts. The listing
//!   layer historically populated both from closely related properties and
//!   consumers read either, so they are kept distinct here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::entry::DirectoryEntry;
use crate::error::{Error, Result};
use crate::mount::MountType;
use crate::parcel::{ParcelRead, ParcelWrite};

/// Separator, and first character, of every absolute remote path.
pub const PATH_SEPARATOR: &str = "/";

/// Content type the listing layer reports for directories.
pub const MIME_TYPE_DIRECTORY: &str = "DIR";

/// Metadata snapshot of one remote file or directory.
///
/// Fields are public and freely mutable; only the path-taking constructors
/// validate. A record built by [`RemoteFile::new`] or
/// [`RemoteFile::from_entry`] is guaranteed to carry a non-empty
/// `remote_path` starting with [`PATH_SEPARATOR`]. `owner_id`,
/// `owner_display_name` and `note` are never absent, only empty; the other
/// string fields distinguish absent (`None`) from empty, and consumers
/// branch on that difference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RemoteFile {
    #[serde(rename = "remotePath")]
    pub remote_path: String,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none", default)]
    pub mime_type: Option<String>,
    /// Byte count used by the transfer layer
    pub length: i64,
    /// Byte count reported by the listing layer, independent of `length`
    pub size: i64,
    /// Epoch seconds, 0 = unknown
    #[serde(rename = "creationTimestamp")]
    pub creation_timestamp: i64,
    /// Epoch seconds, 0 = unknown
    #[serde(rename = "modifiedTimestamp")]
    pub modified_timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub etag: Option<String>,
    /// Opaque permission flags exactly as the server sent them
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub permissions: Option<String>,
    #[serde(rename = "remoteId", skip_serializing_if = "Option::is_none", default)]
    pub remote_id: Option<String>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(rename = "isEncrypted", default)]
    pub is_encrypted: bool,
    #[serde(rename = "mountType", skip_serializing_if = "Option::is_none", default)]
    pub mount_type: Option<MountType>,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    #[serde(rename = "ownerDisplayName", default)]
    pub owner_display_name: String,
    #[serde(rename = "unreadCommentsCount", default)]
    pub unread_comments_count: i32,
    #[serde(rename = "hasPreview", default)]
    pub has_preview: bool,
    #[serde(default)]
    pub note: String,
}

impl RemoteFile {
    /// Create a new `RemoteFile` with the given path and every other field
    /// at its default.
    ///
    /// The path must already be URL-decoded, and [`PATH_SEPARATOR`] must be
    /// its first character. It is stored verbatim; no decoding or
    /// normalization happens here.
    pub fn new(path: &str) -> Result<RemoteFile> {
        if path.is_empty() || !path.starts_with(PATH_SEPARATOR) {
            return Err(Error::InvalidPath(path.to_string()));
        }
        Ok(RemoteFile {
            remote_path: path.to_string(),
            ..RemoteFile::default()
        })
    }

    /// Build a `RemoteFile` from a directory-listing entry.
    ///
    /// The entry's decoded path goes through the same validation as
    /// [`RemoteFile::new`]; every other listed field is copied over
    /// unchanged. `is_encrypted`, `unread_comments_count` and
    /// `has_preview` are not part of the listing entry and stay at their
    /// defaults.
    pub fn from_entry(entry: &DirectoryEntry) -> Result<RemoteFile> {
        let mut file = RemoteFile::new(&entry.decoded_path)?;
        file.creation_timestamp = entry.create_timestamp;
        file.length = entry.content_length;
        file.mime_type = entry.content_type.clone();
        file.modified_timestamp = entry.modified_timestamp;
        file.etag = entry.etag.clone();
        file.permissions = entry.permissions.clone();
        file.remote_id = entry.remote_id.clone();
        file.size = entry.size;
        file.is_favorite = entry.is_favorite;
        file.mount_type = entry.mount_type;
        file.owner_id = entry.owner_id.clone();
        file.owner_display_name = entry.owner_display_name.clone();
        file.note = entry.note.clone();
        Ok(file)
    }

    /// Reconstruct a `RemoteFile` from a parcel.
    pub fn from_parcel<R: ParcelRead>(reader: &mut R) -> Result<RemoteFile> {
        let mut file = RemoteFile::default();
        file.read_parcel(reader)?;
        Ok(file)
    }

    /// Read a parcel into this record, slot by slot in the documented
    /// order. Fields outside the envelope keep their current values.
    pub fn read_parcel<R: ParcelRead>(&mut self, reader: &mut R) -> Result<()> {
        self.remote_path = reader.read_parcel_string()?.unwrap_or_default();
        self.mime_type = reader.read_parcel_string()?;
        self.length = reader.read_parcel_i64()?;
        self.creation_timestamp = reader.read_parcel_i64()?;
        self.modified_timestamp = reader.read_parcel_i64()?;
        self.etag = reader.read_parcel_string()?;
        self.permissions = reader.read_parcel_string()?;
        self.remote_id = reader.read_parcel_string()?;
        self.size = reader.read_parcel_i64()?;
        self.is_favorite = parse_boolean(reader.read_parcel_string()?);
        self.is_encrypted = parse_boolean(reader.read_parcel_string()?);
        self.mount_type = MountType::read_parcel(reader)?;
        self.owner_id = reader.read_parcel_string()?.unwrap_or_default();
        self.owner_display_name = reader.read_parcel_string()?.unwrap_or_default();
        self.has_preview = parse_boolean(reader.read_parcel_string()?);
        self.note = reader.read_parcel_string()?.unwrap_or_default();
        Ok(())
    }

    /// Write this record as a parcel, slot by slot in the documented order.
    pub fn write_parcel<W: ParcelWrite>(&self, writer: &mut W) -> Result<()> {
        writer.write_parcel_string(Some(&self.remote_path))?;
        writer.write_parcel_string(self.mime_type.as_deref())?;
        writer.write_parcel_i64(self.length)?;
        writer.write_parcel_i64(self.creation_timestamp)?;
        writer.write_parcel_i64(self.modified_timestamp)?;
        writer.write_parcel_string(self.etag.as_deref())?;
        writer.write_parcel_string(self.permissions.as_deref())?;
        writer.write_parcel_string(self.remote_id.as_deref())?;
        writer.write_parcel_i64(self.size)?;
        writer.write_parcel_string(Some(boolean_token(self.is_favorite)))?;
        writer.write_parcel_string(Some(boolean_token(self.is_encrypted)))?;
        MountType::write_parcel(self.mount_type, writer)?;
        writer.write_parcel_string(Some(&self.owner_id))?;
        writer.write_parcel_string(Some(&self.owner_display_name))?;
        writer.write_parcel_string(Some(boolean_token(self.has_preview)))?;
        writer.write_parcel_string(Some(&self.note))?;
        Ok(())
    }

    /// Diagnostic fingerprint of the record's contents: the first four
    /// bytes of a SHA-1 over every field, including the ones outside the
    /// parcel envelope.
    ///
    /// Deterministic for identical contents, but carries no contractual
    /// meaning beyond that. Not an identity, and not usable for equality.
    pub fn content_digest(&self) -> i32 {
        let mut hasher = Sha1::new();
        digest_string(&mut hasher, Some(&self.remote_path));
        digest_string(&mut hasher, self.mime_type.as_deref());
        hasher.update(self.length.to_be_bytes());
        hasher.update(self.size.to_be_bytes());
        hasher.update(self.creation_timestamp.to_be_bytes());
        hasher.update(self.modified_timestamp.to_be_bytes());
        digest_string(&mut hasher, self.etag.as_deref());
        digest_string(&mut hasher, self.permissions.as_deref());
        digest_string(&mut hasher, self.remote_id.as_deref());
        hasher.update([self.is_favorite as u8, self.is_encrypted as u8]);
        match self.mount_type {
            Some(mount_type) => {
                hasher.update([0x01]);
                hasher.update(mount_type.tag().to_be_bytes());
            }
            None => hasher.update([0x00]),
        }
        digest_string(&mut hasher, Some(&self.owner_id));
        digest_string(&mut hasher, Some(&self.owner_display_name));
        hasher.update(self.unread_comments_count.to_be_bytes());
        hasher.update([self.has_preview as u8]);
        digest_string(&mut hasher, Some(&self.note));

        let digest = hasher.finalize();
        i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }

    /// Creation time as a timestamp, `None` while unknown.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if self.creation_timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp(self.creation_timestamp, 0)
    }

    /// Last-modified time as a timestamp, `None` while unknown.
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        if self.modified_timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp(self.modified_timestamp, 0)
    }

    /// Whether the listing layer reported this record as a directory.
    pub fn is_directory(&self) -> bool {
        self.mime_type.as_deref() == Some(MIME_TYPE_DIRECTORY)
    }
}

/// Lenient boolean decoding for parcel slots: any casing of "true" is
/// true; anything else, including a null slot, is false.
fn parse_boolean(value: Option<String>) -> bool {
    value.is_some_and(|token| token.eq_ignore_ascii_case("true"))
}

fn boolean_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Length-framed field update so adjacent fields can't alias each other in
/// the digest.
fn digest_string(hasher: &mut Sha1, value: Option<&str>) {
    match value {
        Some(string) => {
            hasher.update([0x01]);
            hasher.update((string.len() as u64).to_be_bytes());
            hasher.update(string.as_bytes());
        }
        None => hasher.update([0x00]),
    }
}
