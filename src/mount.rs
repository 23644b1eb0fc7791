use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parcel::{ParcelRead, ParcelWrite};

/// Classification of the storage backend a remote file lives on.
///
/// `Internal` is the service's primary storage. `External` marks files
/// served from an externally mounted backend, `Group` files shared through
/// a group mount. A file whose classification the server did not report is
/// represented as `Option::<MountType>::None` by its callers.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum MountType {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "external")]
    External,
    #[serde(rename = "group")]
    Group,
}

impl MountType {
    /// Stable wire tag used in the parcel envelope.
    pub fn tag(self) -> i32 {
        match self {
            MountType::Internal => 0,
            MountType::External => 1,
            MountType::Group => 2,
        }
    }

    pub fn from_tag(tag: i32) -> Result<MountType> {
        match tag {
            0 => Ok(MountType::Internal),
            1 => Ok(MountType::External),
            2 => Ok(MountType::Group),
            _ => Err(Error::UnknownMountType(tag)),
        }
    }

    /// Read an optional mount type slot.
    /// Format: 1 byte (isNotNull flag) + if not null: 4-byte variant tag
    pub fn read_parcel<R: ParcelRead>(reader: &mut R) -> Result<Option<MountType>> {
        if !reader.read_parcel_flag()? {
            return Ok(None);
        }
        MountType::from_tag(reader.read_parcel_i32()?).map(Some)
    }

    /// Write an optional mount type slot, mirroring `read_parcel`
    pub fn write_parcel<W: ParcelWrite>(value: Option<MountType>, writer: &mut W) -> Result<()> {
        match value {
            Some(mount_type) => {
                writer.write_parcel_flag(true)?;
                writer.write_parcel_i32(mount_type.tag())
            }
            None => writer.write_parcel_flag(false),
        }
    }
}
