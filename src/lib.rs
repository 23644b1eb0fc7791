//! # nimbus
//!
//! Library to work with the client-side data model of the Nimbus
//! cloud-storage service.
//!
//! The central type is [`remote_file::RemoteFile`], the metadata snapshot
//! of one remote file or directory. Records are built from
//! directory-listing entries ([`entry::DirectoryEntry`]) or from a
//! validated path, and move across component boundaries through the
//! ordered-field parcel envelope ([`parcel`]).

pub mod entry;
pub mod error;
pub mod mount;
pub mod parcel;
pub mod remote_file;

pub use crate::entry::DirectoryEntry;
pub use crate::error::{Error, Result};
pub use crate::mount::MountType;
pub use crate::remote_file::{RemoteFile, MIME_TYPE_DIRECTORY, PATH_SEPARATOR};
