//! Parcel envelope primitives
//!
//! A parcel is the ordered-field envelope used to move records across a
//! process or component boundary. Slots carry no field tags: the reader
//! must consume exactly the slots the writer produced, in the same order.
//! This module implements the typed slot primitives; the field order of a
//! given record is documented (and owned) by the record itself.

use crate::error::Result;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Strings above this length are rejected as corrupt rather than allocated.
const MAX_STRING_LENGTH: u64 = 1_048_576;

/// ParcelRead provides methods for reading parcel slot primitives
pub trait ParcelRead: Read {
    /// Read a presence flag (1 byte: 00 or 01)
    fn read_parcel_flag(&mut self) -> Result<bool> {
        let byte = self.read_u8()?;
        match byte {
            0x00 => Ok(false),
            0x01 => Ok(true),
            _ => Err(crate::error::Error::ParseError),
        }
    }

    /// Read a 32-bit signed integer (network byte order)
    fn read_parcel_i32(&mut self) -> Result<i32> {
        Ok(self.read_i32::<BigEndian>()?)
    }

    /// Read a 64-bit signed integer (network byte order)
    fn read_parcel_i64(&mut self) -> Result<i64> {
        Ok(self.read_i64::<BigEndian>()?)
    }

    /// Read a nullable string slot with bounds checking
    /// Format: 1 byte (isNotNull flag) + if not null: 8-byte length + UTF-8 data
    fn read_parcel_string(&mut self) -> Result<Option<String>> {
        if !self.read_parcel_flag()? {
            return Ok(None);
        }

        let length = self.read_u64::<BigEndian>()?;
        if length > MAX_STRING_LENGTH {
            return Err(crate::error::Error::ParseError);
        }

        if length == 0 {
            return Ok(Some(String::new()));
        }

        let mut buffer = vec![0u8; length as usize];
        self.read_exact(&mut buffer)?;
        Ok(Some(String::from_utf8(buffer)?))
    }
}

// Implement ParcelRead for any type that implements Read
impl<R: Read> ParcelRead for R {}

/// ParcelWrite provides methods for writing parcel slot primitives
pub trait ParcelWrite: Write {
    /// Write a presence flag (1 byte: 00 or 01)
    fn write_parcel_flag(&mut self, present: bool) -> Result<()> {
        self.write_u8(if present { 0x01 } else { 0x00 })?;
        Ok(())
    }

    /// Write a 32-bit signed integer (network byte order)
    fn write_parcel_i32(&mut self, value: i32) -> Result<()> {
        self.write_i32::<BigEndian>(value)?;
        Ok(())
    }

    /// Write a 64-bit signed integer (network byte order)
    fn write_parcel_i64(&mut self, value: i64) -> Result<()> {
        self.write_i64::<BigEndian>(value)?;
        Ok(())
    }

    /// Write a nullable string slot, mirroring `read_parcel_string`
    fn write_parcel_string(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(string) => {
                self.write_parcel_flag(true)?;
                self.write_u64::<BigEndian>(string.len() as u64)?;
                self.write_all(string.as_bytes())?;
            }
            None => self.write_parcel_flag(false)?,
        }
        Ok(())
    }
}

// Implement ParcelWrite for any type that implements Write
impl<W: Write> ParcelWrite for W {}
