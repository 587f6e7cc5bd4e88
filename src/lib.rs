//! Reference test fixtures for the EIP-7594 cells and KZG proofs API.
//!
//! The cryptographic core is not part of this crate: implementations plug in
//! behind [`CellProver`] and are driven against the consensus-spec test
//! vectors by the functions in [`harness`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod test_formats;

#[cfg(feature = "std")]
pub mod harness;
#[cfg(feature = "std")]
pub use harness::CellProver;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_BLOB: usize = BYTES_PER_FIELD_ELEMENT * FIELD_ELEMENTS_PER_BLOB;
pub const FIELD_ELEMENTS_PER_CELL: usize = 64;
pub const BYTES_PER_CELL: usize = BYTES_PER_FIELD_ELEMENT * FIELD_ELEMENTS_PER_CELL;
pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PROOF: usize = 48;
pub const CELLS_PER_EXT_BLOB: usize = 128;

#[derive(Debug)]
pub enum Error {
    /// The string is not valid hexadecimal.
    InvalidHexString(String),
    /// Wrong number of bytes.
    InvalidBytesLength(String),
    /// Paired arguments have different lengths.
    MismatchLength(String),
}

/// Decodes a hex string, with or without a `0x` prefix, into bytes.
pub fn bytes_from_hex(hex_str: &str) -> Result<Vec<u8>, Error> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    hex::decode(hex_str).map_err(|e| Error::InvalidHexString(format!("{}", e)))
}

/// A blob of `FIELD_ELEMENTS_PER_BLOB` serialized field elements.
pub struct Blob {
    bytes: [u8; BYTES_PER_BLOB],
}

impl Blob {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != BYTES_PER_BLOB {
            return Err(Error::InvalidBytesLength(format!(
                "Invalid byte length. Expected {} got {}",
                BYTES_PER_BLOB,
                bytes.len(),
            )));
        }
        let mut new_bytes = [0; BYTES_PER_BLOB];
        new_bytes.copy_from_slice(bytes);
        Ok(Self { bytes: new_bytes })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, Error> {
        Self::from_bytes(&bytes_from_hex(hex_str)?)
    }
}

/// A single cell of extended blob data.
pub struct Cell {
    bytes: [u8; BYTES_PER_CELL],
}

impl Cell {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != BYTES_PER_CELL {
            return Err(Error::InvalidBytesLength(format!(
                "Invalid byte length. Expected {} got {}",
                BYTES_PER_CELL,
                bytes.len(),
            )));
        }
        let mut new_bytes = [0; BYTES_PER_CELL];
        new_bytes.copy_from_slice(bytes);
        Ok(Self { bytes: new_bytes })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, Error> {
        Self::from_bytes(&bytes_from_hex(hex_str)?)
    }
}

/// A 48-byte value, either a commitment or a proof in compressed G1 form.
pub struct Bytes48 {
    bytes: [u8; 48],
}

impl Bytes48 {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 48 {
            return Err(Error::InvalidBytesLength(format!(
                "Invalid byte length. Expected {} got {}",
                48,
                bytes.len(),
            )));
        }
        let mut new_bytes = [0; 48];
        new_bytes.copy_from_slice(bytes);
        Ok(Self { bytes: new_bytes })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, Error> {
        Self::from_bytes(&bytes_from_hex(hex_str)?)
    }

    pub fn into_inner(self) -> [u8; 48] {
        self.bytes
    }
}

impl From<[u8; BYTES_PER_BLOB]> for Blob {
    fn from(value: [u8; BYTES_PER_BLOB]) -> Self {
        Self { bytes: value }
    }
}

impl From<[u8; BYTES_PER_CELL]> for Cell {
    fn from(value: [u8; BYTES_PER_CELL]) -> Self {
        Self { bytes: value }
    }
}

impl From<[u8; 48]> for Bytes48 {
    fn from(value: [u8; 48]) -> Self {
        Self { bytes: value }
    }
}

use core::ops::Deref;

impl Deref for Blob {
    type Target = [u8; BYTES_PER_BLOB];
    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl Deref for Cell {
    type Target = [u8; BYTES_PER_CELL];
    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl Deref for Bytes48 {
    type Target = [u8; 48];
    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl Clone for Blob {
    fn clone(&self) -> Self {
        Blob { bytes: self.bytes }
    }
}

impl Clone for Cell {
    fn clone(&self) -> Self {
        Cell { bytes: self.bytes }
    }
}

impl Clone for Bytes48 {
    fn clone(&self) -> Self {
        Bytes48 { bytes: self.bytes }
    }
}
