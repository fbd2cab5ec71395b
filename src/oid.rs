//! # Object Identifier
//!
//! This module defines the fixed-size object identifier used as the map key.
//!
//! ## Format
//!
//! ```text
//! Oid:
//!   [raw: 20 bytes]   (rendered as 40 lowercase hex characters)
//! ```
//!
//! ## Ordering
//!
//! Oids are ordered byte-wise, which for a fixed-size big-endian identifier
//! is the same as unsigned numeric order. The first [`Oid::PREFIX_LEN`] bytes
//! select the table slot; the remaining bytes order entries within a bucket.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A fixed-size 20-byte object identifier.
///
/// Identifiers are content hashes and therefore uniformly distributed; the
/// map exploits this by dispatching on the leading two bytes directly rather
/// than hashing.
///
/// # Example
///
/// ```rust
/// use oidmap::Oid;
///
/// let oid = Oid::from_hex("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")?;
/// assert_eq!(oid.to_hex(), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
/// # Ok::<(), oidmap::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oid([u8; Oid::RAW_SIZE]);

impl Oid {
    /// The number of raw bytes in an identifier.
    pub const RAW_SIZE: usize = 20;

    /// The number of characters in the hexadecimal rendering.
    pub const HEX_SIZE: usize = Self::RAW_SIZE * 2;

    /// The number of leading bytes consumed by table-slot selection.
    ///
    /// These bytes are never re-compared inside a bucket: two oids in the
    /// same bucket always agree on them.
    pub const PREFIX_LEN: usize = 2;

    /// Creates an identifier from a raw byte array.
    pub const fn new(raw: [u8; Self::RAW_SIZE]) -> Self {
        Self(raw)
    }

    /// Creates an identifier from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice is not exactly
    /// [`Oid::RAW_SIZE`] bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; Self::RAW_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: Self::RAW_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    /// Parses an identifier from a 40-character hexadecimal string.
    ///
    /// Both lowercase and uppercase digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the input is not exactly
    /// [`Oid::HEX_SIZE`] characters, or [`Error::InvalidHex`] on the first
    /// non-hexadecimal byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oidmap::Oid;
    ///
    /// let oid = Oid::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709")?;
    /// assert_eq!(oid.as_bytes()[0], 0xda);
    /// # Ok::<(), oidmap::Error>(())
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != Self::HEX_SIZE {
            return Err(Error::InvalidLength {
                expected: Self::HEX_SIZE,
                actual: bytes.len(),
            });
        }

        let mut raw = [0u8; Self::RAW_SIZE];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            raw[i] = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Ok(Self(raw))
    }

    /// Returns the lowercase hexadecimal rendering of this identifier.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Returns the raw bytes of this identifier.
    pub fn as_bytes(&self) -> &[u8; Self::RAW_SIZE] {
        &self.0
    }

    /// Returns the table slot this identifier dispatches to.
    ///
    /// The slot is the big-endian value of the leading [`Oid::PREFIX_LEN`]
    /// bytes, so ascending slot order is ascending prefix order.
    pub(crate) fn table_index(&self) -> usize {
        u16::from_be_bytes([self.0[0], self.0[1]]) as usize
    }

    /// Returns the bytes after the table prefix.
    ///
    /// Bucket ordering compares only these bytes; the prefix is already
    /// fixed by bucket placement.
    pub(crate) fn trailing(&self) -> &[u8] {
        &self.0[Self::PREFIX_LEN..]
    }
}

/// Decodes a single hexadecimal digit.
fn hex_digit(byte: u8) -> Result<u8> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(Error::InvalidHex { byte }),
    }
}

impl From<[u8; Oid::RAW_SIZE]> for Oid {
    fn from(raw: [u8; Oid::RAW_SIZE]) -> Self {
        Self(raw)
    }
}

impl AsRef<[u8]> for Oid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}
