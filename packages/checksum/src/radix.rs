//! Fixed-width radix rendering of byte sequences

use crate::{ChecksumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Numeral base for rendering digest bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 2, eight digits per byte
    #[serde(alias = "bin")]
    Binary,
    /// Base 8, three digits per byte
    #[serde(alias = "oct")]
    Octal,
    /// Base 16, two lower-case digits per byte
    #[default]
    #[serde(rename = "hex", alias = "hexadecimal")]
    Hexadecimal,
}

impl Radix {
    /// Numeric base
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hexadecimal => 16,
        }
    }

    /// Width of the zero-padded digit group for one byte
    #[must_use]
    pub const fn digits_per_byte(self) -> usize {
        match self {
            Radix::Binary => 8,
            Radix::Octal => 3,
            Radix::Hexadecimal => 2,
        }
    }

    /// Length of the rendering of `byte_count` bytes
    #[must_use]
    pub const fn encoded_len(self, byte_count: usize) -> usize {
        byte_count * self.digits_per_byte()
    }
}

impl TryFrom<u32> for Radix {
    type Error = ChecksumError;

    fn try_from(base: u32) -> Result<Self> {
        match base {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(ChecksumError::UnsupportedRadix(other)),
        }
    }
}

/// Render every byte as a zero-padded digit group, first byte first
#[must_use]
pub fn format_bytes(bytes: &[u8], radix: Radix) -> String {
    let mut out = String::with_capacity(radix.encoded_len(bytes.len()));
    for &byte in bytes {
        // Writing into a String cannot fail.
        let _ = match radix {
            Radix::Binary => write!(out, "{byte:08b}"),
            Radix::Octal => write!(out, "{byte:03o}"),
            Radix::Hexadecimal => write!(out, "{byte:02x}"),
        };
    }
    out
}

/// Render bytes in a numeric base
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedRadix` unless `base` is 2, 8 or 16.
pub fn format_bytes_in_base(bytes: &[u8], base: u32) -> Result<String> {
    Radix::try_from(base).map(|radix| format_bytes(bytes, radix))
}

/// Lower-case hexadecimal rendering
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    format_bytes(bytes, Radix::Hexadecimal)
}

/// Binary rendering
#[must_use]
pub fn to_binary(bytes: &[u8]) -> String {
    format_bytes(bytes, Radix::Binary)
}

/// Octal rendering
#[must_use]
pub fn to_octal(bytes: &[u8]) -> String {
    format_bytes(bytes, Radix::Octal)
}
