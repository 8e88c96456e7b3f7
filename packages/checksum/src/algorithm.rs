//! Supported hash algorithms and case-insensitive name resolution

use crate::{ChecksumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of digest algorithms backed by the RustCrypto engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    /// MD5, 128-bit digest
    Md5,
    /// SHA-256, 256-bit digest
    Sha256,
    /// SHA-512, 512-bit digest
    Sha512,
    /// SHA3-256, 256-bit digest
    Sha3_256,
    /// SHA3-512, 512-bit digest
    Sha3_512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in declaration order
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
    ];

    /// Canonical engine name, e.g. `"SHA-256"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 => 64,
        }
    }

    /// Resolve a name case-insensitively against the canonical names
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::UnsupportedAlgorithm` carrying `name` when
    /// nothing matches.
    pub fn resolve(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                tracing::warn!(requested = name, "unknown hash algorithm");
                ChecksumError::UnsupportedAlgorithm(name.to_string())
            })
    }
}

/// Resolve a hash algorithm from its case-insensitive canonical name
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` when `name` is unknown.
pub fn resolve_algorithm(name: &str) -> Result<HashAlgorithm> {
    HashAlgorithm::resolve(name)
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = ChecksumError;

    fn try_from(value: String) -> Result<Self> {
        Self::resolve(&value)
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}
