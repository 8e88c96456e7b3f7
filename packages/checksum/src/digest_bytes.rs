//! Digest result type with radix encoding support

use crate::radix::{format_bytes, Radix};
use crate::HashAlgorithm;

/// Final digest of one hashing operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestBytes {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl DigestBytes {
    /// Wrap the raw output of `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.digest_len());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Render in the given radix
    #[must_use]
    pub fn to_radix(&self, radix: Radix) -> String {
        format_bytes(&self.bytes, radix)
    }

    /// Get the digest as a lower-case hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_radix(Radix::Hexadecimal)
    }

    /// Get the digest as a binary digit string
    #[must_use]
    pub fn to_binary(&self) -> String {
        self.to_radix(Radix::Binary)
    }

    /// Get the digest as an octal digit string
    #[must_use]
    pub fn to_octal(&self) -> String {
        self.to_radix(Radix::Octal)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<DigestBytes> for Vec<u8> {
    fn from(digest: DigestBytes) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for DigestBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for DigestBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
