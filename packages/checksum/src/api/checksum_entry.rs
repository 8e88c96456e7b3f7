//! Entry point for checksum operations

use super::ChecksumBuilder;
use crate::{HashAlgorithm, Result};

/// Entry point for checksum operations
pub struct Checksum;

impl Checksum {
    /// Use MD5
    #[must_use]
    pub fn md5() -> ChecksumBuilder {
        ChecksumBuilder::new(HashAlgorithm::Md5)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> ChecksumBuilder {
        ChecksumBuilder::new(HashAlgorithm::Sha256)
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512() -> ChecksumBuilder {
        ChecksumBuilder::new(HashAlgorithm::Sha512)
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256() -> ChecksumBuilder {
        ChecksumBuilder::new(HashAlgorithm::Sha3_256)
    }

    /// Use SHA3-512
    #[must_use]
    pub fn sha3_512() -> ChecksumBuilder {
        ChecksumBuilder::new(HashAlgorithm::Sha3_512)
    }

    /// Use an already resolved algorithm
    #[must_use]
    pub fn algorithm(algorithm: HashAlgorithm) -> ChecksumBuilder {
        ChecksumBuilder::new(algorithm)
    }

    /// Resolve a case-insensitive canonical name, e.g. `"sha3-256"`
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::UnsupportedAlgorithm` when the name is unknown.
    pub fn named(name: &str) -> Result<ChecksumBuilder> {
        HashAlgorithm::resolve(name).map(ChecksumBuilder::new)
    }
}
