//! Checksum builder carrying the algorithm and accumulation options

use crate::accumulator::{compute_digest_with_chunk_size, compute_file_digest};
use crate::config::ChecksumConfig;
use crate::radix::Radix;
use crate::streaming::compute_file_digest_async;
use crate::{DigestBytes, HashAlgorithm, Result};
use std::io::Read;
use std::path::Path;

/// Checksum builder for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumBuilder {
    algorithm: HashAlgorithm,
    config: ChecksumConfig,
}

impl ChecksumBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            config: ChecksumConfig::default(),
        }
    }

    /// Algorithm this builder hashes with
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Read buffer size in bytes
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Radix used by the `*_string` actions
    #[must_use]
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.config.radix = radix;
        self
    }

    /// Replace all options at once
    #[must_use]
    pub fn with_config(mut self, config: ChecksumConfig) -> Self {
        self.config = config;
        self
    }

    /// Hash an in-memory byte buffer
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::InvalidParameters` for a zero chunk size.
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> Result<DigestBytes> {
        self.compute_reader(data.as_ref())
    }

    /// Hash everything `reader` yields
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::Read` if the reader fails.
    pub fn compute_reader<R: Read>(&self, reader: R) -> Result<DigestBytes> {
        compute_digest_with_chunk_size(self.algorithm, reader, self.config.chunk_size)
    }

    /// Hash the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::Read` if the file cannot be opened or read.
    pub fn compute_file(&self, path: impl AsRef<Path>) -> Result<DigestBytes> {
        compute_file_digest(self.algorithm, path, self.config.chunk_size)
    }

    /// Hash the UTF-8 bytes of `text`
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::InvalidParameters` for a zero chunk size.
    pub fn compute_str(&self, text: &str) -> Result<DigestBytes> {
        self.compute(text.as_bytes())
    }

    /// Hash the file at `path` through `tokio::fs`
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::Read` if the file cannot be opened or read.
    pub async fn compute_file_async(&self, path: impl AsRef<Path>) -> Result<DigestBytes> {
        compute_file_digest_async(self.algorithm, path, self.config.chunk_size).await
    }

    /// Hash `text` and render it in the configured radix
    ///
    /// # Errors
    ///
    /// See [`ChecksumBuilder::compute_str`].
    pub fn str_string(&self, text: &str) -> Result<String> {
        self.compute_str(text).map(|digest| digest.to_radix(self.config.radix))
    }

    /// Hash the file at `path` and render it in the configured radix
    ///
    /// # Errors
    ///
    /// See [`ChecksumBuilder::compute_file`].
    pub fn file_string(&self, path: impl AsRef<Path>) -> Result<String> {
        self.compute_file(path)
            .map(|digest| digest.to_radix(self.config.radix))
    }
}
