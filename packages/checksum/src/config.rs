//! Options shared by the synchronous and async accumulators

use crate::radix::Radix;
use crate::{ChecksumError, Result};
use serde::{Deserialize, Serialize};

/// Default read-buffer size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Chunking and output options for a checksum computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    /// Bytes requested per read; any positive value yields the same digest
    pub chunk_size: usize,
    /// Radix of the rendered checksum string
    pub radix: Radix,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            radix: Radix::Hexadecimal,
        }
    }
}

impl ChecksumConfig {
    /// Replace the chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Replace the output radix
    #[must_use]
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    /// Reject values the accumulator cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ChecksumError::InvalidParameters` for a zero chunk size.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChecksumError::invalid_parameters(
                "chunk size must be greater than zero",
            ));
        }
        Ok(())
    }
}
