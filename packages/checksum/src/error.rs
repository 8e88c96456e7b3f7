//! Error handling for checksum computation

use std::io;
use thiserror::Error;

/// Errors raised while resolving an algorithm or computing a checksum
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The requested algorithm name matches no supported algorithm
    #[error("No algorithm matching '{0}' in the supported hash algorithms")]
    UnsupportedAlgorithm(String),

    /// The byte source could not be opened or read
    #[error("Failed to read {origin}: {source}")]
    Read {
        /// Path of the file, or a description of the stream
        origin: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Radix outside of {2, 8, 16}
    #[error("Unsupported radix: {0} (expected 2, 8 or 16)")]
    UnsupportedRadix(u32),

    /// A stream ended without yielding its final digest
    #[error("Stream processing error: {0}")]
    StreamProcessing(String),

    /// Rejected configuration value, such as a zero chunk size
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl ChecksumError {
    /// Read error on an anonymous input stream
    #[must_use]
    pub fn read(source: io::Error) -> Self {
        Self::Read {
            origin: "input stream".to_string(),
            source,
        }
    }

    /// Read error on a named origin, usually a file path
    #[must_use]
    pub fn read_from(origin: impl Into<String>, source: io::Error) -> Self {
        Self::Read {
            origin: origin.into(),
            source,
        }
    }

    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// True for [`ChecksumError::Read`]
    #[must_use]
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// True for [`ChecksumError::UnsupportedAlgorithm`]
    #[must_use]
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Self::UnsupportedAlgorithm(_))
    }
}

/// Result type for checksum operations
pub type Result<T> = std::result::Result<T, ChecksumError>;
