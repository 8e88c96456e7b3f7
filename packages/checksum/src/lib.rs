//! Streaming checksum digests with fixed-width radix formatting
//!
//! Two usage styles are offered:
//!
//! ```
//! use cryypt_checksum::{checksum_str, Checksum, Radix};
//!
//! let hex = checksum_str("sha-256", "some.user@whatever.domain.makes.sense.com")?;
//! assert_eq!(hex, "8c87eca90374ba4248befe0c1a1e7ae5502f3e525be62f332a9392976967a7c2");
//!
//! let octal = Checksum::md5().with_radix(Radix::Octal).str_string("")?;
//! assert_eq!(octal.len(), 48);
//! # Ok::<(), cryypt_checksum::ChecksumError>(())
//! ```
//!
//! Strings are always hashed as their UTF-8 bytes.

#![forbid(unsafe_code)]

pub mod accumulator;
pub mod algorithm;
pub mod api;
pub mod config;
pub mod digest_bytes;
pub mod engine;
pub mod error;
pub mod provider;
pub mod radix;
pub mod streaming;

// Re-export error types
pub use error::{ChecksumError, Result};

pub use algorithm::{resolve_algorithm, HashAlgorithm};
pub use api::{Checksum, ChecksumBuilder};
pub use config::{ChecksumConfig, DEFAULT_CHUNK_SIZE};
pub use digest_bytes::DigestBytes;
pub use engine::{new_context, DigestContext};
pub use radix::{format_bytes, Radix};

pub use accumulator::{
    checksum_file, checksum_file_as, checksum_reader, checksum_reader_as, checksum_str,
    checksum_str_as, compute_digest, compute_digest_with_chunk_size, compute_file_digest,
    compute_str_digest,
};
pub use provider::{
    all_available_algorithms, available_algorithms, CryptoProvider, RustCryptoProvider, Service,
    ServiceCategory,
};
pub use streaming::{
    checksum_file_async, collect_digest, compute_digest_async, stream_digest, StreamDigest,
    StreamingHasher,
};
