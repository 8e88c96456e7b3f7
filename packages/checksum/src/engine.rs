//! Hash engine seam over the RustCrypto digest implementations
//!
//! Every supported algorithm maps to a constructor in a static table, so
//! the engine set is fixed at compile time.

use crate::{HashAlgorithm, Result};
use digest::Digest;
use md5::Md5;
use sha2::{Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

/// Incremental digest context owned by a single hashing operation
pub trait DigestContext: Send {
    /// Absorb the next run of input bytes
    fn update(&mut self, data: &[u8]);

    /// Consume the context and return the digest bytes
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Digest length in bytes
    fn output_len(&self) -> usize;
}

impl<D> DigestContext for D
where
    D: Digest + Send,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(*self).to_vec()
    }

    fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }
}

/// Constructor for a fresh, boxed digest context
pub type ContextConstructor = fn() -> Box<dyn DigestContext>;

fn boxed<D>() -> Box<dyn DigestContext>
where
    D: Digest + Send + 'static,
{
    Box::new(D::new())
}

/// Engine constructor for `algorithm`
#[must_use]
pub fn constructor(algorithm: HashAlgorithm) -> ContextConstructor {
    match algorithm {
        HashAlgorithm::Md5 => boxed::<Md5>,
        HashAlgorithm::Sha256 => boxed::<Sha256>,
        HashAlgorithm::Sha512 => boxed::<Sha512>,
        HashAlgorithm::Sha3_256 => boxed::<Sha3_256>,
        HashAlgorithm::Sha3_512 => boxed::<Sha3_512>,
    }
}

/// The full engine table: each supported algorithm with its constructor
pub fn engines() -> impl Iterator<Item = (HashAlgorithm, ContextConstructor)> {
    HashAlgorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, constructor(algorithm)))
}

/// Fresh digest context for `algorithm`
#[must_use]
pub fn new_context(algorithm: HashAlgorithm) -> Box<dyn DigestContext> {
    constructor(algorithm)()
}

/// Fresh digest context for a case-insensitive algorithm name
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` when the name is unknown.
pub fn new_context_by_name(name: &str) -> Result<Box<dyn DigestContext>> {
    HashAlgorithm::resolve(name).map(new_context)
}
