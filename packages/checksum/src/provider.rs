//! Provider introspection over the static engine table

use crate::{ChecksumError, HashAlgorithm};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Kind of service a provider advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    /// Unkeyed message digests
    MessageDigest,
    /// Keyed message authentication codes
    Mac,
}

impl ServiceCategory {
    /// Category name as advertised by providers
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ServiceCategory::MessageDigest => "MessageDigest",
            ServiceCategory::Mac => "Mac",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceCategory {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ServiceCategory::MessageDigest, ServiceCategory::Mac]
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChecksumError::invalid_parameters(format!("unknown service category '{s}'")))
    }
}

/// One algorithm offered under one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Service {
    /// Category the service belongs to
    pub category: ServiceCategory,
    /// Algorithm name as the provider spells it
    pub algorithm: &'static str,
}

/// Source of algorithm services
pub trait CryptoProvider {
    /// Provider name
    fn name(&self) -> &str;

    /// Every service this provider exposes
    fn services(&self) -> &[Service];
}

const fn digest_service(algorithm: HashAlgorithm) -> Service {
    Service {
        category: ServiceCategory::MessageDigest,
        algorithm: algorithm.name(),
    }
}

static RUST_CRYPTO_SERVICES: [Service; 5] = [
    digest_service(HashAlgorithm::Md5),
    digest_service(HashAlgorithm::Sha256),
    digest_service(HashAlgorithm::Sha512),
    digest_service(HashAlgorithm::Sha3_256),
    digest_service(HashAlgorithm::Sha3_512),
];

/// Built-in provider backed by the RustCrypto hash engines
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl CryptoProvider for RustCryptoProvider {
    fn name(&self) -> &str {
        "RustCrypto"
    }

    fn services(&self) -> &[Service] {
        &RUST_CRYPTO_SERVICES
    }
}

/// Installed providers
#[must_use]
pub fn providers() -> Vec<Box<dyn CryptoProvider>> {
    vec![Box::new(RustCryptoProvider)]
}

/// Algorithm names `provider` exposes for `category`
pub fn available_algorithms<P>(provider: &P, category: ServiceCategory) -> BTreeSet<String>
where
    P: CryptoProvider + ?Sized,
{
    provider
        .services()
        .iter()
        .filter(|service| service.category == category)
        .map(|service| service.algorithm.to_string())
        .collect()
}

/// Union of [`available_algorithms`] across every installed provider
#[must_use]
pub fn all_available_algorithms(category: ServiceCategory) -> BTreeSet<String> {
    providers()
        .iter()
        .flat_map(|provider| available_algorithms(provider.as_ref(), category))
        .collect()
}
