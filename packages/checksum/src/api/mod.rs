//! Fluent checksum API
//!
//! Actions take data as arguments:
//! `Checksum::sha256().with_radix(Radix::Octal).compute_str("text")`

pub mod checksum_builder;
pub mod checksum_entry;

pub use checksum_builder::ChecksumBuilder;
pub use checksum_entry::Checksum;
