//! Chunked digest accumulation over `std::io::Read` sources

use crate::config::{ChecksumConfig, DEFAULT_CHUNK_SIZE};
use crate::engine::new_context;
use crate::radix::Radix;
use crate::{ChecksumError, DigestBytes, HashAlgorithm, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Hash everything `reader` yields, reading [`DEFAULT_CHUNK_SIZE`] bytes at a time
///
/// # Errors
///
/// Returns `ChecksumError::Read` if the reader fails. The partial digest
/// state is discarded.
pub fn compute_digest<R: Read>(algorithm: HashAlgorithm, reader: R) -> Result<DigestBytes> {
    compute_digest_with_chunk_size(algorithm, reader, DEFAULT_CHUNK_SIZE)
}

/// Hash everything `reader` yields using reads of at most `chunk_size` bytes
///
/// # Errors
///
/// Returns `ChecksumError::InvalidParameters` for a zero chunk size and
/// `ChecksumError::Read` if the reader fails.
pub fn compute_digest_with_chunk_size<R: Read>(
    algorithm: HashAlgorithm,
    reader: R,
    chunk_size: usize,
) -> Result<DigestBytes> {
    accumulate(algorithm, reader, chunk_size, "input stream")
}

fn accumulate<R: Read>(
    algorithm: HashAlgorithm,
    mut reader: R,
    chunk_size: usize,
    origin: &str,
) -> Result<DigestBytes> {
    ChecksumConfig::default()
        .with_chunk_size(chunk_size)
        .validate()?;

    let mut context = new_context(algorithm);
    let mut buffer = vec![0u8; chunk_size];
    let mut total_bytes: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(%algorithm, origin, error = %e, "read failed, digest aborted");
                return Err(ChecksumError::read_from(origin, e));
            }
        };
        context.update(&buffer[..read]);
        total_bytes += read as u64;
    }

    let digest = DigestBytes::new(algorithm, context.finalize());
    tracing::debug!(%algorithm, origin, total_bytes, "digest computed");
    Ok(digest)
}

/// Hash the contents of the file at `path`
///
/// The file is closed before returning on every path.
///
/// # Errors
///
/// Returns `ChecksumError::Read` naming the path if it cannot be opened
/// or read.
pub fn compute_file_digest(
    algorithm: HashAlgorithm,
    path: impl AsRef<Path>,
    chunk_size: usize,
) -> Result<DigestBytes> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| {
        tracing::warn!(%algorithm, path = %origin, error = %e, "cannot open file");
        ChecksumError::read_from(origin.clone(), e)
    })?;
    accumulate(algorithm, file, chunk_size, &origin)
}

/// Hash the UTF-8 bytes of `text`
#[must_use]
pub fn compute_str_digest(algorithm: HashAlgorithm, text: &str) -> DigestBytes {
    let mut context = new_context(algorithm);
    context.update(text.as_bytes());
    DigestBytes::new(algorithm, context.finalize())
}

/// Resolve `algorithm`, hash `reader`, and render the digest as hex
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` before any read takes
/// place, or `ChecksumError::Read` if the reader fails.
pub fn checksum_reader<R: Read>(algorithm: &str, reader: R) -> Result<String> {
    checksum_reader_as(algorithm, reader, Radix::Hexadecimal)
}

/// As [`checksum_reader`] with a chosen output radix
///
/// # Errors
///
/// See [`checksum_reader`].
pub fn checksum_reader_as<R: Read>(algorithm: &str, reader: R, radix: Radix) -> Result<String> {
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    compute_digest(algorithm, reader).map(|digest| digest.to_radix(radix))
}

/// Resolve `algorithm`, hash the file at `path`, and render the digest as hex
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` before the file is
/// opened, or `ChecksumError::Read` if it cannot be opened or read.
pub fn checksum_file(algorithm: &str, path: impl AsRef<Path>) -> Result<String> {
    checksum_file_as(algorithm, path, Radix::Hexadecimal)
}

/// As [`checksum_file`] with a chosen output radix
///
/// # Errors
///
/// See [`checksum_file`].
pub fn checksum_file_as(algorithm: &str, path: impl AsRef<Path>, radix: Radix) -> Result<String> {
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    compute_file_digest(algorithm, path, DEFAULT_CHUNK_SIZE).map(|digest| digest.to_radix(radix))
}

/// Resolve `algorithm`, hash the UTF-8 bytes of `text`, and render as hex
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` for an unknown name.
pub fn checksum_str(algorithm: &str, text: &str) -> Result<String> {
    checksum_str_as(algorithm, text, Radix::Hexadecimal)
}

/// As [`checksum_str`] with a chosen output radix
///
/// # Errors
///
/// See [`checksum_str`].
pub fn checksum_str_as(algorithm: &str, text: &str, radix: Radix) -> Result<String> {
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    Ok(compute_str_digest(algorithm, text).to_radix(radix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Yields a few bytes, then fails
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "stream reset"));
            }
            self.served = true;
            buf[0] = b'x';
            Ok(1)
        }
    }

    /// Interrupts before every successful read
    struct InterruptingReader {
        inner: Cursor<Vec<u8>>,
        interrupt_next: bool,
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn read_failure_aborts_digest() {
        let result = compute_digest(HashAlgorithm::Sha256, FailingReader { served: false });
        match result {
            Err(ChecksumError::Read { origin, source }) => {
                assert_eq!(origin, "input stream");
                assert_eq!(source.kind(), ErrorKind::BrokenPipe);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn interrupted_reads_are_resumed() -> Result<()> {
        let data = b"interrupted but complete".to_vec();
        let reader = InterruptingReader {
            inner: Cursor::new(data.clone()),
            interrupt_next: false,
        };
        let interrupted = compute_digest_with_chunk_size(HashAlgorithm::Md5, reader, 4)?;
        let direct = compute_digest(HashAlgorithm::Md5, Cursor::new(data))?;
        assert_eq!(interrupted, direct);
        Ok(())
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let result = compute_digest_with_chunk_size(HashAlgorithm::Md5, Cursor::new(b"abc"), 0);
        assert!(matches!(result, Err(ChecksumError::InvalidParameters(_))));
    }

    #[test]
    fn str_digest_matches_reader_digest() -> Result<()> {
        for algorithm in HashAlgorithm::ALL {
            let text = "grüße, checksum";
            let from_reader = compute_digest(algorithm, Cursor::new(text.as_bytes()))?;
            assert_eq!(compute_str_digest(algorithm, text), from_reader);
        }
        Ok(())
    }

    #[test]
    fn unknown_algorithm_wins_over_missing_file() {
        let result = checksum_file("crc32", "/definitely/not/here");
        assert!(matches!(result, Err(ChecksumError::UnsupportedAlgorithm(_))));
    }
}
