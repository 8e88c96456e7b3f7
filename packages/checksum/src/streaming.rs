//! Incremental digests over async chunk streams and `AsyncRead` sources

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::engine::{new_context, DigestContext};
use crate::radix::Radix;
use crate::{ChecksumError, DigestBytes, HashAlgorithm, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt};

pin_project! {
    /// Streaming hasher that absorbs each chunk as it arrives
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        algorithm: HashAlgorithm,
        context: Option<Box<dyn DigestContext>>,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Create a new streaming hasher for the specified algorithm
    pub fn new(input: S, algorithm: HashAlgorithm) -> Self {
        Self {
            input,
            algorithm,
            context: Some(new_context(algorithm)),
            total_bytes: 0,
        }
    }

    /// Algorithm this hasher feeds
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Progress item yielded by [`StreamingHasher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHashChunk {
    /// Bytes absorbed from this chunk
    pub bytes_processed: u64,
    /// Total bytes absorbed so far
    pub total_bytes: u64,
    /// Final digest, present only on the last item
    pub digest: Option<DigestBytes>,
}

impl StreamHashChunk {
    /// Whether this is the final item carrying the digest
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.digest.is_some()
    }
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = StreamHashChunk;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        let Some(context) = this.context.as_mut() else {
            return Poll::Ready(None);
        };

        match this.input.poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                context.update(&chunk);
                *this.total_bytes += chunk_size;

                Poll::Ready(Some(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    digest: None,
                }))
            }
            Poll::Ready(None) => {
                let digest = this
                    .context
                    .take()
                    .map(|context| DigestBytes::new(*this.algorithm, context.finalize()));
                tracing::debug!(algorithm = %this.algorithm, total_bytes = *this.total_bytes, "stream digest computed");

                Poll::Ready(Some(StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    digest,
                }))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Outcome of driving a [`StreamingHasher`] to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDigest {
    /// The final digest
    pub digest: DigestBytes,
    /// Total bytes processed
    pub total_bytes: u64,
}

/// Create a streaming hasher from any stream of byte chunks
pub fn stream_digest<S>(input: S, algorithm: HashAlgorithm) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input, algorithm)
}

/// Collect the final digest from a streaming hasher
///
/// # Errors
///
/// Returns `ChecksumError::StreamProcessing` if the hasher stops without
/// yielding its final item.
pub async fn collect_digest<S>(mut hasher: StreamingHasher<S>) -> Result<StreamDigest>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(chunk) = hasher.next().await {
        if let Some(digest) = chunk.digest {
            return Ok(StreamDigest {
                digest,
                total_bytes: chunk.total_bytes,
            });
        }
    }

    Err(ChecksumError::StreamProcessing(
        "stream ended without producing final digest".to_string(),
    ))
}

/// Hash everything an async reader yields
///
/// # Errors
///
/// Returns `ChecksumError::Read` if the reader fails.
pub async fn compute_digest_async<R>(algorithm: HashAlgorithm, reader: R) -> Result<DigestBytes>
where
    R: AsyncRead + Unpin,
{
    accumulate_async(algorithm, reader, DEFAULT_CHUNK_SIZE, "input stream").await
}

async fn accumulate_async<R>(
    algorithm: HashAlgorithm,
    mut reader: R,
    chunk_size: usize,
    origin: &str,
) -> Result<DigestBytes>
where
    R: AsyncRead + Unpin,
{
    if chunk_size == 0 {
        return Err(ChecksumError::invalid_parameters(
            "chunk size must be greater than zero",
        ));
    }

    let mut context = new_context(algorithm);
    let mut buffer = vec![0u8; chunk_size];
    let mut total_bytes: u64 = 0;

    loop {
        let read = reader.read(&mut buffer).await.map_err(|e| {
            tracing::warn!(%algorithm, origin, error = %e, "async read failed, digest aborted");
            ChecksumError::read_from(origin, e)
        })?;
        if read == 0 {
            break;
        }
        context.update(&buffer[..read]);
        total_bytes += read as u64;
    }

    tracing::debug!(%algorithm, origin, total_bytes, "digest computed");
    Ok(DigestBytes::new(algorithm, context.finalize()))
}

/// Hash the file at `path` through `tokio::fs`
///
/// # Errors
///
/// Returns `ChecksumError::Read` naming the path if it cannot be opened
/// or read.
pub async fn compute_file_digest_async(
    algorithm: HashAlgorithm,
    path: impl AsRef<Path>,
    chunk_size: usize,
) -> Result<DigestBytes> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| ChecksumError::read_from(origin.clone(), e))?;
    accumulate_async(algorithm, file, chunk_size, &origin).await
}

/// Resolve `algorithm`, hash the file at `path` asynchronously, render as hex
///
/// # Errors
///
/// Returns `ChecksumError::UnsupportedAlgorithm` before the file is
/// opened, or `ChecksumError::Read` if it cannot be opened or read.
pub async fn checksum_file_async(algorithm: &str, path: impl AsRef<Path>) -> Result<String> {
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    compute_file_digest_async(algorithm, path, DEFAULT_CHUNK_SIZE)
        .await
        .map(|digest| digest.to_radix(Radix::Hexadecimal))
}
