//! Async stream adapter for chunking.
//!
//! Uses `futures_io::AsyncRead`, so it runs on tokio (through
//! `tokio_util::compat`), async-std, smol or any other futures runtime.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::chunker::Splitter;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Read size per poll.
const READ_SIZE: usize = 64 * 1024;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// Boundaries match [`crate::Chunker`] and [`crate::ChunkIter`] for the
    /// same bytes and configuration. After an I/O error the stream yields the
    /// error once and then ends.
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        splitter: Splitter,
        buffer: Box<[u8]>,
        finished: bool,
    }
}

impl<R: AsyncRead> ChunkStream<R> {
    /// Creates a new chunk stream from an async reader.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] for an invalid configuration.
    pub fn new(reader: R, config: ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self {
            reader,
            splitter: Splitter::new(&config),
            buffer: vec![0u8; READ_SIZE].into_boxed_slice(),
            finished: false,
        })
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(chunk) = this.splitter.next_ready() {
                return Poll::Ready(Some(Ok(chunk)));
            }

            if *this.finished {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(0)) => {
                    this.splitter.finish();
                    *this.finished = true;
                }
                Poll::Ready(Ok(n)) => this.splitter.absorb(&this.buffer[..n]),
                Poll::Ready(Err(e)) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(ChunkError::Io(e))));
                }
            }
        }
    }
}

/// Creates a chunk stream from an async reader.
///
/// For tokio readers, convert with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use rabinrs::{chunk_async, ChunkConfig};
///
/// let file = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(file.compat(), ChunkConfig::default())?;
/// ```
///
/// # Errors
///
/// Returns [`ChunkError::InvalidConfig`] for an invalid configuration.
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkConfig,
) -> Result<ChunkStream<R>, ChunkError> {
    ChunkStream::new(reader, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn config() -> ChunkConfig {
        ChunkConfig::new(63, 16, 256).unwrap()
    }

    #[tokio::test]
    async fn test_chunk_stream_empty() {
        let reader: &[u8] = &[];
        let chunks: Vec<_> = chunk_async(reader, config()).unwrap().collect().await;
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_chunk_stream_matches_session() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i * 37 % 239) as u8).collect();
        let reader: &[u8] = &data;

        let lengths: Vec<u64> = chunk_async(reader, config())
            .unwrap()
            .map(|c| c.map(|c| c.len() as u64))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(lengths, crate::chunk_from_buffer(&data, config()).unwrap());
    }

    #[tokio::test]
    #[cfg(feature = "hash-blake3")]
    async fn test_chunk_stream_with_hashes() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let cfg = config().with_hash_config(crate::config::HashConfig::enabled());

        let reader: &[u8] = &data;
        let chunks: Vec<_> = chunk_async(reader, cfg).unwrap().collect().await;

        for chunk in chunks {
            assert!(chunk.unwrap().hash.is_some());
        }
    }
}
