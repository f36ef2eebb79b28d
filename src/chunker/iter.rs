//! Iterator over materialized chunks from a [`std::io::Read`] source.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use rabinrs::{ChunkConfig, ChunkIter};
//!
//! let file = File::open("data.bin")?;
//!
//! for chunk in ChunkIter::new(file, ChunkConfig::default())? {
//!     let chunk = chunk?;
//!     println!("Chunk: {} bytes @ {}", chunk.len(), chunk.start());
//! }
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```

use std::io::{ErrorKind, Read};

use super::Splitter;
use crate::buffer::Buffer;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// An iterator that yields chunks from a reader.
///
/// Boundaries are exactly those a [`crate::Chunker`] reports for the same
/// bytes and configuration; each item additionally carries the chunk data,
/// its stream offset and, if enabled, a BLAKE3 hash.
///
/// The reader is pulled lazily through a pooled 64 KiB buffer. After an I/O
/// error the iterator yields the error once and then ends.
pub struct ChunkIter<R> {
    reader: R,
    splitter: Splitter,
    buffer: Buffer,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    /// Creates a new chunk iterator.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] for an invalid configuration.
    pub fn new(reader: R, config: ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self {
            reader,
            splitter: Splitter::new(&config),
            buffer: Buffer::take(),
            finished: false,
        })
    }

    /// Consumes the iterator, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunk) = self.splitter.next_ready() {
                return Some(Ok(chunk));
            }

            if self.finished {
                return None;
            }

            match self.reader.read(&mut self.buffer) {
                Ok(0) => {
                    self.splitter.finish();
                    self.finished = true;
                }
                Ok(n) => self.splitter.absorb(&self.buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashConfig;
    use std::io::Cursor;

    fn config() -> ChunkConfig {
        ChunkConfig::new(63, 16, 256).unwrap()
    }

    #[test]
    fn test_iter_empty() {
        let chunks: Vec<_> = ChunkIter::new(Cursor::new(Vec::new()), config())
            .unwrap()
            .collect();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_iter_small_data() {
        let chunks = ChunkIter::new(Cursor::new(vec![0xAAu8; 3]), config())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 3);
        assert_eq!(chunks[0].offset, 0);
    }

    #[test]
    fn test_iter_matches_session() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i * 7919 % 257) as u8).collect();

        let mut chunker = crate::Chunker::new(config()).unwrap();
        chunker.feed(&data).unwrap();
        let expected = chunker.finalize().unwrap();

        let lengths: Vec<u64> = ChunkIter::new(Cursor::new(&data), config())
            .unwrap()
            .map(|c| c.map(|c| c.len() as u64))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(lengths, expected);
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_iter_with_hashes() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let cfg = config().with_hash_config(HashConfig::enabled());

        for chunk in ChunkIter::new(Cursor::new(&data), cfg).unwrap() {
            assert!(chunk.unwrap().hash.is_some());
        }
    }

    #[test]
    fn test_iter_without_hashes() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let cfg = config().with_hash_config(HashConfig::disabled());

        for chunk in ChunkIter::new(Cursor::new(&data), cfg).unwrap() {
            assert!(chunk.unwrap().hash.is_none());
        }
    }

    #[test]
    fn test_iter_read_error() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let mut iter = ChunkIter::new(Failing, config()).unwrap();
        assert!(matches!(iter.next(), Some(Err(ChunkError::Io(_)))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_invalid_config() {
        let cfg = config().with_prime(0);
        assert!(ChunkIter::new(Cursor::new(Vec::new()), cfg).is_err());
    }
}
