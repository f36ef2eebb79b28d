//! One-call entry points that chunk a whole source.
//!
//! Every function drives a fresh [`Chunker`] to the end of its input and
//! returns the complete chunk-length sequence. For the same bytes and
//! configuration they all return the same sequence.
//!
//! - [`chunk_from_buffer`] - In-memory bytes; only configuration errors
//! - [`chunk_from_reader`] - Any [`std::io::Read`]
//! - [`chunk_from_path`] - Opens and reads a file
//! - [`chunk_from_descriptor`] - Reads an already-open descriptor (unix)
//!
//! # Example
//!
//! ```
//! use rabinrs::{chunk_from_buffer, chunk_from_reader, ChunkConfig};
//!
//! let data = vec![7u8; 100_000];
//! let config = ChunkConfig::new(4095, 1024, 16 * 1024)?;
//!
//! let from_memory = chunk_from_buffer(&data, config)?;
//! let from_reader = chunk_from_reader(&data[..], config)?;
//! assert_eq!(from_memory, from_reader);
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::buffer::Buffer;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Chunks an in-memory buffer.
///
/// # Errors
///
/// Only [`ChunkError::InvalidConfig`]; no I/O takes place.
pub fn chunk_from_buffer(
    data: impl AsRef<[u8]>,
    config: ChunkConfig,
) -> Result<Vec<u64>, ChunkError> {
    let mut chunker = Chunker::new(config)?;
    chunker.feed(data)?;
    chunker.finalize()
}

/// Chunks everything a reader yields until end of input.
///
/// Reads interrupted by a signal are retried; any other read error aborts
/// and no partial length list is returned.
///
/// # Errors
///
/// [`ChunkError::InvalidConfig`] before reading, or [`ChunkError::Io`].
pub fn chunk_from_reader<R: Read>(
    mut reader: R,
    config: ChunkConfig,
) -> Result<Vec<u64>, ChunkError> {
    let mut chunker = Chunker::new(config)?;
    let mut buffer = Buffer::take();

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => chunker.feed(&buffer[..n])?,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    consumed = chunker.total_consumed(),
                    "read failed, chunking aborted"
                );
                return Err(e.into());
            }
        }
    }

    chunker.finalize()
}

/// Opens `path` and chunks the whole file.
///
/// # Errors
///
/// [`ChunkError::Io`] if the file cannot be opened or read (for example,
/// it does not exist), [`ChunkError::InvalidConfig`] for a bad config.
///
/// # Example
///
/// ```no_run
/// use rabinrs::{chunk_from_path, ChunkConfig};
///
/// let lengths = chunk_from_path("backup.tar", ChunkConfig::default())?;
/// println!("{} chunks", lengths.len());
/// # Ok::<(), rabinrs::ChunkError>(())
/// ```
pub fn chunk_from_path(
    path: impl AsRef<Path>,
    config: ChunkConfig,
) -> Result<Vec<u64>, ChunkError> {
    let path = path.as_ref();
    config.validate()?;

    tracing::debug!(path = %path.display(), "chunking file");
    let file = File::open(path)?;
    chunk_from_reader(file, config)
}

/// Chunks an already-open file descriptor from its current position to end
/// of input.
///
/// The descriptor is duplicated for reading; the caller keeps ownership and
/// it stays open. The file position is shared with the duplicate, so it ends
/// up at end of input.
///
/// # Errors
///
/// [`ChunkError::Io`] if the descriptor cannot be duplicated or read,
/// [`ChunkError::InvalidConfig`] for a bad config.
///
/// # Example
///
/// ```no_run
/// use std::os::fd::AsFd;
/// use rabinrs::{chunk_from_descriptor, ChunkConfig};
///
/// let stdin = std::io::stdin();
/// let lengths = chunk_from_descriptor(stdin.as_fd(), ChunkConfig::default())?;
/// # Ok::<(), rabinrs::ChunkError>(())
/// ```
#[cfg(unix)]
pub fn chunk_from_descriptor(
    fd: std::os::fd::BorrowedFd<'_>,
    config: ChunkConfig,
) -> Result<Vec<u64>, ChunkError> {
    use std::os::fd::AsRawFd;

    config.validate()?;

    tracing::debug!(fd = fd.as_raw_fd(), "chunking descriptor");
    let file = File::from(fd.try_clone_to_owned()?);
    chunk_from_reader(file, config)
}
