//! The Chunk type - one content-defined piece of a stream.

use bytes::Bytes;
use std::fmt;
use std::ops::Range;

use super::ChunkHash;

/// A content-defined chunk with metadata.
///
/// Produced by [`crate::ChunkIter`] and the async stream. The length
/// sequence of a stream's chunks is exactly what [`crate::Chunker`] reports.
///
/// # Example
///
/// ```
/// use rabinrs::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk {
///     data: Bytes::from_static(b"hello world"),
///     offset: 4096,
///     hash: None,
/// };
///
/// assert_eq!(chunk.range(), 4096..4107);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data.
    pub data: Bytes,

    /// Byte offset of the first byte in the stream.
    pub offset: u64,

    /// The BLAKE3 hash of the data (if computed).
    pub hash: Option<ChunkHash>,
}

impl Chunk {
    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.start() + self.data.len() as u64
    }

    /// Returns the byte range this chunk covers in the stream.
    pub fn range(&self) -> Range<u64> {
        self.start()..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {}", self.len(), self.offset)?;
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}
