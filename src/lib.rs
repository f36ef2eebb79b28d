//! rabinrs
//!
//! Streaming Content-Defined Chunking (CDC) with a rolling Rabin-style
//! fingerprint.
//!
//! `rabinrs` splits a byte stream at boundaries chosen by its content, so a
//! run of bytes is cut the same way wherever it appears in the stream. That
//! is the primitive behind:
//!
//! - deduplicating storage
//! - backup systems
//! - delta synchronization
//!
//! The crate intentionally:
//! - does NOT store or deduplicate chunks
//! - does NOT persist any index or manifest
//! - does NOT manage concurrency
//!
//! It only does one thing: **bytes in → chunk boundaries out**
//!
//! # Streaming session
//!
//! ```
//! use rabinrs::{Chunker, ChunkConfig};
//!
//! let mut chunker = Chunker::new(ChunkConfig::default())?;
//! chunker.feed(vec![0u8; 300_000])?;
//! chunker.feed(b"tail")?;
//!
//! let lengths = chunker.finalize()?;
//! assert_eq!(lengths.iter().sum::<u64>(), 300_004);
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```
//!
//! # Whole sources
//!
//! ```no_run
//! use rabinrs::{chunk_from_path, ChunkConfig};
//!
//! let lengths = chunk_from_path("data.bin", ChunkConfig::default())?;
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```
//!
//! # Chunk data and hashes
//!
//! ```no_run
//! use std::fs::File;
//! use rabinrs::{ChunkConfig, ChunkIter};
//!
//! for chunk in ChunkIter::new(File::open("data.bin")?, ChunkConfig::default())? {
//!     let chunk = chunk?;
//!     println!("{}", chunk);
//! }
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdc;
mod chunk;
mod chunker;
mod config;
mod error;
mod fingerprint;
mod source;

mod buffer; // internal (thread-local reuse)
mod hash; // internal blake3 impl

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use chunk::{Chunk, ChunkHash};
pub use chunker::{ChunkIter, Chunker, SessionState};
pub use config::{
    BOUNDARY_TARGET, ChunkConfig, DEFAULT_AVG_MASK, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE,
    DEFAULT_PRIME, DEFAULT_WINDOW_SIZE, HashConfig,
};
pub use error::ChunkError;
pub use fingerprint::FingerprintTable;
pub use source::{chunk_from_buffer, chunk_from_path, chunk_from_reader};

#[cfg(unix)]
pub use source::chunk_from_descriptor;

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
