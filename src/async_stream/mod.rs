//! Async chunking (feature = "async-io").
//!
//! - [`chunk_async`] - Wraps a `futures_io::AsyncRead` into a chunk stream
//! - [`ChunkStream`] - `Stream<Item = Result<Chunk, ChunkError>>`

mod stream;

pub use stream::{ChunkStream, chunk_async};
