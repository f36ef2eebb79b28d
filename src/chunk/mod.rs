//! Chunk types.
//!
//! - [`Chunk`] - Materialized chunk with data, offset, hash
//! - [`ChunkHash`] - 32-byte BLAKE3 content hash

mod data;
mod hash;

pub use data::Chunk;
pub use hash::ChunkHash;
