//! Chunking sessions and iterators.
//!
//! - [`Chunker`] - Stateful session with `feed()`/`finalize()`, yields chunk lengths
//! - [`ChunkIter`] - Iterator of materialized chunks over a [`std::io::Read`]

mod engine;
mod iter;
mod splitter;

pub use engine::{Chunker, SessionState};
pub use iter::ChunkIter;
pub(crate) use splitter::Splitter;
