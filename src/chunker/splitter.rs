//! Turns fed bytes into owned [`Chunk`] values.
//!
//! Shared by the sync iterator and the async stream: both read into a buffer,
//! hand it to [`Splitter::absorb`], then drain ready chunks.

use std::collections::VecDeque;

use bytes::BytesMut;

use crate::cdc::RabinCdc;
use crate::chunk::{Chunk, ChunkHash};
use crate::config::ChunkConfig;

/// Boundary detection plus the bytes of the chunk currently being built.
#[derive(Debug)]
pub(crate) struct Splitter {
    cdc: RabinCdc,
    pending: BytesMut,
    ready: VecDeque<Chunk>,
    offset: u64,
    hash: bool,
}

impl Splitter {
    /// Creates a splitter. `config` must already be validated.
    pub(crate) fn new(config: &ChunkConfig) -> Self {
        Self {
            cdc: RabinCdc::new(config),
            pending: BytesMut::new(),
            ready: VecDeque::new(),
            offset: 0,
            hash: config.hash_config().enabled,
        }
    }

    /// Runs `data` through the fingerprint, queueing every completed chunk.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        while let Some(end) = self.cdc.find_boundary(data) {
            let (head, tail) = data.split_at(end);
            self.pending.extend_from_slice(head);
            self.emit();
            data = tail;
        }
        self.pending.extend_from_slice(data);
    }

    /// Queues the trailing partial chunk, if any.
    pub(crate) fn finish(&mut self) {
        if self.cdc.flush().is_some() {
            self.emit();
        }
    }

    /// Pops the oldest completed chunk.
    pub(crate) fn next_ready(&mut self) -> Option<Chunk> {
        self.ready.pop_front()
    }

    fn emit(&mut self) {
        let data = self.pending.split().freeze();
        let hash = if self.hash { digest(&data) } else { None };
        let offset = self.offset;
        self.offset += data.len() as u64;

        tracing::trace!(offset, len = data.len(), "chunk ready");
        self.ready.push_back(Chunk {
            data,
            offset,
            hash,
        });
    }
}

#[cfg(feature = "hash-blake3")]
fn digest(data: &[u8]) -> Option<ChunkHash> {
    Some(crate::hash::blake3_digest(data))
}

#[cfg(not(feature = "hash-blake3"))]
fn digest(_data: &[u8]) -> Option<ChunkHash> {
    None
}
