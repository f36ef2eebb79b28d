//! BLAKE3-based chunk hashing.

use crate::chunk::ChunkHash;

/// Hashes a complete chunk in one shot.
pub(crate) fn blake3_digest(data: &[u8]) -> ChunkHash {
    ChunkHash::new(blake3::hash(data).into())
}
