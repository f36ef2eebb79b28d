//! Rolling fingerprint and boundary decision.
//!
//! Each byte `b` enters the fingerprint as `b + 1` so that runs of zero
//! bytes still move it, and the byte that falls out of the window is removed
//! with one table lookup:
//!
//! ```text
//! fp = fp * prime + (b + 1) - table[oldest]      (mod 2^64)
//! ```
//!
//! A boundary is cut once more than `min_size` bytes are pending and either
//! the masked fingerprint equals [`BOUNDARY_TARGET`] or more than `max_size`
//! bytes are pending. Overflow is intended: only the low bits are tested.

use std::sync::Arc;

use super::Window;
use crate::config::{BOUNDARY_TARGET, ChunkConfig};
use crate::fingerprint::FingerprintTable;

/// Rolling fingerprint state.
///
/// Holds the window, the running fingerprint and the number of bytes since
/// the last boundary. The caller is expected to have validated the config.
///
/// # Example
///
/// ```ignore
/// let mut cdc = RabinCdc::new(&ChunkConfig::default());
///
/// for &byte in data {
///     if let Some(len) = cdc.roll(byte) {
///         println!("boundary after {len} bytes");
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RabinCdc {
    table: Arc<FingerprintTable>,
    window: Window,
    fingerprint: u64,
    current_len: u64,
    prime: u64,
    mask: u64,
    min_size: u64,
    max_size: u64,
}

impl RabinCdc {
    /// Creates a fresh state for `config`.
    pub fn new(config: &ChunkConfig) -> Self {
        Self {
            table: FingerprintTable::shared(config.prime(), config.window_size()),
            window: Window::new(config.window_size()),
            fingerprint: 0,
            current_len: 0,
            prime: config.prime(),
            mask: config.avg_mask(),
            min_size: config.min_size(),
            max_size: config.max_size(),
        }
    }

    /// Processes one byte. Returns the length of the chunk that ends at this
    /// byte, if a boundary was cut.
    #[inline]
    pub fn roll(&mut self, byte: u8) -> Option<u64> {
        let value = byte as u16 + 1;

        self.fingerprint = self
            .fingerprint
            .wrapping_mul(self.prime)
            .wrapping_add(value as u64);
        let oldest = self.window.replace_oldest(value);
        self.fingerprint = self.fingerprint.wrapping_sub(self.table.outgoing(oldest));

        self.current_len += 1;

        if self.current_len <= self.min_size {
            return None;
        }

        if (self.fingerprint & self.mask) == BOUNDARY_TARGET || self.current_len > self.max_size {
            return Some(std::mem::take(&mut self.current_len));
        }

        None
    }

    /// Processes a buffer and returns the offset just past the first
    /// boundary, or `None` if the buffer ends inside a chunk.
    pub fn find_boundary(&mut self, data: &[u8]) -> Option<usize> {
        data.iter()
            .position(|&byte| self.roll(byte).is_some())
            .map(|i| i + 1)
    }

    /// Takes the pending trailing length, if any. Window and fingerprint are
    /// left untouched.
    pub fn flush(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.current_len) {
            0 => None,
            len => Some(len),
        }
    }

    /// Returns the number of bytes since the last boundary.
    pub fn current_len(&self) -> u64 {
        self.current_len
    }

    /// Returns the current fingerprint.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Returns the table in use.
    #[allow(dead_code)]
    pub fn table(&self) -> &Arc<FingerprintTable> {
        &self.table
    }
}
