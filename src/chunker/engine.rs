//! Core chunking session - Chunker with `feed()`/`finalize()` API.
//!
//! - [`Chunker`] - Stateful session that consumes bytes and records chunk lengths
//! - `feed()` - Hand over data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finalize()` - Flush the trailing chunk and get the complete length list
//!
//! # Example
//!
//! ```
//! use rabinrs::{Chunker, ChunkConfig};
//!
//! let mut chunker = Chunker::new(ChunkConfig::default())?;
//!
//! chunker.feed(b"first")?;
//! chunker.feed(b"second")?;
//!
//! let lengths = chunker.finalize()?;
//! assert_eq!(lengths, vec![11]);
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```

use crate::cdc::RabinCdc;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Lifecycle state of a [`Chunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input.
    Open,
    /// `finalize()` has run; the length list is complete.
    Finalized,
}

/// A streaming session that turns bytes into content-defined chunk lengths.
///
/// `Chunker` keeps the rolling fingerprint across calls, so the boundaries
/// depend only on the concatenated input and never on how it was split
/// between `feed()` calls. Memory use of the rolling state is bounded by the
/// window length; only the list of emitted lengths grows.
///
/// # Invariants
///
/// - `lengths().iter().sum() + current_length() == total_consumed()`
/// - every emitted length is non-zero
/// - once finalized, `feed()` and `finalize()` return
///   [`ChunkError::Finalized`]
///
/// # Example
///
/// ```
/// use rabinrs::{Chunker, ChunkConfig};
///
/// let config = ChunkConfig::new(255, 64, 1024)?;
/// let mut chunker = Chunker::new(config)?;
///
/// let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 253) as u8).collect();
/// for piece in data.chunks(1000) {
///     chunker.feed(piece)?;
/// }
///
/// let lengths = chunker.finalize()?;
/// assert_eq!(lengths.iter().sum::<u64>(), 10_000);
/// # Ok::<(), rabinrs::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    cdc: RabinCdc,
    emitted: Vec<u64>,
    total_consumed: u64,
    state: SessionState,
    config: ChunkConfig,
}

impl Chunker {
    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if the configuration does not
    /// pass [`ChunkConfig::validate`]. Nothing is allocated in that case.
    pub fn new(config: ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;

        tracing::debug!(
            prime = config.prime(),
            window_size = config.window_size(),
            avg_mask = config.avg_mask(),
            min_size = config.min_size(),
            max_size = config.max_size(),
            "chunker session created"
        );

        Ok(Self::open(config))
    }

    fn open(config: ChunkConfig) -> Self {
        Self {
            cdc: RabinCdc::new(&config),
            emitted: Vec::new(),
            total_consumed: 0,
            state: SessionState::Open,
            config,
        }
    }

    /// Feeds the next piece of the stream.
    ///
    /// Any size is accepted, including empty input. Boundaries found while
    /// processing are appended to [`Chunker::lengths`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::Finalized`] if the session was finalized.
    pub fn feed(&mut self, data: impl AsRef<[u8]>) -> Result<(), ChunkError> {
        self.ensure_open("feed")?;

        for &byte in data.as_ref() {
            self.total_consumed += 1;
            if let Some(len) = self.cdc.roll(byte) {
                tracing::trace!(len, end = self.total_consumed, "chunk boundary");
                self.emitted.push(len);
            }
        }

        Ok(())
    }

    /// Ends the stream and returns every chunk length in order.
    ///
    /// A non-empty trailing chunk is appended even when it is shorter than
    /// `min_size`. It is at most `max_size` bytes, since `feed()` cuts as soon
    /// as more are pending. The lengths stay available through
    /// [`Chunker::lengths`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::Finalized`] if called twice.
    pub fn finalize(&mut self) -> Result<Vec<u64>, ChunkError> {
        self.ensure_open("finalize")?;

        if let Some(len) = self.cdc.flush() {
            self.emitted.push(len);
        }
        self.state = SessionState::Finalized;

        tracing::debug!(
            chunks = self.emitted.len(),
            total_bytes = self.total_consumed,
            "chunker session finalized"
        );

        Ok(self.emitted.clone())
    }

    fn ensure_open(&self, operation: &'static str) -> Result<(), ChunkError> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Finalized => Err(ChunkError::Finalized { operation }),
        }
    }

    /// Returns the chunk lengths emitted so far.
    pub fn lengths(&self) -> &[u64] {
        &self.emitted
    }

    /// Returns the number of bytes since the last boundary.
    pub fn current_length(&self) -> u64 {
        self.cdc.current_len()
    }

    /// Returns the number of bytes fed so far.
    pub fn total_consumed(&self) -> u64 {
        self.total_consumed
    }

    /// Returns the current rolling fingerprint.
    pub fn fingerprint(&self) -> u64 {
        self.cdc.fingerprint()
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true once `finalize()` has succeeded.
    pub fn is_finalized(&self) -> bool {
        self.state == SessionState::Finalized
    }

    /// Returns the configuration used by this session.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::open(ChunkConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> ChunkConfig {
        ChunkConfig::new(63, 16, 256).unwrap()
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len as u64)
            .map(|i| (i.wrapping_mul(2654435761) >> 13) as u8)
            .collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Chunker::new(ChunkConfig::default().with_window_size(0)).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_input() {
        let mut chunker = Chunker::default();
        chunker.feed(b"").unwrap();
        assert!(chunker.finalize().unwrap().is_empty());
        assert!(chunker.is_finalized());
    }

    #[test]
    fn test_no_feed_finalize() {
        let mut chunker = Chunker::default();
        assert_eq!(chunker.finalize().unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_accounting_invariant() {
        let mut chunker = Chunker::new(small()).unwrap();
        let data = sample(5000);

        for piece in data.chunks(333) {
            chunker.feed(piece).unwrap();
            let emitted: u64 = chunker.lengths().iter().sum();
            assert_eq!(emitted + chunker.current_length(), chunker.total_consumed());
        }

        let lengths = chunker.finalize().unwrap();
        assert_eq!(lengths.iter().sum::<u64>(), 5000);
        assert!(lengths.iter().all(|&len| len > 0));
        assert_eq!(chunker.current_length(), 0);
    }

    #[test]
    fn test_trailing_chunk_bounded_by_max_size() {
        // Mask 0 never matches: only forced cuts.
        let config = ChunkConfig::new(0, 4, 10).unwrap();
        let mut chunker = Chunker::new(config).unwrap();
        chunker.feed(sample(1000)).unwrap();
        assert_eq!(chunker.current_length(), 10);

        let lengths = chunker.finalize().unwrap();
        assert_eq!(lengths.last(), Some(&10));
        assert!(lengths[..lengths.len() - 1].iter().all(|&len| len == 11));
    }

    #[test]
    fn test_feed_after_finalize() {
        let mut chunker = Chunker::new(small()).unwrap();
        chunker.feed(b"abc").unwrap();
        chunker.finalize().unwrap();

        let err = chunker.feed(b"more").unwrap_err();
        assert!(matches!(err, ChunkError::Finalized { operation: "feed" }));
        assert_eq!(chunker.total_consumed(), 3);
    }

    #[test]
    fn test_double_finalize() {
        let mut chunker = Chunker::new(small()).unwrap();
        chunker.feed(b"abc").unwrap();
        assert_eq!(chunker.finalize().unwrap(), vec![3]);

        let err = chunker.finalize().unwrap_err();
        assert!(matches!(
            err,
            ChunkError::Finalized {
                operation: "finalize"
            }
        ));
        assert_eq!(chunker.lengths(), &[3]);
    }

    #[test]
    fn test_state_transitions() {
        let mut chunker = Chunker::new(small()).unwrap();
        assert_eq!(chunker.state(), SessionState::Open);
        chunker.finalize().unwrap();
        assert_eq!(chunker.state(), SessionState::Finalized);
    }

    #[test]
    fn test_split_independence() {
        let data = sample(20_000);

        let mut whole = Chunker::new(small()).unwrap();
        whole.feed(&data).unwrap();
        let expected = whole.finalize().unwrap();

        let mut bytewise = Chunker::new(small()).unwrap();
        for byte in &data {
            bytewise.feed(std::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(bytewise.finalize().unwrap(), expected);
    }

    #[test]
    fn test_config_accessor() {
        let chunker = Chunker::new(small()).unwrap();
        assert_eq!(chunker.config(), &small());
        assert_eq!(chunker.fingerprint(), 0);
    }
}
