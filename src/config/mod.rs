//! Configuration for chunking behavior.
//!
//! - [`ChunkConfig`] - Rolling fingerprint parameters and chunk size bounds
//! - [`HashConfig`] - Whether materialized chunks carry a BLAKE3 hash
//!
//! # Example
//!
//! ```
//! use rabinrs::{ChunkConfig, HashConfig};
//!
//! // Explicit mask and size bounds
//! let config = ChunkConfig::new(16 * 1024 - 1, 4096, 64 * 1024)?;
//!
//! // Builder style, validated when a session is created
//! let config = ChunkConfig::default()
//!     .with_prime(5)
//!     .with_window_size(32)
//!     .with_hash_config(HashConfig::disabled());
//! # Ok::<(), rabinrs::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default fingerprint multiplier.
pub const DEFAULT_PRIME: u64 = 3;

/// Default sliding window length in bytes.
pub const DEFAULT_WINDOW_SIZE: usize = 48;

/// Default boundary mask (average chunk ≈ 64 KiB past the minimum).
pub const DEFAULT_AVG_MASK: u64 = 64 * 1024 - 1;

/// Default minimum chunk size (32 KiB).
pub const DEFAULT_MIN_SIZE: u64 = 32 * 1024;

/// Default maximum chunk size (256 KiB).
pub const DEFAULT_MAX_SIZE: u64 = 256 * 1024;

/// Value the masked fingerprint must equal for a content-defined boundary.
///
/// Part of the configuration contract: changing it moves every boundary.
pub const BOUNDARY_TARGET: u64 = 1;

/// Configuration for content-defined chunking.
///
/// A boundary is cut after a byte once more than `min_size` bytes are in the
/// current chunk and either `fingerprint & avg_mask == BOUNDARY_TARGET` or
/// more than `max_size` bytes are in it.
///
/// Constraints checked by [`ChunkConfig::validate`]:
/// - `prime >= 1`
/// - `window_size >= 1`
/// - `min_size <= max_size`
///
/// Any `avg_mask` is accepted. One that can never produce
/// [`BOUNDARY_TARGET`] (such as `0`) gives fixed-size chunks of
/// `max_size + 1` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    prime: u64,
    window_size: usize,
    avg_mask: u64,
    min_size: u64,
    max_size: u64,
    hash_config: HashConfig,
}

impl ChunkConfig {
    /// Creates a new configuration with the default prime and window size.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `min_size > max_size`.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(8191, 2048, 32768)?;
    /// assert_eq!(config.avg_size(), 8192);
    /// assert!(ChunkConfig::new(8191, 4096, 1024).is_err());
    /// # Ok::<(), rabinrs::ChunkError>(())
    /// ```
    pub fn new(avg_mask: u64, min_size: u64, max_size: u64) -> Result<Self, ChunkError> {
        let config = Self {
            avg_mask,
            min_size,
            max_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the fingerprint multiplier.
    pub fn with_prime(mut self, prime: u64) -> Self {
        self.prime = prime;
        self
    }

    /// Sets the sliding window length.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the boundary mask directly.
    pub fn with_avg_mask(mut self, mask: u64) -> Self {
        self.avg_mask = mask;
        self
    }

    /// Sets the boundary mask from a target average size.
    ///
    /// The size is rounded up to a power of two and the mask becomes
    /// `size - 1`.
    ///
    /// ```
    /// use rabinrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_avg_size(10_000);
    /// assert_eq!(config.avg_mask(), 16383);
    /// ```
    pub fn with_avg_size(mut self, size: u64) -> Self {
        self.avg_mask = size
            .max(2)
            .checked_next_power_of_two()
            .map_or(u64::MAX, |size| size - 1);
        self
    }

    /// Sets the minimum chunk size.
    pub fn with_min_size(mut self, size: u64) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the maximum chunk size.
    pub fn with_max_size(mut self, size: u64) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the hash configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the fingerprint multiplier.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Returns the sliding window length.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the boundary mask.
    pub fn avg_mask(&self) -> u64 {
        self.avg_mask
    }

    /// Returns the expected average distance between fingerprint matches.
    pub fn avg_size(&self) -> u64 {
        self.avg_mask.saturating_add(1)
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use rabinrs::ChunkConfig;
    ///
    /// assert!(ChunkConfig::default().with_window_size(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.prime == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "prime must be at least 1",
            });
        }

        if self.window_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "window_size must be at least 1",
            });
        }

        if self.min_size > self.max_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size cannot be greater than max_size",
            });
        }

        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            window_size: DEFAULT_WINDOW_SIZE,
            avg_mask: DEFAULT_AVG_MASK,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for chunk hashing behavior.
///
/// Only the materialized-chunk adapters ([`crate::ChunkIter`] and the async
/// stream) hash; chunk-length functions ignore it. Enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes for chunks.
    pub enabled: bool,
}

impl HashConfig {
    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::enabled()
    }
}
