//! The outgoing-byte table for the rolling fingerprint.

use std::fmt;
use std::sync::Arc;

/// Immutable table of the contribution a byte still carries when it leaves
/// a window of `window_size` bytes.
///
/// `table[b] = (b + 1) * prime^window_size mod 2^64`. A byte enters the
/// fingerprint as `b + 1` and is multiplied by `prime` once per following
/// byte, so after `window_size` more bytes this is exactly what has to be
/// subtracted to drop it.
///
/// # Example
///
/// ```
/// use rabinrs::FingerprintTable;
///
/// let table = FingerprintTable::new(1, 4);
/// assert_eq!(table.get(0), 1);
/// assert_eq!(table.get(255), 256);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FingerprintTable {
    prime: u64,
    window_size: usize,
    entries: [u64; 256],
}

impl FingerprintTable {
    /// Computes the table for the given multiplier and window length.
    pub fn new(prime: u64, window_size: usize) -> Self {
        let mut power = 1u64;
        for _ in 0..window_size {
            power = power.wrapping_mul(prime);
        }

        let mut entries = [0u64; 256];
        for (value, entry) in (1u64..).zip(entries.iter_mut()) {
            *entry = value.wrapping_mul(power);
        }

        Self {
            prime,
            window_size,
            entries,
        }
    }

    /// Returns the table for `(prime, window_size)` from the thread-local
    /// cache, building it on first use.
    pub fn shared(prime: u64, window_size: usize) -> Arc<Self> {
        super::cache::lookup(prime, window_size)
    }

    /// Returns the entry for a raw byte.
    #[inline]
    pub fn get(&self, byte: u8) -> u64 {
        self.entries[byte as usize]
    }

    /// Returns the amount to subtract for a window value.
    ///
    /// Window values are `byte + 1`; `0` marks a slot that never held a byte
    /// and contributes nothing.
    #[inline]
    pub fn outgoing(&self, value: u16) -> u64 {
        match value.checked_sub(1) {
            Some(byte) => self.entries[byte as usize],
            None => 0,
        }
    }

    /// Returns the multiplier this table was built for.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Returns the window length this table was built for.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns all 256 entries.
    pub fn entries(&self) -> &[u64; 256] {
        &self.entries
    }
}

impl fmt::Debug for FingerprintTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FingerprintTable")
            .field("prime", &self.prime)
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}
