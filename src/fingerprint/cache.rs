//! Thread-local cache of fingerprint tables.

use std::cell::RefCell;
use std::sync::Arc;

use super::FingerprintTable;

/// Maximum number of distinct tables to keep per thread.
pub const MAX_CACHED_TABLES: usize = 4;

thread_local! {
    static TABLE_CACHE: RefCell<Vec<Arc<FingerprintTable>>> = const { RefCell::new(Vec::new()) };
}

/// Returns the cached table for `(prime, window_size)` or builds and caches
/// a new one. The most recently used table sits at the end of the list.
pub(super) fn lookup(prime: u64, window_size: usize) -> Arc<FingerprintTable> {
    TABLE_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();

        let hit = cache
            .iter()
            .position(|t| t.prime() == prime && t.window_size() == window_size);

        if let Some(idx) = hit {
            tracing::trace!(prime, window_size, "fingerprint table cache hit");
            let table = cache.remove(idx);
            cache.push(Arc::clone(&table));
            return table;
        }

        tracing::trace!(prime, window_size, "fingerprint table cache miss");
        let table = Arc::new(FingerprintTable::new(prime, window_size));
        if cache.len() >= MAX_CACHED_TABLES {
            cache.remove(0);
        }
        cache.push(Arc::clone(&table));
        table
    })
}
