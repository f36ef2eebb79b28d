//! Thread-local pool of read buffers.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

/// Size of every pooled read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Box<[u8]>>> = const { RefCell::new(Vec::new()) };
}

/// A fixed-size read buffer returned to the pool on drop.
///
/// Dereferences to a `DEFAULT_BUFFER_SIZE` byte slice. Contents left over
/// from a previous user are not cleared; readers overwrite what they report.
pub struct Buffer {
    data: Box<[u8]>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or allocates a new one.
    pub fn take() -> Self {
        let pooled = THREAD_BUFFER_POOL.with(|pool| pool.borrow_mut().pop());
        Self {
            data: pooled.unwrap_or_else(|| vec![0u8; DEFAULT_BUFFER_SIZE].into_boxed_slice()),
        }
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        let data = std::mem::take(&mut self.data);
        // try_with: the pool may already be gone during thread teardown.
        let _ = THREAD_BUFFER_POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(data);
            }
        });
    }
}
