//! Fixed-capacity sliding window.

/// Ring buffer holding the last `capacity` window values.
///
/// Values are `byte + 1`, so a freshly created window full of `0` reads as
/// "no history yet".
#[derive(Debug, Clone)]
pub struct Window {
    slots: Box<[u16]>,
    pos: usize,
}

impl Window {
    /// Creates a zero-filled window. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "window capacity must be non-zero");
        Self {
            slots: vec![0u16; capacity].into_boxed_slice(),
            pos: 0,
        }
    }

    /// Stores `value` in place of the oldest slot and returns what it held.
    #[inline]
    pub fn replace_oldest(&mut self, value: u16) -> u16 {
        let oldest = std::mem::replace(&mut self.slots[self.pos], value);
        self.pos += 1;
        if self.pos == self.slots.len() {
            self.pos = 0;
        }
        oldest
    }

    /// Returns the window length.
    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the next write index.
    #[allow(dead_code)]
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let mut window = Window::new(3);
        assert_eq!(window.capacity(), 3);
        assert_eq!(window.replace_oldest(10), 0);
        assert_eq!(window.replace_oldest(11), 0);
        assert_eq!(window.replace_oldest(12), 0);
    }

    #[test]
    fn test_wraps_around() {
        let mut window = Window::new(3);
        for v in 1..=3 {
            window.replace_oldest(v);
        }
        assert_eq!(window.position(), 0);
        assert_eq!(window.replace_oldest(4), 1);
        assert_eq!(window.replace_oldest(5), 2);
        assert_eq!(window.position(), 2);
    }

    #[test]
    fn test_single_slot() {
        let mut window = Window::new(1);
        assert_eq!(window.replace_oldest(7), 0);
        assert_eq!(window.replace_oldest(8), 7);
        assert_eq!(window.position(), 0);
    }
}
