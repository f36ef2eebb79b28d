//! Precomputed fingerprint tables.
//!
//! - [`FingerprintTable`] - Contribution of each byte leaving the window
//!
//! Tables are pure functions of `(prime, window_size)`. Sessions obtain them
//! through [`FingerprintTable::shared`], which builds each pair once per
//! thread and hands out read-only `Arc`s.

mod cache;
mod table;

pub use table::FingerprintTable;
