//! Content-Defined Chunking (CDC) core.
//!
//! - [`RabinCdc`] - Rolling fingerprint and boundary decision, one byte at a time
//! - [`Window`] - Fixed-capacity ring of the bytes currently in the fingerprint

mod rabin;
mod window;

pub use rabin::RabinCdc;
pub use window::Window;
