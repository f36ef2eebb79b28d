//! Error types for rabinrs.

use thiserror::Error;

/// Errors that can occur during chunking operations.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// An I/O error occurred while opening or reading the byte source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The session was already finalized.
    #[error("chunker already finalized: {operation} rejected")]
    Finalized {
        /// The operation that was attempted.
        operation: &'static str,
    },
}
