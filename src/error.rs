//! Framing error types

use thiserror::Error;

/// Framing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data does not fit the one-byte length field
    #[error("data too large: {size} bytes (max {max})")]
    DataTooLarge {
        /// Data size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Buffer too small for the requested field
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
