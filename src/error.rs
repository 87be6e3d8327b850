//! Error type shared by the crate.

/// Errors for table construction, streaming input and digest decoding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A transition-table seed outside `0..=255`.
    #[error("invalid seed {0} (expected 0..=255)")]
    InvalidSeed(u32),
    /// A hex digest that is not exactly 64 hex characters.
    #[error("invalid digest encoding: {0}")]
    InvalidDigestEncoding(#[from] hex::FromHexError),
    /// A raw digest that is not exactly 32 bytes.
    #[error("invalid digest length (expected 32 bytes, got {0})")]
    InvalidDigestLength(usize),
    /// A sub-range of an input buffer that does not fit in the buffer.
    #[error("range {offset}+{len} out of bounds for buffer of {available} bytes")]
    OutOfBounds {
        /// Requested start offset.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Length of the buffer.
        available: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
