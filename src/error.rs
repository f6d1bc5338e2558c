//! Error types for strider.

/// Errors that can occur during configuration or chunking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap must be strictly smaller than the chunk size.
    #[error("overlap {overlap} must be less than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size in tokens.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// Fractional overlap must lie in `[0, 1)`.
    #[error("overlap fraction {0} must be in [0, 1)")]
    OverlapFractionOutOfRange(f64),

    /// Batch size must be > 0 when given.
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    /// A decoded chunk could not be located in its source text.
    ///
    /// Raised only in [`OffsetMode::Exact`](crate::OffsetMode::Exact), when
    /// the decoded window text has no occurrence at or after the search
    /// cursor (the tokenizer normalized whitespace away, or overlapping
    /// windows start before the previous window's end).
    #[error(
        "chunk {chunk_index} of text {text_index} not found in source at or after byte {cursor}"
    )]
    ChunkAlignment {
        /// Index of the input text within the batch (0 for single-text calls).
        text_index: usize,
        /// Index of the chunk within that text.
        chunk_index: usize,
        /// Byte offset the search started from.
        cursor: usize,
    },

    /// Tokenizer backend error, passed through unchanged.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Result type for strider operations.
pub type Result<T> = std::result::Result<T, Error>;
