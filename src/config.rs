//! Chunking configuration: window size, overlap, and offset mode.
//!
//! ## The Problem
//!
//! Token windows need two numbers:
//!
//! - `chunk_size`: how many tokens fit in one window (usually the downstream
//!   model's comfortable context, e.g. 512).
//! - `overlap`: how many tokens consecutive windows share, so information at
//!   window boundaries is not lost.
//!
//! Overlap is naturally expressed two ways. "128 tokens" is precise;
//! "25% of the window" survives a later change of `chunk_size`. Rather than
//! threading an int-or-float union through the algorithm, both forms are
//! accepted at construction and normalized once to a token count:
//!
//! ```text
//! Overlap::Tokens(128)              -> 128
//! Overlap::Fraction(0.25), size 512 -> floor(0.25 * 512) = 128
//! ```
//!
//! After normalization the invariant `overlap < chunk_size` must hold, which
//! guarantees the window stride `chunk_size - overlap` is at least 1 and the
//! window walk terminates.

use crate::{Error, OffsetMode, Result, TokenId, TokenWindows};

/// Overlap between consecutive token windows.
///
/// Constructed implicitly from a token count or a fraction of `chunk_size`:
///
/// ```rust
/// use strider::{ChunkConfig, Overlap};
///
/// let a = ChunkConfig::new(8, 2).unwrap();         // 2 tokens
/// let b = ChunkConfig::new(8, 0.25).unwrap();      // floor(0.25 * 8) = 2
/// let c = ChunkConfig::new(8, Overlap::Tokens(2)).unwrap();
///
/// assert_eq!(a.overlap(), 2);
/// assert_eq!(b.overlap(), 2);
/// assert_eq!(c.overlap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlap {
    /// An absolute number of tokens.
    Tokens(usize),
    /// A fraction of `chunk_size` in `[0, 1)`, floored to a token count.
    Fraction(f64),
}

impl From<usize> for Overlap {
    fn from(tokens: usize) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<f64> for Overlap {
    fn from(fraction: f64) -> Self {
        Self::Fraction(fraction)
    }
}

/// Validated, immutable configuration for a [`TokenChunker`](crate::TokenChunker).
///
/// ## Example
///
/// ```rust
/// use strider::ChunkConfig;
///
/// let config = ChunkConfig::new(512, 128).unwrap();
/// assert_eq!(config.chunk_size(), 512);
/// assert_eq!(config.overlap(), 128);
/// assert_eq!(config.stride(), 384);
///
/// // Out-of-range values are rejected at construction
/// assert!(ChunkConfig::new(0, 0).is_err());
/// assert!(ChunkConfig::new(512, 512).is_err());
/// assert!(ChunkConfig::new(512, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    chunk_size: usize,
    overlap: usize,
    offset_mode: OffsetMode,
}

impl ChunkConfig {
    /// Create a configuration, normalizing and validating the overlap.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Maximum tokens per window (must be > 0)
    /// * `overlap` - Tokens shared between consecutive windows, as a count
    ///   (`usize`) or a fraction of `chunk_size` (`f64` in `[0, 1)`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`,
    /// [`Error::OverlapFractionOutOfRange`] if a fractional overlap lies
    /// outside `[0, 1)`, and [`Error::OverlapExceedsSize`] if the normalized
    /// overlap is not strictly smaller than `chunk_size`.
    pub fn new(chunk_size: usize, overlap: impl Into<Overlap>) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize(chunk_size));
        }

        let overlap = match overlap.into() {
            Overlap::Tokens(tokens) => tokens,
            Overlap::Fraction(fraction) => {
                if !(0.0..1.0).contains(&fraction) {
                    return Err(Error::OverlapFractionOutOfRange(fraction));
                }
                (fraction * chunk_size as f64).floor() as usize
            }
        };

        // Re-checked after normalization: flooring guarantees this for
        // in-range fractions, but integer overlap arrives unnormalized.
        if overlap >= chunk_size {
            return Err(Error::OverlapExceedsSize {
                size: chunk_size,
                overlap,
            });
        }

        Ok(Self {
            chunk_size,
            overlap,
            offset_mode: OffsetMode::default(),
        })
    }

    /// Select the offset reconstruction strategy.
    ///
    /// The chosen mode applies uniformly to [`chunk`](crate::TokenChunker::chunk)
    /// and [`chunk_batch`](crate::TokenChunker::chunk_batch). See
    /// [`OffsetMode`] for the trade-off.
    #[must_use]
    pub fn with_offset_mode(self, offset_mode: OffsetMode) -> Self {
        Self {
            offset_mode,
            ..self
        }
    }

    /// Maximum tokens per window.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Normalized overlap in tokens. Always `< chunk_size()`.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Token-index distance between the starts of consecutive windows.
    /// Always `>= 1`.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// The configured offset reconstruction strategy.
    #[must_use]
    pub const fn offset_mode(&self) -> OffsetMode {
        self.offset_mode
    }

    /// Walk a token sequence as overlapping windows under this configuration.
    #[must_use]
    pub fn windows<'a>(&self, tokens: &'a [TokenId]) -> TokenWindows<'a> {
        TokenWindows::new(tokens, self.chunk_size, self.stride())
    }
}
