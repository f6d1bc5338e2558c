//! # strider
//!
//! Token-window chunking for retrieval-augmented generation (RAG) pipelines.
//!
//! ## The Problem
//!
//! Models budget in tokens; documents arrive in bytes. Splitting a document
//! every N characters produces chunks whose token counts swing wildly with
//! the script and density of the text — a "512-character" chunk of CJK prose
//! can blow a model's window that the same 512 characters of English would
//! barely dent.
//!
//! The fix is to measure windows in the model's own tokens:
//!
//! ```text
//! text --encode--> [t0 t1 t2 t3 t4 t5 t6 t7 t8 t9]
//!
//! chunk_size = 4, overlap = 2 (stride = 2):
//!
//! window 0 [t0 t1 t2 t3]
//! window 1       [t2 t3 t4 t5]
//! window 2             [t4 t5 t6 t7]
//! window 3                   [t6 t7 t8 t9]
//! window 4                         [t8 t9]
//! ```
//!
//! Each window decodes back to text, and overlap keeps boundary context from
//! being lost between neighbors.
//!
//! ## The Hard Part: Offsets
//!
//! Downstream consumers want to know *where* each chunk came from, but
//! decoding tokens is not guaranteed to reproduce the source bytes —
//! tokenizers normalize whitespace and merge sub-tokens. Reconstructing the
//! byte span of each chunk against the original text, despite imperfect
//! roundtripping, is the genuinely subtle piece of this crate. Two
//! strategies are offered (see [`OffsetMode`]): a drift-tolerant cumulative
//! cursor and an exact substring search that fails loudly instead of
//! guessing.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use strider::{ChunkConfig, TokenChunker, WordTokenizer};
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! let config = ChunkConfig::new(12, 0.25).unwrap(); // overlap = 3 tokens
//! let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), config);
//!
//! for chunk in chunker.chunk(text).unwrap() {
//!     println!("[{}..{}] {} tokens", chunk.start, chunk.end, chunk.token_count);
//! }
//! ```
//!
//! ## Bring Your Own Tokenizer
//!
//! The chunker is generic over the [`Tokenizer`] capability — four methods,
//! no opinion about the algorithm behind them. [`WordTokenizer`] is the
//! built-in reference backend (Unicode word bounds, exact roundtrip); the
//! `hf` feature adds `HfTokenizer` wrapping any HuggingFace `tokenizers`
//! model so windows are counted in the embedding model's actual tokens.
//!
//! ## Batching
//!
//! [`TokenChunker::chunk_batch`] chunks many texts through the tokenizer's
//! batched encode/decode, with an optional `batch_size` to bound how many
//! texts are in flight at once. Output is identical with or without it.

mod chunk;
mod config;
mod error;
mod offsets;
mod token;
mod window;
mod word;

#[cfg(feature = "hf")]
mod hf;

pub use chunk::Chunk;
pub use config::{ChunkConfig, Overlap};
pub use error::{Error, Result};
pub use offsets::OffsetMode;
pub use token::TokenChunker;
pub use window::TokenWindows;
pub use word::WordTokenizer;

#[cfg(feature = "hf")]
pub use hf::HfTokenizer;

/// A token identifier. Opaque: meaningful only to the tokenizer that
/// produced it.
pub type TokenId = u32;

/// The tokenizer capability the chunker is built on.
///
/// Implementations map text to token ids and back. The batch methods default
/// to per-item loops; backends with native batching (like the `hf` backend)
/// override them.
///
/// ```rust
/// use strider::{Result, TokenId, Tokenizer};
///
/// /// One token per byte. Good enough for a smoke test.
/// struct ByteTokenizer;
///
/// impl Tokenizer for ByteTokenizer {
///     fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
///         Ok(text.bytes().map(TokenId::from).collect())
///     }
///
///     fn decode(&self, ids: &[TokenId]) -> Result<String> {
///         Ok(ids.iter().map(|&id| id as u8 as char).collect())
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Encode text into a token sequence.
    ///
    /// # Errors
    ///
    /// Backend failures surface as [`Error::Tokenizer`].
    fn encode(&self, text: &str) -> Result<Vec<TokenId>>;

    /// Decode a token sequence back into text.
    ///
    /// # Errors
    ///
    /// Backend failures surface as [`Error::Tokenizer`].
    fn decode(&self, ids: &[TokenId]) -> Result<String>;

    /// Encode several texts. Defaults to one [`encode`](Self::encode) per
    /// text.
    ///
    /// # Errors
    ///
    /// Backend failures surface as [`Error::Tokenizer`].
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<TokenId>>> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode several token sequences. Defaults to one
    /// [`decode`](Self::decode) per sequence.
    ///
    /// # Errors
    ///
    /// Backend failures surface as [`Error::Tokenizer`].
    fn decode_batch(&self, groups: &[&[TokenId]]) -> Result<Vec<String>> {
        groups.iter().map(|group| self.decode(group)).collect()
    }
}
