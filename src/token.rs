//! Token-window chunking: split text into overlapping windows of N tokens.
//!
//! ## Why Count Tokens?
//!
//! Byte- or character-sized chunks lie to you. "512 characters" of dense
//! prose is ~128 tokens; the same bytes of CJK text or source code can be
//! several times more. Models budget in tokens, so windows measured in the
//! model's own tokens are the only sizes that hold.
//!
//! ## The Pipeline
//!
//! ```text
//! text --encode--> tokens --window walk--> token windows
//!      --decode_batch--> window texts --offset reconstruction--> chunks
//! ```
//!
//! Data flows one way; no stage reads back from a later one. The only
//! subtlety lives in the last arrow — see [`crate::offsets`]'s module docs.

use std::sync::Arc;

use crate::{offsets, Chunk, ChunkConfig, Error, OffsetMode, Result, TokenId, Tokenizer};

/// Chunker that splits text into overlapping windows of at most
/// `chunk_size` tokens.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use strider::{ChunkConfig, TokenChunker, WordTokenizer};
///
/// let config = ChunkConfig::new(16, 4).unwrap();
/// let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), config);
///
/// let chunks = chunker.chunk("The quick brown fox jumps over the lazy dog.").unwrap();
/// assert!(!chunks.is_empty());
/// for chunk in &chunks {
///     assert!(chunk.token_count <= 16);
///     assert_eq!(chunk.end - chunk.start, chunk.text.len());
/// }
/// ```
pub struct TokenChunker {
    tokenizer: Arc<dyn Tokenizer>,
    config: ChunkConfig,
}

impl TokenChunker {
    /// Create a chunker from a tokenizer backend and a validated config.
    #[must_use]
    pub fn new(tokenizer: Arc<dyn Tokenizer>, config: ChunkConfig) -> Self {
        Self { tokenizer, config }
    }

    /// The configuration this chunker was built with.
    #[must_use]
    pub const fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Split `text` into overlapping token windows.
    ///
    /// Empty or whitespace-only input returns an empty vec without touching
    /// the tokenizer. Chunks come back in non-decreasing `start` order; with
    /// zero overlap and [`OffsetMode::Approximate`] they are exactly
    /// contiguous.
    ///
    /// # Errors
    ///
    /// Tokenizer failures propagate unchanged; [`Error::ChunkAlignment`] in
    /// [`OffsetMode::Exact`] when a decoded window cannot be located.
    pub fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tokens = self.tokenizer.encode(text)?;
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let windows: Vec<&[TokenId]> = self.config.windows(&tokens).collect();
        self.assemble(text, &windows, 0)
    }

    /// Split each text in `texts`, returning one chunk vec per input in
    /// input order.
    ///
    /// `batch_size` caps how many texts go through the tokenizer's batch
    /// calls at once; it bounds peak memory but never changes the output.
    /// Blank texts and texts that encode to zero tokens yield empty inner
    /// vecs (blank ones without any tokenizer work).
    ///
    /// # Errors
    ///
    /// The whole call fails on the first error; nothing is skipped or
    /// partially returned. An [`Error::ChunkAlignment`] names the index of
    /// the failing text. `Some(0)` for `batch_size` is
    /// [`Error::InvalidBatchSize`].
    pub fn chunk_batch(&self, texts: &[&str], batch_size: Option<usize>) -> Result<Vec<Vec<Chunk>>> {
        match batch_size {
            None => self.process_batch(texts, 0),
            Some(0) => Err(Error::InvalidBatchSize),
            Some(size) => {
                let mut results = Vec::with_capacity(texts.len());
                for (batch_index, batch) in texts.chunks(size).enumerate() {
                    results.extend(self.process_batch(batch, batch_index * size)?);
                }
                Ok(results)
            }
        }
    }

    /// `base` is the offset of `texts[0]` within the caller's full input, so
    /// errors name the caller's index even under sub-batching.
    fn process_batch(&self, texts: &[&str], base: usize) -> Result<Vec<Vec<Chunk>>> {
        let mut results: Vec<Vec<Chunk>> = vec![Vec::new(); texts.len()];

        // Blank texts keep their slot but never reach the tokenizer.
        let live: Vec<usize> = (0..texts.len())
            .filter(|&i| !texts[i].trim().is_empty())
            .collect();
        if live.is_empty() {
            return Ok(results);
        }

        let live_texts: Vec<&str> = live.iter().map(|&i| texts[i]).collect();
        let token_lists = self.tokenizer.encode_batch(&live_texts)?;
        if token_lists.len() != live_texts.len() {
            return Err(Error::Tokenizer(format!(
                "encode_batch returned {} sequences for {} texts",
                token_lists.len(),
                live_texts.len()
            )));
        }

        for (&i, tokens) in live.iter().zip(&token_lists) {
            if tokens.is_empty() {
                continue;
            }
            let windows: Vec<&[TokenId]> = self.config.windows(tokens).collect();
            results[i] = self.assemble(texts[i], &windows, base + i)?;
        }

        Ok(results)
    }

    /// Decode the windows in one batched call and reconstruct offsets with
    /// the configured strategy.
    fn assemble(
        &self,
        source: &str,
        windows: &[&[TokenId]],
        text_index: usize,
    ) -> Result<Vec<Chunk>> {
        let texts = self.tokenizer.decode_batch(windows)?;
        let token_counts: Vec<usize> = windows.iter().map(|w| w.len()).collect();

        match self.config.offset_mode() {
            OffsetMode::Approximate => {
                let overlap_lengths = self.overlap_lengths(windows)?;
                Ok(offsets::reconstruct_approximate(
                    texts,
                    &overlap_lengths,
                    &token_counts,
                ))
            }
            OffsetMode::Exact => {
                offsets::reconstruct_exact(source, texts, &token_counts, text_index)
            }
        }
    }

    /// Byte length of each window's decoded overlap suffix: the last
    /// `overlap` tokens, or the whole window if it is shorter.
    fn overlap_lengths(&self, windows: &[&[TokenId]]) -> Result<Vec<usize>> {
        let overlap = self.config.overlap();
        if overlap == 0 {
            return Ok(vec![0; windows.len()]);
        }

        let suffixes: Vec<&[TokenId]> = windows
            .iter()
            .map(|w| {
                if w.len() > overlap {
                    &w[w.len() - overlap..]
                } else {
                    *w
                }
            })
            .collect();

        Ok(self
            .tokenizer
            .decode_batch(&suffixes)?
            .iter()
            .map(String::len)
            .collect())
    }
}

impl std::fmt::Debug for TokenChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenChunker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
