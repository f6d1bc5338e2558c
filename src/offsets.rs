//! Offset reconstruction: mapping decoded windows back to source bytes.
//!
//! ## The Problem
//!
//! Decoding a token window does not necessarily reproduce the exact bytes it
//! was encoded from. Tokenizers normalize whitespace, merge sub-tokens, strip
//! markers. So after decoding each window we still have to answer: *where in
//! the original text does this chunk live?*
//!
//! ```text
//! Source:  "The  quick brown fox"
//!               ^^ double space
//! Decoded: "The quick brown fox"
//!               ^ normalized away -- naive offsets are now off by one
//! ```
//!
//! ## Two Strategies
//!
//! **Approximate** keeps a running cursor. A chunk starts where the cursor
//! points and ends `text.len()` bytes later; the cursor then steps back by
//! the byte length of the window's decoded overlap suffix (the last
//! `overlap` tokens, decoded on their own):
//!
//! ```text
//! chunk 0: [cursor ......... end0]
//! chunk 1:        [end0 - len(decode(overlap tokens)) ......... end1]
//! ```
//!
//! Never fails, O(1) per chunk. But decoding a suffix independently is not
//! guaranteed to equal the suffix of decoding the whole window, so offsets
//! can drift from ground truth. That drift is the documented cost of
//! robustness.
//!
//! **Exact** searches the source for each decoded chunk at or after the
//! cursor, then advances the cursor to the match's end. Offsets are real
//! source positions whenever the decoded text is literally present. When it
//! is not (normalization, or overlapping windows whose decoded text begins
//! before the previous match's end), the search fails and the error is
//! surfaced rather than guessed around.
//!
//! The two strategies are **not** interchangeable: for the same input they
//! can produce different spans. The mode is fixed per configuration and
//! applied identically to single and batched chunking.

use crate::{Chunk, Error, Result};

/// Strategy for reconstructing chunk byte offsets. See the module docs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetMode {
    /// Cumulative cursor with decoded-overlap stepback. Never fails; spans
    /// may drift when decode is not compositional. The default.
    #[default]
    Approximate,
    /// Substring search against the source text. Spans are exact when found;
    /// [`Error::ChunkAlignment`] when not. Best suited to roundtripping
    /// tokenizers and zero overlap.
    Exact,
}

/// Lay out decoded chunks with the cumulative-cursor strategy.
///
/// `overlap_lengths[i]` is the byte length of window *i*'s independently
/// decoded overlap suffix (all zeros when the configured overlap is zero).
pub(crate) fn reconstruct_approximate(
    texts: Vec<String>,
    overlap_lengths: &[usize],
    token_counts: &[usize],
) -> Vec<Chunk> {
    debug_assert_eq!(texts.len(), overlap_lengths.len());
    debug_assert_eq!(texts.len(), token_counts.len());

    let mut chunks = Vec::with_capacity(texts.len());
    let mut cursor = 0usize;

    for (i, text) in texts.into_iter().enumerate() {
        let start = cursor;
        let end = start + text.len();
        // Clamp so a suffix that decodes longer than its window's text can
        // never move the next start before this one.
        cursor = end.saturating_sub(overlap_lengths[i]).max(start);
        chunks.push(Chunk::new(text, start, end, token_counts[i]));
    }

    chunks
}

/// Locate each decoded chunk in `source` with the substring-search strategy.
///
/// `text_index` only labels the error when a chunk cannot be found.
pub(crate) fn reconstruct_exact(
    source: &str,
    texts: Vec<String>,
    token_counts: &[usize],
    text_index: usize,
) -> Result<Vec<Chunk>> {
    debug_assert_eq!(texts.len(), token_counts.len());

    let mut chunks = Vec::with_capacity(texts.len());
    let mut cursor = 0usize;

    for (chunk_index, text) in texts.into_iter().enumerate() {
        let start = source[cursor..]
            .find(text.as_str())
            .map(|pos| cursor + pos)
            .ok_or(Error::ChunkAlignment {
                text_index,
                chunk_index,
                cursor,
            })?;
        let end = start + text.len();
        cursor = end;
        chunks.push(Chunk::new(text, start, end, token_counts[chunk_index]));
    }

    Ok(chunks)
}
