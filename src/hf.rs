//! HuggingFace `tokenizers` backend (requires the `hf` feature).
//!
//! Wraps a [`tokenizers::Tokenizer`] as a [`Tokenizer`](crate::Tokenizer)
//! capability. Special tokens are excluded on encode and skipped on decode:
//! chunking wants windows over the text's own tokens, not `[CLS]`/`[SEP]`
//! scaffolding, and decoded special tokens would never align with the source.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strider::{ChunkConfig, HfTokenizer, TokenChunker};
//!
//! let tokenizer = HfTokenizer::from_pretrained("gpt2")?;
//! let chunker = TokenChunker::new(Arc::new(tokenizer), ChunkConfig::new(512, 128)?);
//! let chunks = chunker.chunk(&document)?;
//! ```

use std::path::Path;

use crate::{Error, Result, TokenId, Tokenizer};

/// A [`Tokenizer`] backed by the HuggingFace `tokenizers` crate.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load a tokenizer from the HuggingFace Hub by model identifier
    /// (e.g. `"gpt2"`, `"bert-base-uncased"`).
    ///
    /// # Errors
    ///
    /// [`Error::Tokenizer`] if the download or parse fails.
    pub fn from_pretrained(identifier: &str) -> Result<Self> {
        tokenizers::Tokenizer::from_pretrained(identifier, None)
            .map(Self::from)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }

    /// Load a tokenizer from a local `tokenizer.json` file.
    ///
    /// # Errors
    ///
    /// [`Error::Tokenizer`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        tokenizers::Tokenizer::from_file(path)
            .map(Self::from)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }

    /// Access the wrapped tokenizer.
    #[must_use]
    pub fn inner(&self) -> &tokenizers::Tokenizer {
        &self.inner
    }
}

impl From<tokenizers::Tokenizer> for HfTokenizer {
    fn from(inner: tokenizers::Tokenizer) -> Self {
        Self { inner }
    }
}

impl Tokenizer for HfTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        self.inner
            .encode(text, false)
            .map(|encoding| encoding.get_ids().to_vec())
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }

    fn decode(&self, ids: &[TokenId]) -> Result<String> {
        self.inner
            .decode(ids, true)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<TokenId>>> {
        let encodings = self
            .inner
            .encode_batch(texts.to_vec(), false)
            .map_err(|e| Error::Tokenizer(e.to_string()))?;
        Ok(encodings
            .iter()
            .map(|encoding| encoding.get_ids().to_vec())
            .collect())
    }

    fn decode_batch(&self, groups: &[&[TokenId]]) -> Result<Vec<String>> {
        self.inner
            .decode_batch(groups, true)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }
}

impl std::fmt::Debug for HfTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenizer").finish_non_exhaustive()
    }
}
