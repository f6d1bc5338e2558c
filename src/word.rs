//! A dependency-free reference tokenizer based on Unicode word bounds.
//!
//! Real deployments pair the chunker with the model's own tokenizer (see the
//! `hf` feature). For tests, demos, and rough word-budget chunking, this
//! backend is enough: it segments text with UAX #29 word boundaries and
//! assigns vocabulary ids on first sight.
//!
//! The useful property: word-bound segments include the whitespace and
//! punctuation runs between words, so decoding any token range concatenates
//! back to the exact source bytes. Offsets reconstructed in
//! [`OffsetMode::Exact`](crate::OffsetMode::Exact) are therefore true source
//! spans.
//!
//! ```text
//! "Dr. Smith  arrived."
//!  └┬┘├┘└┬──┘├─┘└┬────┘
//!  "Dr" "." " " "Smith" "  " "arrived" "."   <- every byte kept
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result, TokenId, Tokenizer};

#[derive(Debug, Default)]
struct Vocab {
    ids: HashMap<String, TokenId>,
    tokens: Vec<String>,
}

/// Tokenizer over Unicode word-boundary segments with a grow-on-demand
/// vocabulary.
///
/// Decoding concatenates segments verbatim, so `decode(encode(text)) == text`
/// for any text.
///
/// ## Example
///
/// ```rust
/// use strider::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let ids = tokenizer.encode("Hello, world!").unwrap();
/// assert_eq!(tokenizer.decode(&ids).unwrap(), "Hello, world!");
/// ```
#[derive(Debug, Default)]
pub struct WordTokenizer {
    vocab: RwLock<Vocab>,
}

impl WordTokenizer {
    /// Create a tokenizer with an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct segments seen so far.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tokens
            .len()
    }
}

impl Tokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        let mut vocab = self.vocab.write().unwrap_or_else(PoisonError::into_inner);
        Ok(text
            .split_word_bounds()
            .map(|segment| {
                if let Some(&id) = vocab.ids.get(segment) {
                    id
                } else {
                    let id = vocab.tokens.len() as TokenId;
                    vocab.ids.insert(segment.to_string(), id);
                    vocab.tokens.push(segment.to_string());
                    id
                }
            })
            .collect())
    }

    fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let vocab = self.vocab.read().unwrap_or_else(PoisonError::into_inner);
        let mut text = String::new();
        for &id in ids {
            let token = vocab
                .tokens
                .get(id as usize)
                .ok_or_else(|| Error::Tokenizer(format!("unknown token id {id}")))?;
            text.push_str(token);
        }
        Ok(text)
    }
}
