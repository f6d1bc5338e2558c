//! The Chunk type: a decoded token window with position metadata.

/// A decoded token window with its position in the original text.
///
/// Each chunk is a self-contained piece of the document, small enough (in
/// tokens) to feed to a bounded-context model, that can be embedded, indexed,
/// and retrieved independently.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use strider::Chunk;
///
/// let text = "Hello, world!";
/// let chunk = Chunk::new("world", 7, 12, 1);
///
/// // The offsets let you recover the original position
/// assert_eq!(&text[chunk.start..chunk.end], "world");
/// ```
///
/// The invariant `end - start == text.len()` always holds; whether
/// `source[start..end]` equals `text` byte-for-byte depends on the configured
/// [`OffsetMode`](crate::OffsetMode) and on how faithfully the tokenizer's
/// decode reproduces its input.
///
/// ## Overlap Handling
///
/// When the chunker is configured with a token overlap, adjacent chunks share
/// a decoded suffix/prefix and their byte spans overlap:
///
/// ```text
/// Original: "The quick brown fox"
/// Chunk 0:  "The quick b"     [0..11]
/// Chunk 1:  "ck brown fox"    [8..19]  <- overlaps with chunk 0
///                ^
///            overlap region [8..11]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The decoded chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original text.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original text.
    pub end: usize,
    /// Number of tokens in the window that produced this chunk.
    pub token_count: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, token_count: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            token_count,
        }
    }

    /// The length of this chunk's text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk's text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ span: {}..{}, tokens: {}, len: {} }}",
            self.start,
            self.end,
            self.token_count,
            self.len()
        )
    }
}
