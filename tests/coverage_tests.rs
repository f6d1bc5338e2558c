//! Coverage and overlap tests for token-window chunking.
//!
//! Scenario-level tests against the public API: whole-document coverage,
//! overlap behavior, batching, and both offset modes.

use std::sync::Arc;

use strider::{Chunk, ChunkConfig, Error, OffsetMode, TokenChunker, WordTokenizer};

fn chunker(size: usize, overlap: impl Into<strider::Overlap>) -> TokenChunker {
    TokenChunker::new(
        Arc::new(WordTokenizer::new()),
        ChunkConfig::new(size, overlap).unwrap(),
    )
}

fn exact_chunker(size: usize, overlap: usize) -> TokenChunker {
    let config = ChunkConfig::new(size, overlap)
        .unwrap()
        .with_offset_mode(OffsetMode::Exact);
    TokenChunker::new(Arc::new(WordTokenizer::new()), config)
}

/// Check that the byte spans of the chunks cover the whole source.
fn spans_cover_source(chunks: &[Chunk], text: &str) -> bool {
    if chunks.is_empty() {
        return text.trim().is_empty();
    }
    let mut covered = vec![false; text.len()];
    for chunk in chunks {
        for i in chunk.span() {
            covered[i] = true;
        }
    }
    covered.iter().all(|&c| c)
}

// =============================================================================
// Coverage
// =============================================================================

#[test]
fn no_overlap_covers_everything() {
    let texts = [
        "Hello, world!",
        "The quick brown fox jumps over the lazy dog.",
        "Multiple\n\nParagraphs\n\nHere",
        " Leading and trailing spaces ",
        "short",
    ];

    for text in texts {
        for size in [1, 3, 8, 100] {
            let chunks = chunker(size, 0).chunk(text).unwrap();
            assert!(
                spans_cover_source(&chunks, text),
                "gap for size={size}, text={text:?}"
            );
        }
    }
}

#[test]
fn overlapping_chunks_cover_everything() {
    let text = "one two three four five six seven eight nine ten";
    let chunks = chunker(4, 2).chunk(text).unwrap();

    assert!(chunks.len() > 2);
    assert!(spans_cover_source(&chunks, text));
    for pair in chunks.windows(2) {
        assert!(pair[1].start < pair[0].end, "no overlap between neighbors");
    }
}

#[test]
fn exact_mode_spans_slice_back_to_chunk_text() {
    let text = "Pack my box with five dozen liquor jugs. Amazingly few \
                discotheques provide jukeboxes.";
    let chunks = exact_chunker(6, 0).chunk(text).unwrap();

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert_eq!(&text[chunk.span()], chunk.text);
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn eight_words_size_five() {
    // "a b c d e f g h" under a word tokenizer: 15 segments (8 words + 7
    // separators), but the interesting shape survives with word counts too.
    let text = "a b c d e f g h";
    let chunks = chunker(5, 0).chunk(text).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.iter().map(|c| c.token_count).sum::<usize>(), 15);
    assert_eq!(chunks.last().unwrap().end, text.len());
    let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn fractional_overlap_normalizes() {
    let config = ChunkConfig::new(8, 0.25).unwrap();
    assert_eq!(config.overlap(), 2);

    // Same chunking either way
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let by_fraction = chunker(8, 0.25).chunk(text).unwrap();
    let by_count = chunker(8, 2usize).chunk(text).unwrap();
    assert_eq!(by_fraction, by_count);
}

#[test]
fn last_chunk_is_not_padded() {
    let text = "one two three four five";
    let chunks = chunker(4, 0).chunk(text).unwrap();

    // 9 segments: windows of 4, 4, 1
    let counts: Vec<usize> = chunks.iter().map(|c| c.token_count).collect();
    assert_eq!(counts, vec![4, 4, 1]);
}

// =============================================================================
// Batching
// =============================================================================

#[test]
fn batch_with_blank_first_text() {
    let chunker = chunker(4, 0);
    let results = chunker.chunk_batch(&["", "a b c"], Some(1)).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_empty());
    assert!(!results[1].is_empty());
    assert_eq!(results[1][0].text, "a b c");
}

#[test]
fn batch_output_in_input_order() {
    let texts = ["first text here", "second", "", "fourth one follows"];
    let chunker = chunker(3, 1);

    let results = chunker.chunk_batch(&texts, None).unwrap();
    assert_eq!(results.len(), texts.len());
    assert!(results[2].is_empty());
    assert!(results[0][0].text.starts_with("first"));
    assert!(results[3][0].text.starts_with("fourth"));
}

#[test]
fn batch_size_only_bounds_width() {
    let texts: Vec<String> = (0..13)
        .map(|i| format!("document {i} with a few more words attached"))
        .collect();
    let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let chunker = chunker(4, 1);

    let reference = chunker.chunk_batch(&text_refs, None).unwrap();
    for batch_size in [1, 2, 5, 13, 64] {
        let batched = chunker.chunk_batch(&text_refs, Some(batch_size)).unwrap();
        assert_eq!(batched, reference, "batch_size={batch_size} changed output");
    }
}

#[test]
fn zero_batch_size_is_an_error() {
    let chunker = chunker(4, 0);
    assert!(matches!(
        chunker.chunk_batch(&["a"], Some(0)),
        Err(Error::InvalidBatchSize)
    ));
}

// =============================================================================
// Unicode
// =============================================================================

#[test]
fn multibyte_text_offsets_are_byte_accurate() {
    let text = "日本語 テキスト の 分割 테스트";
    let chunks = exact_chunker(3, 0).chunk(text).unwrap();

    assert!(spans_cover_source(&chunks, text));
    for chunk in &chunks {
        assert_eq!(&text[chunk.span()], chunk.text);
        assert_eq!(chunk.end - chunk.start, chunk.text.len());
    }
}
