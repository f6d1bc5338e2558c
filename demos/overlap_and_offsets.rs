//! Overlap and Offset Modes
//!
//! Shows fractional overlap and the two offset reconstruction strategies.
//!
//! ```bash
//! cargo run --example overlap_and_offsets
//! ```

use std::sync::Arc;

use strider::{ChunkConfig, OffsetMode, TokenChunker, WordTokenizer};

fn main() {
    let document = "Retrieval systems index chunks, not documents. \
        A chunk that is too large dilutes the embedding. \
        A chunk that is too small strips away context. \
        Overlap between chunks softens the boundary problem.";

    // Fractional overlap: 25% of the window, normalized once to a token count
    let config = ChunkConfig::new(16, 0.25).expect("valid config");
    println!(
        "chunk_size={} overlap={} stride={}\n",
        config.chunk_size(),
        config.overlap(),
        config.stride()
    );

    // Approximate (default): cursor arithmetic, never fails, may drift when
    // the tokenizer's decode is not compositional.
    let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), config);
    println!("-- Approximate offsets --");
    for chunk in chunker.chunk(document).expect("chunking succeeds") {
        println!("  [{:3}..{:3}] {} tokens", chunk.start, chunk.end, chunk.token_count);
    }

    // Exact: substring search against the source. With a roundtripping
    // tokenizer and zero overlap, each span slices back to the chunk text.
    // (With overlap, a decoded window starts before the previous search
    // cursor and exact mode reports a ChunkAlignment error instead.)
    let exact = ChunkConfig::new(16, 0)
        .expect("valid config")
        .with_offset_mode(OffsetMode::Exact);
    let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), exact);
    println!("\n-- Exact offsets --");
    for chunk in chunker.chunk(document).expect("chunking succeeds") {
        assert_eq!(&document[chunk.span()], chunk.text);
        println!("  [{:3}..{:3}] {} tokens", chunk.start, chunk.end, chunk.token_count);
    }

    // Batched: one result per input, blanks stay blank
    let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), config);
    let results = chunker
        .chunk_batch(&["", document], Some(1))
        .expect("batch succeeds");
    println!("\nbatch: [{}, {}] chunks", results[0].len(), results[1].len());
}
