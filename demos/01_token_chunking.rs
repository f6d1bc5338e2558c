//! Basic Token Chunking
//!
//! The minimal example: split a document into token-sized windows.
//!
//! ```bash
//! cargo run --example 01_token_chunking
//! ```

use std::sync::Arc;

use strider::{ChunkConfig, TokenChunker, WordTokenizer};

fn main() {
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    // Windows of 24 tokens, 6 tokens shared between neighbors
    let config = ChunkConfig::new(24, 6).expect("valid config");
    let chunker = TokenChunker::new(Arc::new(WordTokenizer::new()), config);

    let chunks = chunker.chunk(document).expect("chunking succeeds");

    println!("Document: {} bytes", document.len());
    println!("Chunks: {}\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "[{}] {} tokens, bytes {}..{}: \"{}\"",
            i, chunk.token_count, chunk.start, chunk.end, chunk.text
        );
    }

    // Each chunk fits a fixed token budget, and the overlap carries
    // boundary context into the next window.
}
