//! The window walk: fixed-size token windows with a constant stride.
//!
//! Given a token sequence of length `n`, windows start at
//! `0, stride, 2*stride, ...` and span `[start, min(start + chunk_size, n))`:
//!
//! ```text
//! n = 10, chunk_size = 4, overlap = 2 (stride = 2)
//!
//! tokens:  t0 t1 t2 t3 t4 t5 t6 t7 t8 t9
//! window 0 [t0 t1 t2 t3]
//! window 1       [t2 t3 t4 t5]
//! window 2             [t4 t5 t6 t7]
//! window 3                   [t6 t7 t8 t9]
//! window 4                         [t8 t9]   <- final window may be short
//! ```
//!
//! The configuration invariant `overlap < chunk_size` makes `stride >= 1`,
//! so the walk always terminates and every token index lands in at least
//! one window.

use crate::TokenId;

/// Iterator over overlapping windows of a token sequence.
///
/// Yields sub-slices of the input; nothing is copied. Created by
/// [`ChunkConfig::windows`](crate::ChunkConfig::windows).
///
/// ## Example
///
/// ```rust
/// use strider::ChunkConfig;
///
/// let tokens: Vec<u32> = (0..10).collect();
/// let config = ChunkConfig::new(4, 2).unwrap();
///
/// let windows: Vec<_> = config.windows(&tokens).collect();
/// assert_eq!(windows.len(), 5);
/// assert_eq!(windows[0], &[0, 1, 2, 3]);
/// assert_eq!(windows[1], &[2, 3, 4, 5]);
/// assert_eq!(windows[4], &[8, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenWindows<'a> {
    tokens: &'a [TokenId],
    chunk_size: usize,
    stride: usize,
    start: usize,
}

impl<'a> TokenWindows<'a> {
    pub(crate) fn new(tokens: &'a [TokenId], chunk_size: usize, stride: usize) -> Self {
        debug_assert!(chunk_size > 0 && stride > 0);
        Self {
            tokens,
            chunk_size,
            stride,
            start: 0,
        }
    }
}

impl<'a> Iterator for TokenWindows<'a> {
    type Item = &'a [TokenId];

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.tokens.len() {
            return None;
        }
        let end = (self.start + self.chunk_size).min(self.tokens.len());
        let window = &self.tokens[self.start..end];
        self.start += self.stride;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.start);
        let count = remaining.div_ceil(self.stride);
        (count, Some(count))
    }
}

impl ExactSizeIterator for TokenWindows<'_> {}

impl std::iter::FusedIterator for TokenWindows<'_> {}

#[cfg(test)]
mod tests {
    use crate::ChunkConfig;

    fn windows(n: usize, size: usize, overlap: usize) -> Vec<Vec<u32>> {
        let tokens: Vec<u32> = (0..n as u32).collect();
        ChunkConfig::new(size, overlap)
            .unwrap()
            .windows(&tokens)
            .map(<[u32]>::to_vec)
            .collect()
    }

    #[test]
    fn test_no_overlap() {
        // 8 tokens, size 5: two windows of 5 and 3
        let w = windows(8, 5, 0);
        assert_eq!(w.len(), 2);
        assert_eq!(w[0], (0..5).collect::<Vec<u32>>());
        assert_eq!(w[1], (5..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_overlapping_walk() {
        // 10 tokens, size 4, overlap 2: starts at 0, 2, 4, 6, 8
        let w = windows(10, 4, 2);
        assert_eq!(w.len(), 5);
        assert_eq!(w[0], vec![0, 1, 2, 3]);
        assert_eq!(w[1], vec![2, 3, 4, 5]);
        assert_eq!(w[3], vec![6, 7, 8, 9]);
        assert_eq!(w[4], vec![8, 9]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(windows(0, 4, 2).is_empty());
    }

    #[test]
    fn test_sequence_fits_one_window() {
        let w = windows(3, 8, 2);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_every_token_covered() {
        for (n, size, overlap) in [(1, 1, 0), (7, 3, 1), (100, 16, 15), (10, 4, 2)] {
            let mut covered = vec![false; n];
            let tokens: Vec<u32> = (0..n as u32).collect();
            let config = ChunkConfig::new(size, overlap).unwrap();
            for window in config.windows(&tokens) {
                assert!(!window.is_empty() && window.len() <= size);
                for &t in window {
                    covered[t as usize] = true;
                }
            }
            assert!(covered.iter().all(|&c| c), "gap for n={n} size={size}");
        }
    }

    #[test]
    fn test_exact_size_hint() {
        let tokens: Vec<u32> = (0..10).collect();
        let config = ChunkConfig::new(4, 2).unwrap();
        let mut iter = config.windows(&tokens);
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_restartable() {
        let tokens: Vec<u32> = (0..10).collect();
        let config = ChunkConfig::new(4, 2).unwrap();
        let first: Vec<_> = config.windows(&tokens).collect();
        let second: Vec<_> = config.windows(&tokens).collect();
        assert_eq!(first, second);
    }
}
