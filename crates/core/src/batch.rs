//! Batch chunking
//!
//! Splits an ordered sequence into fixed-size groups for bulk submission.
//! SQS caps SendMessageBatch at 10 entries per call, so that is the chunk
//! size used by the queue client; the function itself is generic and takes
//! the size as a parameter.

/// Maximum number of entries the remote API accepts per bulk-submit call
pub const MAX_BATCH_SIZE: usize = 10;

/// Split `items` into chunks of at most `size` items, preserving order.
///
/// Every chunk has exactly `size` items except possibly the last; an empty
/// input yields no chunks. Concatenating the chunks reproduces the input.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunks_of<T>(items: &[T], size: usize) -> impl Iterator<Item = &[T]> {
    assert!(size > 0, "chunk size must be positive");
    items.chunks(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(chunks_of(&items, MAX_BATCH_SIZE).count(), 0);
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<u32> = (0..30).collect();
        let chunks: Vec<&[u32]> = chunks_of(&items, MAX_BATCH_SIZE).collect();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == MAX_BATCH_SIZE));
    }

    #[test]
    fn test_remainder_in_last_chunk() {
        let items: Vec<u32> = (0..25).collect();
        let chunks: Vec<&[u32]> = chunks_of(&items, MAX_BATCH_SIZE).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[1].len(), 10);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn test_single_partial_chunk() {
        let items = vec!["a", "b", "c"];
        let chunks: Vec<&[&str]> = chunks_of(&items, MAX_BATCH_SIZE).collect();
        assert_eq!(chunks, vec![&["a", "b", "c"][..]]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        for n in [0usize, 1, 9, 10, 11, 25, 30, 101] {
            let items: Vec<usize> = (0..n).collect();
            let rebuilt: Vec<usize> = chunks_of(&items, MAX_BATCH_SIZE)
                .flatten()
                .copied()
                .collect();
            assert_eq!(rebuilt, items);
            assert_eq!(chunks_of(&items, MAX_BATCH_SIZE).count(), n.div_ceil(10));
        }
    }

    #[test]
    #[should_panic(expected = "chunk size must be positive")]
    fn test_zero_size_panics() {
        let items = [1, 2, 3];
        let _ = chunks_of(&items, 0);
    }
}
