//! Block partitioning of the layer dimension.
//!
//! The engine walks layers in contiguous blocks `[start, end)`. Blocks only
//! group work for instrumentation and early-exit bookkeeping; they never
//! change what a scan computes.

use std::ops::Range;

/// A contiguous interval of layers [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// Inclusive start layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
}

impl BlockRange {
    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The layers covered by this block.
    #[inline]
    pub fn layers(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Heuristic block size for `T` layers: ⌈√T⌉, and 1 for `T <= 1`.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Split `[0, num_layers)` into consecutive blocks of at most `block_size`
/// layers. The last block may be shorter; zero layers yield no blocks.
///
/// # Panics
/// Panics if `block_size == 0`.
pub fn partition(num_layers: usize, block_size: usize) -> impl Iterator<Item = BlockRange> {
    assert!(block_size > 0, "block_size must be positive");
    (0..num_layers.div_ceil(block_size)).map(move |k| BlockRange {
        start: k * block_size,
        end: ((k + 1) * block_size).min(num_layers),
    })
}
