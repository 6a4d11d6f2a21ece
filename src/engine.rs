//! Generic block-wise scan engine.
//!
//! The engine drives any [`ScanProblem`] from its initial frontier through
//! every layer, grouped into blocks of `block_size` layers, and stops as soon
//! as the problem reports that its frontier is settled.

use crate::blocks::{default_block_size, partition};
use crate::traits::ScanProblem;

/// What a single engine run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// Total number of layers the problem exposes.
    pub layers: usize,
    /// Layers actually folded into the frontier.
    pub layers_visited: usize,
    /// Blocks entered, including a partially visited last block.
    pub blocks_visited: usize,
    /// True if the scan settled before its last layer.
    pub settled_early: bool,
}

/// Scan engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use seq_dp::{problems::lis::LisProblem, ScanEngine};
///
/// let seq = [10, 9, 2, 5, 3, 7, 101, 18];
/// let engine = ScanEngine::new(LisProblem::new(&seq));
/// assert_eq!(engine.run(), 4);
/// ```
pub struct ScanEngine<P: ScanProblem> {
    problem: P,
    block_size: usize,
}

impl<P: ScanProblem> ScanEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Run the scan and return its cost.
    pub fn run(&self) -> P::Cost {
        self.run_with_stats().0
    }

    /// Run the scan and return its cost together with [`ScanStats`].
    pub fn run_with_stats(&self) -> (P::Cost, ScanStats) {
        let t = self.problem.num_layers();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("scan_run", layers = t, block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut stats = ScanStats {
            layers: t,
            ..ScanStats::default()
        };
        let mut frontier = self.problem.init_frontier();

        'blocks: for block in partition(t, self.block_size) {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("scan_block", start = block.start, end = block.end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            stats.blocks_visited += 1;
            for layer in block.layers() {
                self.problem.forward_step(layer, &mut frontier);
                stats.layers_visited += 1;
                if self.problem.is_settled(&frontier) {
                    stats.settled_early = stats.layers_visited < t;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(layer, early = stats.settled_early, "scan settled");
                    break 'blocks;
                }
            }
        }

        (self.problem.extract_cost(frontier), stats)
    }
}
