//! Core trait definitions for layered scans.
//!
//! To run an array algorithm through [`ScanEngine`](crate::engine::ScanEngine),
//! implement [`ScanProblem`] for a problem struct that captures the instance
//! (the input slice plus any query parameters).
//!
//! The trait encodes a left-to-right recurrence over input positions:
//! - Layered structure: layers 0..T, one per input position.
//! - Frontier: everything the scan must remember about layers already seen.
//! - Settling: a scan may declare its answer final before the last layer.
//! - Extraction: the cost is read off the frontier once the scan stops.
//!
//! The engine only sequences these primitives; it never inspects the frontier.

/// Trait for a single-pass scan over a fixed input.
///
/// Semantics:
/// - There are `T = num_layers()` layers, normally the input length.
/// - `forward_step(i, frontier)` folds layer `i` into the frontier.
/// - After each step the engine asks `is_settled`; once it returns `true` no
///   further layers are visited.
/// - `extract_cost` consumes the frontier left by the last visited layer.
pub trait ScanProblem {
    /// State carried between layers (DP array, lookup map, ...).
    type Frontier;

    /// Result of the scan.
    type Cost;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Frontier before any layer has been visited.
    fn init_frontier(&self) -> Self::Frontier;

    /// Fold layer `layer` into `frontier`.
    ///
    /// Layers are visited in increasing order, each exactly once, and
    /// `layer < num_layers()` always holds.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Whether the frontier already determines the final cost.
    ///
    /// Defaults to `false`, i.e. every layer is visited.
    fn is_settled(&self, _frontier: &Self::Frontier) -> bool {
        false
    }

    /// Read the cost off the final frontier.
    fn extract_cost(&self, frontier: Self::Frontier) -> Self::Cost;
}
