//! Two-sum: the first pair of positions whose values add up to a target.
//!
//! Layers are input positions. The frontier maps every value seen so far to
//! the earliest position holding it, plus the pair found so far (if any).
//! Layer `j` looks up `target - seq[j]`; a hit at `i` settles the scan with
//! `(i, j)`. Otherwise `seq[j]` is recorded unless an earlier position
//! already holds it.
//!
//! Because the scan stops at the first hit and keeps first occurrences, the
//! returned pair has the smallest possible `j`, and for that `j` the smallest
//! possible `i`.

use crate::error::{Result, SeqError};
use crate::traits::ScanProblem;
use crate::ScanEngine;

/// Value -> earliest index map used by the scan.
#[cfg(feature = "fx-hash")]
pub type SeenMap = rustc_hash::FxHashMap<i64, usize>;
#[cfg(not(feature = "fx-hash"))]
pub type SeenMap = std::collections::HashMap<i64, usize>;

#[derive(Clone)]
pub struct TwoSumProblem<'a> {
    pub seq: &'a [i64],
    pub target: i64,
}

#[derive(Clone, Debug, Default)]
pub struct TwoSumFrontier {
    /// value -> earliest index
    pub seen: SeenMap,
    pub found: Option<(usize, usize)>,
}

impl<'a> TwoSumProblem<'a> {
    pub fn new(seq: &'a [i64], target: i64) -> Self {
        Self { seq, target }
    }
}

impl ScanProblem for TwoSumProblem<'_> {
    type Frontier = TwoSumFrontier;
    type Cost = Result<(usize, usize)>;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        TwoSumFrontier::default()
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) {
        let value = self.seq[layer];
        // An overflowing complement cannot be an i64 in the input.
        if let Some(&earlier) = self
            .target
            .checked_sub(value)
            .and_then(|complement| frontier.seen.get(&complement))
        {
            frontier.found = Some((earlier, layer));
            return;
        }
        frontier.seen.entry(value).or_insert(layer);
    }

    fn is_settled(&self, frontier: &Self::Frontier) -> bool {
        frontier.found.is_some()
    }

    fn extract_cost(&self, frontier: Self::Frontier) -> Self::Cost {
        frontier.found.ok_or(SeqError::NoSolution {
            target: self.target,
            len: self.seq.len(),
        })
    }
}

/// Find the first pair `(i, j)`, `i < j`, with `seq[i] + seq[j] == target`.
///
/// ```
/// use seq_dp::{find_two_sum, SeqError};
///
/// assert_eq!(find_two_sum(&[2, 7, 11, 15], 9), Ok((0, 1)));
/// assert_eq!(
///     find_two_sum(&[1, 2, 3], 100),
///     Err(SeqError::NoSolution { target: 100, len: 3 })
/// );
/// ```
pub fn find_two_sum(seq: &[i64], target: i64) -> Result<(usize, usize)> {
    ScanEngine::new(TwoSumProblem::new(seq, target)).run()
}
