//! Longest strictly increasing subsequence length, quadratic DP.
//!
//! Layers are input positions. The frontier at layer `i` holds `best[0..i]`,
//! where `best[k]` is the length of the longest strictly increasing
//! subsequence ending exactly at position `k`, plus the running maximum.
//!
//! Stepping layer `i` scans every earlier position, so a full run costs
//! O(n²) comparisons and O(n) memory. See [`lis_patience`](super::lis_patience)
//! for the O(n log n) variant.

use std::fmt;
use std::str::FromStr;

use crate::problems::lis_patience::LisPatienceProblem;
use crate::traits::ScanProblem;
use crate::ScanEngine;

#[derive(Clone)]
pub struct LisProblem<'a, T> {
    pub seq: &'a [T],
}

/// DP row built so far.
#[derive(Clone, Debug, Default)]
pub struct LisFrontier {
    pub best: Vec<usize>, // length = layers visited
    pub longest: usize,
}

impl<'a, T: Ord> LisProblem<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self { seq }
    }
}

impl<T: Ord> ScanProblem for LisProblem<'_, T> {
    type Frontier = LisFrontier;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        LisFrontier {
            best: Vec::with_capacity(self.seq.len()),
            longest: 0,
        }
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) {
        let current = &self.seq[layer];
        let ending_here = self.seq[..layer]
            .iter()
            .zip(&frontier.best)
            .filter(|(earlier, _)| *earlier < current)
            .map(|(_, &len)| len + 1)
            .fold(1, usize::max);

        frontier.best.push(ending_here);
        frontier.longest = frontier.longest.max(ending_here);
    }

    fn extract_cost(&self, frontier: Self::Frontier) -> Self::Cost {
        frontier.longest
    }
}

/// How to compute an LIS length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LisStrategy {
    /// O(n²) DP over `best[i]`.
    #[default]
    Quadratic,
    /// O(n log n) patience sorting over `tails`.
    Patience,
}

impl LisStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            LisStrategy::Quadratic => "quadratic",
            LisStrategy::Patience => "patience",
        }
    }
}

impl fmt::Display for LisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LisStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "quadratic" => Ok(Self::Quadratic),
            "patience" => Ok(Self::Patience),
            other => Err(format!("unknown LIS strategy '{other}'")),
        }
    }
}

/// Length of the longest strictly increasing subsequence of `seq`.
///
/// Returns 0 for an empty slice and 1 for any non-empty slice without a
/// strictly increasing pair.
///
/// ```
/// assert_eq!(seq_dp::lis_length(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// assert_eq!(seq_dp::lis_length::<i32>(&[]), 0);
/// ```
pub fn lis_length<T: Ord>(seq: &[T]) -> usize {
    ScanEngine::new(LisProblem::new(seq)).run()
}

/// [`lis_length`] with an explicit [`LisStrategy`]. Both strategies return the
/// same value for every input.
pub fn lis_length_with<T: Ord>(seq: &[T], strategy: LisStrategy) -> usize {
    match strategy {
        LisStrategy::Quadratic => lis_length(seq),
        LisStrategy::Patience => ScanEngine::new(LisPatienceProblem::new(seq)).run(),
    }
}
