//! Longest strictly increasing subsequence length via patience sorting.
//!
//! The frontier is `tails`, where `tails[k]` is the smallest value that ends
//! any strictly increasing subsequence of length `k + 1` seen so far. `tails`
//! is strictly increasing, so each layer places its value with one binary
//! search: the first tail `>= value` is replaced, or the value is appended.
//! Using the lower bound (not the upper bound) keeps equal values from
//! extending a run.

use crate::traits::ScanProblem;

#[derive(Clone)]
pub struct LisPatienceProblem<'a, T> {
    pub seq: &'a [T],
}

impl<'a, T: Ord> LisPatienceProblem<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self { seq }
    }
}

impl<'a, T: Ord> ScanProblem for LisPatienceProblem<'a, T> {
    // Tails are borrowed from the input; nothing is cloned.
    type Frontier = Vec<&'a T>;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        Vec::new()
    }

    fn forward_step(&self, layer: usize, tails: &mut Self::Frontier) {
        let seq: &'a [T] = self.seq;
        let value = &seq[layer];
        let slot = tails.partition_point(|&tail| tail < value);
        if slot == tails.len() {
            tails.push(value);
        } else {
            tails[slot] = value;
        }
    }

    fn extract_cost(&self, tails: Self::Frontier) -> Self::Cost {
        tails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScanEngine;

    fn run(seq: &[i64]) -> usize {
        ScanEngine::new(LisPatienceProblem::new(seq)).run()
    }

    #[test]
    fn documented_cases() {
        assert_eq!(run(&[]), 0);
        assert_eq!(run(&[5]), 1);
        assert_eq!(run(&[5, 4, 3, 2, 1]), 1);
        assert_eq!(run(&[1, 2, 3, 4, 5]), 5);
        assert_eq!(run(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
    }

    #[test]
    fn tails_stay_strictly_increasing() {
        let seq = [10, 9, 2, 5, 3, 7, 101, 18, 3, 3, 4];
        let problem = LisPatienceProblem::new(&seq);
        let mut tails = problem.init_frontier();
        for layer in 0..seq.len() {
            problem.forward_step(layer, &mut tails);
            assert!(tails.windows(2).all(|w| w[0] < w[1]), "{tails:?}");
        }
        let tails: Vec<i64> = tails.into_iter().copied().collect();
        assert_eq!(tails, vec![2, 3, 4, 18]);
    }

    #[test]
    fn duplicates_replace_instead_of_append() {
        assert_eq!(run(&[2, 2, 2]), 1);
        assert_eq!(run(&[1, 5, 5, 5, 6]), 3);
    }
}
