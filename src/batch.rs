//! Evaluate many independent queries in one call.
//!
//! With the `parallel` feature the queries are spread over rayon's global
//! pool; without it they run one after another. Output order always matches
//! input order, and the two modes return identical results. Both modes share
//! the same `Sync` bounds, so enabling `parallel` never breaks a caller.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::problems::lis::{lis_length_with, LisStrategy};
use crate::problems::two_sum::find_two_sum;

/// A single two-sum query.
#[derive(Clone, Copy, Debug)]
pub struct TwoSumQuery<'a> {
    pub seq: &'a [i64],
    pub target: i64,
}

impl<'a> TwoSumQuery<'a> {
    pub fn new(seq: &'a [i64], target: i64) -> Self {
        Self { seq, target }
    }
}

/// LIS length of every sequence in `sequences`.
#[cfg(feature = "parallel")]
pub fn lis_lengths<S, T>(sequences: &[S], strategy: LisStrategy) -> Vec<usize>
where
    S: AsRef<[T]> + Sync,
    T: Ord + Sync,
{
    sequences
        .par_iter()
        .map(|seq| lis_length_with(seq.as_ref(), strategy))
        .collect()
}

/// LIS length of every sequence in `sequences`.
#[cfg(not(feature = "parallel"))]
pub fn lis_lengths<S, T>(sequences: &[S], strategy: LisStrategy) -> Vec<usize>
where
    S: AsRef<[T]> + Sync,
    T: Ord + Sync,
{
    sequences
        .iter()
        .map(|seq| lis_length_with(seq.as_ref(), strategy))
        .collect()
}

/// Two-sum result for every query, in input order.
#[cfg(feature = "parallel")]
pub fn find_two_sums(queries: &[TwoSumQuery<'_>]) -> Vec<Result<(usize, usize)>> {
    queries
        .par_iter()
        .map(|q| find_two_sum(q.seq, q.target))
        .collect()
}

/// Two-sum result for every query, in input order.
#[cfg(not(feature = "parallel"))]
pub fn find_two_sums(queries: &[TwoSumQuery<'_>]) -> Vec<Result<(usize, usize)>> {
    queries
        .iter()
        .map(|q| find_two_sum(q.seq, q.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqError;

    #[test]
    fn lis_batch_keeps_order() {
        let seqs: Vec<Vec<i64>> = vec![
            vec![],
            vec![5],
            vec![5, 4, 3, 2, 1],
            vec![1, 2, 3, 4, 5],
            vec![10, 9, 2, 5, 3, 7, 101, 18],
        ];
        for strategy in [LisStrategy::Quadratic, LisStrategy::Patience] {
            assert_eq!(lis_lengths(&seqs, strategy), vec![0, 1, 1, 5, 4]);
        }
    }

    #[test]
    fn two_sum_batch_keeps_order() {
        let a = [2, 7, 11, 15];
        let b = [3, 2, 4];
        let c = [1, 2, 3];
        let queries = [
            TwoSumQuery::new(&a, 9),
            TwoSumQuery::new(&b, 6),
            TwoSumQuery::new(&c, 100),
        ];
        assert_eq!(
            find_two_sums(&queries),
            vec![
                Ok((0, 1)),
                Ok((1, 2)),
                Err(SeqError::NoSolution { target: 100, len: 3 }),
            ]
        );
    }

    /// Compiles against the shared bounds in either feature mode.
    fn lengths_for<S, T>(sequences: &[S]) -> Vec<usize>
    where
        S: AsRef<[T]> + Sync,
        T: Ord + Sync,
    {
        lis_lengths(sequences, LisStrategy::Patience)
    }

    #[test]
    fn bounds_do_not_depend_on_features() {
        let words: Vec<Vec<&str>> = vec![vec!["b", "a", "c"], vec![], vec!["z", "y"]];
        assert_eq!(lengths_for(&words), vec![2, 0, 1]);
    }

    #[test]
    fn empty_batches() {
        let none: [Vec<i32>; 0] = [];
        assert!(lis_lengths(&none, LisStrategy::default()).is_empty());
        assert!(find_two_sums(&[]).is_empty());
    }
}
