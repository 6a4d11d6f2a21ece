//! Scan problems shipped with the crate.
//!
//! Each module implements [`ScanProblem`](crate::traits::ScanProblem) for one
//! array algorithm and exposes a plain function for callers that only want
//! the answer:
//! - [`lis`]          : LIS length by the quadratic `best[i]` DP.
//! - [`lis_patience`] : LIS length by patience sorting, O(n log n).
//! - [`two_sum`]      : first index pair summing to a target.

pub mod lis;
pub mod lis_patience;
pub mod two_sum;
