//! Sequence DP (seq-dp)
//!
//! Two small array algorithms expressed as layered scans:
//! - the length of the longest strictly increasing subsequence (LIS), and
//! - the first pair of positions whose values sum to a target (two-sum).
//!
//! ## Core idea
//! 1. Model the algorithm as a left-to-right scan: one layer per input
//!    position, a frontier carried between layers.
//! 2. Implement the [`ScanProblem`] trait for that scan.
//! 3. Let [`ScanEngine`] walk the layers block by block, stopping early once
//!    the answer is settled.
//!
//! Most callers never touch the engine and use the free functions instead.
//!
//! ## Quick start
//! ```
//! use seq_dp::{find_two_sum, lis_length, lis_length_with, LisStrategy, SeqError};
//!
//! let seq = [10, 9, 2, 5, 3, 7, 101, 18];
//! assert_eq!(lis_length(&seq), 4);
//! assert_eq!(lis_length_with(&seq, LisStrategy::Patience), 4);
//!
//! assert_eq!(find_two_sum(&[3, 2, 4], 6), Ok((1, 2)));
//! assert!(matches!(
//!     find_two_sum(&[1, 2, 3], 100),
//!     Err(SeqError::NoSolution { .. })
//! ));
//! ```
//!
//! ## Features
//! - `parallel`: [`batch`] evaluates queries on rayon's thread pool.
//! - `tracing`: spans around engine runs and blocks.
//! - `fx-hash`: two-sum uses `FxHashMap` instead of the std `HashMap`.
//! - `heavy`: enables the large stress tests.

pub mod batch;
pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;

pub use crate::builder::ScanEngineBuilder;
pub use crate::engine::{ScanEngine, ScanStats};
pub use crate::error::{Result, SeqError};
pub use crate::problems::lis::{lis_length, lis_length_with, LisStrategy};
pub use crate::problems::two_sum::find_two_sum;
pub use crate::traits::ScanProblem;
