//! Error type shared by the fallible scans.

use thiserror::Error;

/// Errors reported by this crate.
///
/// Only the two-sum search can fail; the LIS scans are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A full scan found no two positions whose values sum to `target`.
    #[error("no two elements of a {len}-element sequence sum to {target}")]
    NoSolution { target: i64, len: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;
