//! Example: longest strictly increasing subsequence length.
//!
//! Run with:
//! `cargo run --example lis`

use seq_dp::{lis_length, lis_length_with, problems::lis::LisProblem, LisStrategy, ScanEngine};

fn main() {
    let nums = [10, 9, 2, 5, 3, 7, 101, 18];

    println!("input: {nums:?}");
    println!("LIS length: {}", lis_length(&nums));
    println!(
        "LIS length (patience): {}",
        lis_length_with(&nums, LisStrategy::Patience)
    );

    let engine = ScanEngine::new(LisProblem::new(&nums));
    let (len, stats) = engine.run_with_stats();
    println!(
        "engine: len={len}, layers={}, blocks={} (block_size={})",
        stats.layers_visited,
        stats.blocks_visited,
        engine.block_size()
    );
}
