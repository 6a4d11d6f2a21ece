//! Example: first pair of indices summing to a target.
//!
//! Run with:
//! `cargo run --example two_sum`

use seq_dp::find_two_sum;

fn main() {
    let queries: [(&[i64], i64); 3] = [(&[2, 7, 11, 15], 9), (&[3, 2, 4], 6), (&[1, 2, 3], 100)];

    for (nums, target) in queries {
        match find_two_sum(nums, target) {
            Ok((i, j)) => println!("{nums:?}, target {target}: [{i}, {j}]"),
            Err(err) => println!("{nums:?}, target {target}: {err}"),
        }
    }
}
