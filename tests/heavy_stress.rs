#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_dp::{find_two_sum, lis_length_with, LisStrategy};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

#[test]
fn heavy_stress_lis_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(123);
    let seq = random_values(&mut rng, 20_000);
    let quadratic = lis_length_with(&seq, LisStrategy::Quadratic);
    let patience = lis_length_with(&seq, LisStrategy::Patience);
    assert_eq!(quadratic, patience);
    assert!(quadratic <= seq.len());
}

#[test]
fn heavy_stress_two_sum_full_scan() {
    let len = 2_000_000i64;
    let mut seq: Vec<i64> = (0..len).map(|i| i * 2).collect();
    seq.push(1);
    let target = 2 * (len - 1) + 1;
    assert_eq!(
        find_two_sum(&seq, target),
        Ok(((len - 1) as usize, len as usize))
    );
}
