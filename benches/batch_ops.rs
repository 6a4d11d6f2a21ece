use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_dp::{
    batch::{find_two_sums, lis_lengths, TwoSumQuery},
    LisStrategy,
};

fn random_batch(rng: &mut StdRng, count: usize, len: usize) -> Vec<Vec<i64>> {
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect())
        .collect()
}

fn bench_batches(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let seqs = random_batch(&mut rng, 64, 2_048);
    let queries: Vec<TwoSumQuery<'_>> = seqs
        .iter()
        .map(|s| TwoSumQuery::new(s, 30_000))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("lis_quadratic_64x2048", |b| {
        b.iter(|| black_box(lis_lengths(black_box(&seqs), LisStrategy::Quadratic)))
    });
    group.bench_function("lis_patience_64x2048", |b| {
        b.iter(|| black_box(lis_lengths(black_box(&seqs), LisStrategy::Patience)))
    });
    group.bench_function("two_sum_64x2048", |b| {
        b.iter(|| black_box(find_two_sums(black_box(&queries))))
    });
    group.finish();
}

criterion_group!(benches, bench_batches);
criterion_main!(benches);
