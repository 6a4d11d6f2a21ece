use seq_dp::{lis_length, lis_length_with, problems::lis::LisProblem, LisStrategy, ScanEngine};

#[test]
fn documented_examples() {
    for strategy in [LisStrategy::Quadratic, LisStrategy::Patience] {
        assert_eq!(lis_length_with::<i64>(&[], strategy), 0);
        assert_eq!(lis_length_with(&[5], strategy), 1);
        assert_eq!(lis_length_with(&[5, 4, 3, 2, 1], strategy), 1);
        assert_eq!(lis_length_with(&[1, 2, 3, 4, 5], strategy), 5);
        assert_eq!(lis_length_with(&[10, 9, 2, 5, 3, 7, 101, 18], strategy), 4);
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let seq = [3, 10, 2, 1, 20, 4, 6, 7, 8, 0];
    let first = lis_length(&seq);
    for _ in 0..10 {
        assert_eq!(lis_length(&seq), first);
        assert_eq!(ScanEngine::new(LisProblem::new(&seq)).run(), first);
    }
    assert_eq!(first, 5);
}

#[test]
fn constant_run_has_length_one() {
    let seq = vec![42i64; 200];
    assert_eq!(lis_length(&seq), 1);
    assert_eq!(lis_length_with(&seq, LisStrategy::Patience), 1);
}

#[test]
fn sawtooth() {
    // 0..5 repeated four times: any strictly increasing run is bounded by 5.
    let seq: Vec<i64> = (0..20).map(|i| i % 5).collect();
    assert_eq!(lis_length(&seq), 5);
    assert_eq!(lis_length_with(&seq, LisStrategy::Patience), 5);
}
