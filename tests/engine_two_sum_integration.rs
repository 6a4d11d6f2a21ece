use seq_dp::{find_two_sum, problems::two_sum::TwoSumProblem, ScanEngine, SeqError};

#[test]
fn documented_examples() {
    assert_eq!(find_two_sum(&[2, 7, 11, 15], 9), Ok((0, 1)));
    assert_eq!(find_two_sum(&[3, 2, 4], 6), Ok((1, 2)));
    assert_eq!(
        find_two_sum(&[1, 2, 3], 100),
        Err(SeqError::NoSolution { target: 100, len: 3 })
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let seq = [5, 1, 4, 2, 3, 0, 5];
    let first = find_two_sum(&seq, 5);
    assert_eq!(first, Ok((1, 2)));
    for _ in 0..10 {
        assert_eq!(find_two_sum(&seq, 5), first);
        assert_eq!(ScanEngine::new(TwoSumProblem::new(&seq, 5)).run(), first);
    }
}

#[test]
fn no_solution_is_surfaced_as_error() {
    let err = find_two_sum(&[1, 2, 3], 100).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no two elements of a 3-element sequence sum to 100"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

#[test]
fn pair_at_the_very_end() {
    let mut seq: Vec<i64> = (0..1000).map(|i| i * 2).collect();
    seq.push(1);
    let target = 2 * 999 + 1;
    assert_eq!(find_two_sum(&seq, target), Ok((999, 1000)));
}
