use std::collections::HashMap;
use std::env;
use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_dp::problems::{
    lis::LisProblem, lis_patience::LisPatienceProblem, two_sum::TwoSumProblem,
};
use seq_dp::{ScanEngine, SeqError};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("seq-dp Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs each scan over growing deterministic inputs and checks:");
    eprintln!(
        "  • Correctness: results match brute-force baselines (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time and RSS delta per run");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] LIS length, quadratic DP...");
    measurements.extend(run_lis_quadratic(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] LIS length, patience sorting...");
    measurements.extend(run_lis_patience(&options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Two-sum, single forward scan...");
    measurements.extend(run_two_sum(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input length checked against a baseline (default: 2048)
  -h, --help                    Print this help message

Examples:
  cargo run --release --features probe --bin scale_probe
  cargo run --release --features probe --bin scale_probe -- --format table --verify-limit 512"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn verify<T: PartialEq + std::fmt::Debug>(
    len: usize,
    options: &Options,
    got: &T,
    baseline: impl FnOnce() -> T,
) -> (VerificationStatus, Option<String>) {
    if len > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let expected = baseline();
    if expected == *got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, got {got:?}")),
        )
    }
}

fn run_lis_quadratic(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let seq = deterministic_values(len, 1);
            let mut result = 0usize;
            let m = measure("lis_quadratic", format!("len={len}"), sys, || {
                result = ScanEngine::new(LisProblem::new(&seq)).run();
                verify(len, options, &result, || full_lis_len(&seq))
            });
            eprintln!(
                "{} lis={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_lis_patience(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let seq = deterministic_values(len, 1);
            let mut result = 0usize;
            let m = measure("lis_patience", format!("len={len}"), sys, || {
                result = ScanEngine::new(LisPatienceProblem::new(&seq)).run();
                verify(len, options, &result, || full_lis_len(&seq))
            });
            eprintln!(
                "{} lis={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_two_sum(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            // Distinct even values; the only odd target is formed by the
            // trailing pair, so the scan has to walk the whole input.
            let mut seq: Vec<i64> = (0..len as i64).map(|i| i * 2).collect();
            if let Some(last) = seq.last_mut() {
                *last = 1;
            }
            let target = if len >= 2 { seq[len - 2] + 1 } else { -1 };
            let mut result: Result<(usize, usize), SeqError> =
                Err(SeqError::NoSolution { target, len });
            let m = measure("two_sum", format!("len={len}"), sys, || {
                result = ScanEngine::new(TwoSumProblem::new(&seq, target)).run();
                verify(len, options, &result, || full_two_sum(&seq, target))
            });
            let shown = match result {
                Ok((i, j)) => format!("({i}, {j})"),
                Err(err) => err.to_string(),
            };
            eprintln!(
                "{} pair={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                shown,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .count();
    let passed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Passed)
        .count();

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "  runs={}, passed={}, failed={}, not_checked={}",
        measurements.len(),
        passed,
        failed,
        measurements.len() - passed - failed
    );
    eprintln!();

    let mut by_scenario: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    let mut scenarios: Vec<_> = by_scenario.into_iter().collect();
    scenarios.sort_by_key(|(name, _)| *name);

    for (scenario, ms) in scenarios {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}:");
        eprintln!("    Runs: {}", ms.len());
        eprintln!("    Time: max={max_time:.3}s");
        eprintln!("    Memory: max_delta={max_mem} KiB");
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if first.wall_s > 0.0 {
                eprintln!(
                    "    Scaling: {:.1}x from smallest to largest",
                    last.wall_s / first.wall_s
                );
            }
        }
        eprintln!();
    }

    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.verification_detail {
            Some(ref d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Seeded values in [0, 10_000); the same seed always yields the same input.
fn deterministic_values(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..10_000)).collect()
}

fn full_lis_len(seq: &[i64]) -> usize {
    let mut best = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] && best[j] + 1 > best[i] {
                best[i] = best[j] + 1;
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

fn full_two_sum(seq: &[i64], target: i64) -> Result<(usize, usize), SeqError> {
    for j in 0..seq.len() {
        for i in 0..j {
            if seq[i] as i128 + seq[j] as i128 == target as i128 {
                return Ok((i, j));
            }
        }
    }
    Err(SeqError::NoSolution {
        target,
        len: seq.len(),
    })
}
