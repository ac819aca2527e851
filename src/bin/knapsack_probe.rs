use std::env;
use std::time::Instant;

use knapsack_dp::{compare, DpSolverBuilder, Instance, KnapsackSolver};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack Probe: DP exactness, greedy quality and table scaling");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("  • dp_exact: DP optimum matches brute force (up to {} items)", options.verify_limit);
    eprintln!("  • greedy_bound: greedy result is feasible and never beats DP");
    eprintln!("  • dp_capacity: table stays monotone as capacity grows");
    eprintln!();
    eprintln!("Metrics: wall_s (seconds), rss_delta_kib (memory delta), status");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Checking DP against brute-force enumeration...");
    measurements.extend(run_dp_exact(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] Comparing greedy against the DP optimum...");
    measurements.extend(run_greedy_bound(&mut sys));
    eprintln!();

    eprintln!("[3/3] Scaling the DP table along the capacity axis...");
    measurements.extend(run_dp_capacity(&mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("knapsack_probe output error: {err}");
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
        let mut verify_limit = 15usize;

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
                verify_limit = parse_verify_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_verify_limit(&value)?;
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
Usage: cargo run --bin knapsack_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv; json needs the `serde` feature)
  --verify-limit <N>            Largest item count checked by brute force, at most 24 (default: 15)
  -h, --help                    Print this help message

Examples:
  cargo run --bin knapsack_probe
  cargo run --bin knapsack_probe -- --format table --verify-limit 18
"
        );
    }
}

fn parse_verify_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit <= 24 => Ok(limit),
        Ok(_) => Err("verify limit must be at most 24 (brute force is 2^N)".to_string()),
        Err(_) => Err("verify limit must be a non-negative integer".to_string()),
    }
}

#[derive(Copy, Clone)]
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
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
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

fn run_dp_exact(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[4, 8, 12, 15, 18, 64, 256, 1024];
    let solver = DpSolverBuilder::new().build();
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, total, n);
            let (weights, values, capacity) = deterministic_instance(n, 1);
            let mut value_result = 0u64;
            let m = measure("dp_exact", format!("n={n},cap={capacity}"), sys, || {
                let instance = match Instance::new(&weights, &values, capacity) {
                    Ok(instance) => instance,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                let solution = match solver.solve(&instance) {
                    Ok(solution) => solution,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                value_result = solution.max_value;

                if solution.total_weight(&weights) > capacity {
                    return (
                        VerificationStatus::Failed,
                        Some("selected items exceed capacity".to_string()),
                    );
                }
                if n > options.verify_limit {
                    return (VerificationStatus::NotChecked, None);
                }
                let baseline = brute_force(&weights, &values, capacity);
                if baseline == solution.max_value {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {baseline}, got {}", solution.max_value)),
                    )
                }
            });
            eprintln!(
                "{} value={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                value_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_greedy_bound(sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 32, 128, 512, 1024];
    let solver = DpSolverBuilder::new().build();
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, total, n);
            let (weights, values, capacity) = deterministic_instance(n, 2);
            let mut ratio_result = 0.0f64;
            let m = measure("greedy_bound", format!("n={n},cap={capacity}"), sys, || {
                let cmp = match Instance::new(&weights, &values, capacity)
                    .and_then(|instance| compare(&solver, &instance))
                {
                    Ok(cmp) => cmp,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                ratio_result = cmp.greedy_ratio();

                if cmp.greedy.total_weight(&weights) > capacity {
                    (
                        VerificationStatus::Failed,
                        Some("greedy selection exceeds capacity".to_string()),
                    )
                } else if cmp.greedy.max_value > cmp.dp.max_value {
                    (
                        VerificationStatus::Failed,
                        Some(format!(
                            "greedy {} beats optimum {}",
                            cmp.greedy.max_value, cmp.dp.max_value
                        )),
                    )
                } else {
                    (VerificationStatus::Passed, Some(format!("gap={}", cmp.gap())))
                }
            });
            eprintln!(
                "{} greedy/optimum={:.4}, time={:.3}s, status={}",
                m.verification_status.icon(),
                ratio_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_dp_capacity(sys: &mut System) -> Vec<Measurement> {
    const CAPACITIES: &[u64] = &[256, 1024, 4096, 16384, 65536];
    const ITEMS: usize = 64;
    let solver = DpSolverBuilder::new().build();
    let (weights, values, _) = deterministic_instance(ITEMS, 3);
    let total = CAPACITIES.len();

    CAPACITIES
        .iter()
        .enumerate()
        .map(|(idx, &capacity)| {
            eprint!("      [{}/{}] capacity={}... ", idx + 1, total, capacity);
            let mut cells_result = 0usize;
            let m = measure("dp_capacity", format!("n={ITEMS},cap={capacity}"), sys, || {
                let solution = match Instance::new(&weights, &values, capacity)
                    .and_then(|instance| solver.solve(&instance))
                {
                    Ok(solution) => solution,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                cells_result = solution.table.len();

                let table = &solution.table;
                let (rows, cols) = table.dimensions();
                for i in 1..rows {
                    for j in 1..cols {
                        if table[(i, j)] < table[(i - 1, j)] || table[(i, j)] < table[(i, j - 1)] {
                            return (
                                VerificationStatus::Failed,
                                Some(format!("table decreases at ({i}, {j})")),
                            );
                        }
                    }
                }
                (VerificationStatus::Passed, None)
            });
            eprintln!(
                "{} cells={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                cells_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |status: VerificationStatus| {
        measurements
            .iter()
            .filter(|m| m.verification_status == status)
            .count()
    };
    let failed = count(VerificationStatus::Failed);
    eprintln!(
        "  {} runs: {} passed, {} failed, {} not checked",
        measurements.len(),
        count(VerificationStatus::Passed),
        failed,
        count(VerificationStatus::NotChecked)
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed runs:");
        for m in measurements
            .iter()
            .filter(|m| m.verification_status == VerificationStatus::Failed)
        {
            eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
            if let Some(ref detail) = m.verification_detail {
                eprintln!("     Error: {}", detail);
            }
        }
        eprintln!();
    }

    if failed == 0 {
        eprintln!("✓ All checked runs passed.");
    } else {
        eprintln!("✗ {} run(s) failed. Please review the errors above.", failed);
    }
    eprintln!("{}", "=".repeat(80));
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
            "{},\"{}\",{:.3},{},{},\"{}\"",
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

#[cfg(feature = "serde")]
fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(measurements).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn write_json(_measurements: &[Measurement]) -> Result<(), String> {
    Err("json output requires the `serde` feature".to_string())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Reproducible instance: weights in 1..=23, values in 1..=41, capacity at
/// half the total weight.
fn deterministic_instance(n: usize, offset: usize) -> (Vec<u64>, Vec<u64>, u64) {
    let weights: Vec<u64> = (0..n).map(|i| 1 + ((i * 7 + offset) % 23) as u64).collect();
    let values: Vec<u64> = (0..n)
        .map(|i| 1 + ((i * 13 + offset * 3) % 41) as u64)
        .collect();
    let capacity = weights.iter().sum::<u64>() / 2;
    (weights, values, capacity)
}

fn brute_force(weights: &[u64], values: &[u64], capacity: u64) -> u64 {
    let n = weights.len();
    let mut best = 0;
    for mask in 0u64..(1u64 << n) {
        let mut weight = 0;
        let mut value = 0;
        for i in 0..n {
            if mask & (1 << i) != 0 {
                weight += weights[i];
                value += values[i];
            }
        }
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}
