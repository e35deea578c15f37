use std::env;
use std::time::Instant;

use classic_dp::problems::{
    coin_change::{CoinChangeProblem, CoinWaysProblem},
    edit_distance::EditDistanceProblem,
    knapsack::KnapsackProblem,
    lcs::LcsProblem,
    lis::LisProblem,
};
use classic_dp::{DpEngine, DpProblem, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dp_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    init_tracing();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("classic-dp probe: strategy timing and cross-checking");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Timed strategy: {}", options.strategy);
    eprintln!(
        "Instances with recursion depth <= {} are cross-checked across all strategies.",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/6] 0/1 knapsack");
    measurements.extend(run_knapsack(&options, &mut sys));
    eprintln!("[2/6] Edit distance");
    measurements.extend(run_edit_distance(&options, &mut sys));
    eprintln!("[3/6] Longest common subsequence");
    measurements.extend(run_lcs(&options, &mut sys));
    eprintln!("[4/6] Longest increasing subsequence");
    measurements.extend(run_lis(&options, &mut sys));
    eprintln!("[5/6] Coin change (fewest coins)");
    measurements.extend(run_coin_min(&options, &mut sys));
    eprintln!("[6/6] Coin change (number of ways)");
    measurements.extend(run_coin_ways(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("dp_probe output error: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

struct Options {
    format: OutputFormat,
    strategy: Strategy,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut strategy = Strategy::Tabulated;
        let mut verify_limit = 2_000usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (key, inline) = match arg.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {key}")),
                }
            };
            match key.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--strategy" => strategy = value()?.parse().map_err(|e| format!("{e}"))?,
                "--verify-limit" => {
                    verify_limit = value()?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a non-negative integer".to_string())?
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            strategy,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin dp_probe [-- <options>]

Options:
  --format <csv|table|json>                  Output format (default: csv)
  --strategy <memoized|tabulated|compact>    Strategy to time (default: tabulated)
  --verify-limit <N>                         Largest recursion depth to cross-check (default: 2000)
  -h, --help                                 Print this help message

Examples:
  cargo run --bin dp_probe
  cargo run --bin dp_probe -- --format table --strategy compact
  RUST_LOG=classic_dp=debug cargo run --bin dp_probe -- --verify-limit 500
"
        );
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
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    value: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
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

/// Time the selected strategy on one instance and cross-check it when the
/// memoized strategy can safely recurse that deep.
fn probe<P>(problem: P, size_desc: String, options: &Options, sys: &mut System) -> Measurement
where
    P: DpProblem,
{
    let scenario = problem.name();
    let depth = problem.recursion_depth();
    let engine = DpEngine::with_strategy(problem, options.strategy);

    let timed_memoized_too_deep =
        options.strategy == Strategy::Memoized && depth > options.verify_limit;

    let before = rss_kib(sys);
    let start = Instant::now();
    let value = if timed_memoized_too_deep {
        None
    } else {
        Some(engine.run())
    };
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (status, detail) = match value {
        None => (
            VerificationStatus::NotChecked,
            Some(format!("recursion depth {depth} exceeds verify limit")),
        ),
        Some(_) if depth > options.verify_limit => (VerificationStatus::NotChecked, None),
        Some(v) => verify(&engine, v),
    };

    let m = Measurement {
        scenario,
        size_desc,
        value: value.map(|v| format!("{v:?}")).unwrap_or_default(),
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    };
    eprintln!(
        "      {} {} {}: value={}, time={:.3}s, status={}",
        m.verification_status.icon(),
        m.scenario,
        m.size_desc,
        m.value,
        m.wall_s,
        m.verification_status.label()
    );
    m
}

fn verify<P: DpProblem>(engine: &DpEngine<P>, timed: P::Value) -> (VerificationStatus, Option<String>) {
    match engine.cross_check() {
        Ok(agreed) if agreed == timed => (VerificationStatus::Passed, None),
        Ok(agreed) => (
            VerificationStatus::Failed,
            Some(format!("cross-check agreed on {agreed:?}, timed run gave {timed:?}")),
        ),
        Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
    }
}

fn run_knapsack(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const CONFIGS: &[(usize, usize)] = &[(25, 100), (100, 250), (400, 1_000), (1_600, 4_000)];
    CONFIGS
        .iter()
        .map(|&(items, capacity)| {
            let weights: Vec<usize> = (0..items).map(|i| (i * 7 + 3) % 50 + 1).collect();
            let values: Vec<u64> = (0..items).map(|i| ((i * 13 + 5) % 100 + 1) as u64).collect();
            match KnapsackProblem::new(&weights, &values, capacity) {
                Ok(problem) => probe(problem, format!("items={items},capacity={capacity}"), options, sys),
                Err(err) => failed("knapsack", err.to_string()),
            }
        })
        .collect()
}

fn run_edit_distance(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[100, 500, 1_000, 2_000, 4_000];
    SIZES
        .iter()
        .map(|&len| {
            let a = deterministic_letters(len, 0);
            let b = deterministic_letters(len, 3);
            probe(
                EditDistanceProblem::new(&a, &b),
                format!("len={len}"),
                options,
                sys,
            )
        })
        .collect()
}

fn run_lcs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[100, 500, 1_000, 2_000, 4_000];
    SIZES
        .iter()
        .map(|&len| {
            let a = deterministic_letters(len, 1);
            let b = deterministic_letters(len, 5);
            probe(LcsProblem::new(&a, &b), format!("len={len}"), options, sys)
        })
        .collect()
}

fn run_lis(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[100, 500, 1_000, 2_000, 8_000];
    SIZES
        .iter()
        .map(|&len| {
            let seq: Vec<u32> = (0..len as u32).map(|i| (i * 7_919 + 13) % 1_000).collect();
            probe(LisProblem::new(&seq), format!("len={len}"), options, sys)
        })
        .collect()
}

fn run_coin_min(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const COINS: &[usize] = &[1, 2, 5, 10, 25, 50];
    const AMOUNTS: &[usize] = &[100, 500, 1_000, 5_000, 50_000];
    AMOUNTS
        .iter()
        .map(|&amount| match CoinChangeProblem::new(COINS, amount) {
            Ok(problem) => probe(problem, format!("amount={amount}"), options, sys),
            Err(err) => failed("coin_change_min", err.to_string()),
        })
        .collect()
}

fn run_coin_ways(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const COINS: &[usize] = &[1, 2, 5, 10, 25, 50];
    const AMOUNTS: &[usize] = &[100, 500, 1_000, 5_000];
    AMOUNTS
        .iter()
        .map(|&amount| match CoinWaysProblem::new(COINS, amount) {
            Ok(problem) => probe(problem, format!("amount={amount}"), options, sys),
            Err(err) => failed("coin_change_ways", err.to_string()),
        })
        .collect()
}

fn failed(scenario: &'static str, detail: String) -> Measurement {
    Measurement {
        scenario,
        size_desc: String::new(),
        value: String::new(),
        wall_s: 0.0,
        rss_delta_kib: 0,
        verification_status: VerificationStatus::Failed,
        verification_detail: Some(detail),
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (depth > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

/// Output columns; numeric cells are right-aligned and never quoted.
const COLUMNS: [(&str, bool); 7] = [
    ("scenario", false),
    ("size", false),
    ("value", false),
    ("wall_s", true),
    ("rss_delta_kib", true),
    ("status", false),
    ("detail", false),
];

impl Measurement {
    /// Cells in [`COLUMNS`] order. Double quotes are folded to single ones
    /// so every writer can quote text cells without escaping.
    fn cells(&self) -> [String; 7] {
        [
            self.scenario.to_string(),
            self.size_desc.clone(),
            self.value.replace('"', "'"),
            format!("{:.3}", self.wall_s),
            self.rss_delta_kib.to_string(),
            self.verification_status.label().to_string(),
            self.verification_detail
                .as_deref()
                .unwrap_or_default()
                .replace('"', "'"),
        ]
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    let header: Vec<&str> = COLUMNS.iter().map(|(name, _)| *name).collect();
    println!("{}", header.join(","));
    for m in measurements {
        let row: Vec<String> = m
            .cells()
            .into_iter()
            .zip(COLUMNS)
            .map(|(cell, (_, numeric))| if numeric { cell } else { format!("\"{cell}\"") })
            .collect();
        println!("{}", row.join(","));
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let rows: Vec<[String; 7]> = measurements.iter().map(Measurement::cells).collect();
    let mut widths = COLUMNS.map(|(name, _)| name.len());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 7]| -> String {
        cells
            .iter()
            .zip(widths)
            .zip(COLUMNS)
            .map(|((cell, w), (_, numeric))| {
                if numeric {
                    format!("{cell:>w$}")
                } else {
                    format!("{cell:<w$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", render(COLUMNS.map(|(name, _)| name)));
    println!("{}", widths.map(|w| "-".repeat(w)).join("  "));
    for row in &rows {
        println!("{}", render(row.each_ref().map(String::as_str)));
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let fields: Vec<String> = m
            .cells()
            .into_iter()
            .zip(COLUMNS)
            .map(|(cell, (name, numeric))| match (numeric, cell.is_empty()) {
                (true, _) => format!("\"{name}\":{cell}"),
                (false, true) if name == "detail" => format!("\"{name}\":null"),
                (false, _) => format!("\"{name}\":\"{cell}\""),
            })
            .collect();
        let sep = if idx + 1 == measurements.len() { "" } else { "," };
        println!("  {{{}}}{sep}", fields.join(","));
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

fn deterministic_letters(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + offset * 11 + i / 5) % ALPHABET.len()])
        .collect()
}
