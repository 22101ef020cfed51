// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `satchel`: command line front end to the knapsack solver.
//!
//! - `satchel solve` reads a `value,weight` file and solves it once.
//! - `satchel bench` times the solver on random instances of growing size and
//!   writes one CSV row per size.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use satchel_bnb::{frontier::FrontierKind, result::BnbSolverOutcome};
use satchel_model::{generation::InstanceGenerator, loading::ItemLoader, model::ModelBuilder};
use satchel_solver::solver::SolverBuilder;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

const BENCH_HEADER: &str = "items,avg_solve_ms,generate_ms";

#[derive(Debug, Parser)]
#[command(
    name = "satchel",
    version,
    about = "Branch-and-bound solver for the 0/1 knapsack problem"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance read from a `value,weight` file.
    Solve(SolveArgs),
    /// Time the solver on random instances of 1..=max-items items.
    Bench(BenchArgs),
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Path to the item file.
    #[arg(short, long)]
    input: PathBuf,

    /// Knapsack capacity.
    #[arg(short, long)]
    capacity: f64,

    /// Traversal order of the search tree (fifo, lifo or best).
    #[arg(long, default_value_t = FrontierKind::Fifo)]
    frontier: FrontierKind,

    /// Stop after this many seconds and report the best packing found.
    #[arg(long)]
    time_limit: Option<f64>,

    /// Stop after exploring this many nodes.
    #[arg(long)]
    node_limit: Option<u64>,

    /// Log a progress line every second.
    #[arg(long)]
    progress: bool,

    /// Skip the first line of the input file.
    #[arg(long)]
    has_header: bool,
}

#[derive(Debug, Args)]
struct BenchArgs {
    /// Largest instance size.
    #[arg(long, default_value_t = 30)]
    max_items: usize,

    /// Instances solved per size.
    #[arg(long, default_value_t = 1000)]
    probes: u32,

    /// Knapsack capacity.
    #[arg(long, default_value_t = 4.0)]
    capacity: f32,

    /// Scale of the generated item values.
    #[arg(long, default_value_t = 100.0)]
    max_value: f32,

    /// Seed for the instance generator. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// CSV file receiving one `items,avg_solve_ms,generate_ms` row per size.
    #[arg(long, default_value = "res/KnapsackBenchResults.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Bench(args) => run_bench(args),
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let time_limit = args.time_limit.map(parse_time_limit).transpose()?;

    println!("|===== Knapsack Solver ====|");

    let items = ItemLoader::new()
        .has_header(args.has_header)
        .from_path::<f64, _>(&args.input)
        .with_context(|| format!("failed to load items from {}", args.input.display()))?;
    let model = ModelBuilder::from_items(args.capacity, &items)
        .build()
        .with_context(|| format!("invalid instance in {}", args.input.display()))?;

    let mut builder = SolverBuilder::new().with_frontier(args.frontier);
    if let Some(limit) = time_limit {
        builder = builder.with_time_limit(limit);
    }
    if let Some(limit) = args.node_limit {
        builder = builder.with_node_limit(limit);
    }
    if args.progress {
        builder = builder.with_logging(Duration::from_secs(1));
    }
    let mut solver = builder.build();

    let start = Instant::now();
    let outcome = solver.solve(&model);
    let elapsed = start.elapsed();

    print!("{}", format_outcome(&outcome, items.len(), elapsed));
    log::debug!("\n{}", outcome.statistics());
    Ok(())
}

fn parse_time_limit(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).with_context(|| {
        format!("--time-limit must be a non-negative number of seconds, got {secs}")
    })
}

fn format_outcome(outcome: &BnbSolverOutcome, set_size: usize, elapsed: Duration) -> String {
    format!(
        "Set size: {}\nResult: {}\nTermination: {}\nProcessing Time: {:.6}ms\n{}",
        set_size,
        outcome.objective(),
        outcome.termination_reason(),
        elapsed.as_secs_f64() * 1e3,
        outcome.result().solution()
    )
}

fn run_bench(args: BenchArgs) -> Result<()> {
    if args.probes == 0 {
        bail!("--probes must be at least 1");
    }
    if !args.max_value.is_finite() || args.max_value < 0.0 {
        bail!("--max-value must be a non-negative number, got {}", args.max_value);
    }

    let mut csv = create_output(&args.output)?;
    let mut generator = match args.seed {
        Some(seed) => InstanceGenerator::<f32>::seeded(seed),
        None => InstanceGenerator::<f32>::from_entropy(),
    }
    .with_max_value(args.max_value);

    log::info!(
        "Benchmarking sizes 1..={} with {} probes each, capacity {}",
        args.max_items,
        args.probes,
        args.capacity
    );

    write_bench(&args, &mut generator, &mut csv)?;
    csv.flush()
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}

/// Creates `path` and any missing parent directories.
fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes the header and one row per instance size to stdout and `csv`.
fn write_bench<W: Write>(
    args: &BenchArgs,
    generator: &mut InstanceGenerator<f32>,
    csv: &mut W,
) -> Result<()> {
    println!("{BENCH_HEADER}");
    writeln!(csv, "{BENCH_HEADER}")?;

    for num_items in 1..=args.max_items {
        let mut solve_time = Duration::ZERO;
        let mut generate_time = Duration::ZERO;

        for _ in 0..args.probes {
            let start = Instant::now();
            let mut items = generator.generate(num_items);
            generate_time += start.elapsed();

            let start = Instant::now();
            let best = satchel_solver::solve(&mut items, args.capacity)
                .context("generated instance was rejected")?;
            solve_time += start.elapsed();
            std::hint::black_box(best);
        }

        let row = bench_row(num_items, solve_time, generate_time, args.probes);
        println!("{row}");
        writeln!(csv, "{row}")?;
    }
    Ok(())
}

/// `generate_ms` is the total over all probes, `avg_solve_ms` the mean per probe.
fn bench_row(
    num_items: usize,
    solve_time: Duration,
    generate_time: Duration,
    probes: u32,
) -> String {
    let avg_solve_ms = solve_time.as_secs_f64() * 1e3 / f64::from(probes);
    let generate_ms = generate_time.as_secs_f64() * 1e3;
    format!("{},{},{}", num_items, avg_solve_ms, generate_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::item::Item;

    fn bench_args(output: PathBuf) -> BenchArgs {
        BenchArgs {
            max_items: 3,
            probes: 2,
            capacity: 4.0,
            max_value: 100.0,
            seed: Some(7),
            output,
        }
    }

    #[test]
    fn test_parse_time_limit_accepts_seconds() {
        assert_eq!(parse_time_limit(1.5).unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_time_limit(0.0).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_time_limit_rejects_unrepresentable() {
        for secs in [1e30, -1.0, f64::NAN, f64::INFINITY] {
            let err = parse_time_limit(secs).unwrap_err();
            assert!(err.to_string().contains("--time-limit"), "{err}");
        }
    }

    #[test]
    fn test_format_outcome_reports_classic_instance() {
        let items = [
            Item::new(60.0, 10.0),
            Item::new(100.0, 20.0),
            Item::new(120.0, 30.0),
        ];
        let model = ModelBuilder::from_items(50.0, &items).build().unwrap();
        let outcome = SolverBuilder::new().build().solve(&model);

        let text = format_outcome(&outcome, items.len(), Duration::from_micros(1500));
        assert!(text.starts_with("Set size: 3\nResult: 220\n"), "{text}");
        assert!(text.contains("Termination: Optimality Proven\n"), "{text}");
        assert!(text.contains("Processing Time: 1.500000ms\n"), "{text}");
        assert!(text.contains("Selected Items:  1, 2"), "{text}");
    }

    #[test]
    fn test_bench_row_averages_solve_time_only() {
        let row = bench_row(5, Duration::from_secs(2), Duration::from_secs(1), 4);
        assert_eq!(row, "5,500,1000");
    }

    #[test]
    fn test_bench_writes_header_and_one_row_per_size() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("res").join("nested").join("bench.csv");

        run_bench(bench_args(output.clone())).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], BENCH_HEADER);
        for (size, line) in (1..=3).zip(&lines[1..]) {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells.len(), 3);
            assert_eq!(cells[0], size.to_string());
            for cell in &cells[1..] {
                let ms: f64 = cell.parse().unwrap();
                assert!(ms >= 0.0 && ms.is_finite());
            }
        }
    }

    #[test]
    fn test_bench_rejects_invalid_arguments_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bench.csv");

        for max_value in [-5.0, f32::NAN, f32::INFINITY] {
            let mut args = bench_args(output.clone());
            args.max_value = max_value;
            let err = run_bench(args).unwrap_err();
            assert!(err.to_string().contains("--max-value"), "{err}");
        }

        let mut args = bench_args(output.clone());
        args.probes = 0;
        assert!(run_bench(args).is_err());

        assert!(!output.exists());
    }
}
