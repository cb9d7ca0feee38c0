//! Quiz simulator CLI - fast in-memory solver runs against the engine.
//!
//! Runs quiz attempts without any view or timer overhead, for checking
//! solver behavior and engine throughput in bulk.

mod output;
mod simulator;
mod solver;
mod types;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use engine::{derive_attempt_seed, RowMetrics};
use tracing::info;

use output::OutputWriter;
use simulator::Simulator;
use solver::{GreedySolver, RandomSolver, Solver};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "quiz-simulator")]
#[command(about = "Fast in-memory solver simulation for the reordering quiz")]
struct Args {
    /// Number of attempts to simulate
    #[arg(short, long, default_value = "1")]
    attempts: u32,

    /// Base seed (for deterministic runs); drawn from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Solver strategy
    #[arg(long, default_value = "greedy")]
    solver: SolverType,

    /// Give up on an attempt after this many drags
    #[arg(long, default_value = "10000")]
    max_moves: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum SolverType {
    Greedy,
    Random,
}

fn build_solver(kind: &SolverType, seed: u64) -> Box<dyn Solver> {
    let metrics = RowMetrics::default();
    match kind {
        SolverType::Greedy => Box::new(GreedySolver::new(metrics)),
        SolverType::Random => Box::new(RandomSolver::new(metrics, seed)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        base_seed,
        attempts = args.attempts,
        solver = ?args.solver,
        "starting simulation"
    );

    let simulator = Simulator::new(RowMetrics::default(), args.max_moves);
    let mut writer = OutputWriter::new(&args.output_dir, &args.output_format)?;

    let start = Instant::now();
    let mut solved = 0u32;
    let mut total_moves = 0u64;
    for attempt in 1..=args.attempts {
        let seed = derive_attempt_seed(base_seed, attempt);
        let mut solver = build_solver(&args.solver, seed);
        let record = simulator.run_attempt(attempt, seed, solver.as_mut());
        if record.solved {
            solved += 1;
        }
        total_moves += u64::from(record.moves);
        writer.write_attempt(&record)?;
    }
    let path = writer.finish()?;

    let mean_moves = total_moves as f64 / f64::from(args.attempts.max(1));
    info!(
        solved,
        attempts = args.attempts,
        mean_moves,
        elapsed_ms = start.elapsed().as_millis() as u64,
        output = %path.display(),
        "simulation complete"
    );
    Ok(())
}
