use anyhow::{ensure, Context, Result};
use busy_beaver::driver::{busy_beaver_with_progress, BusyBeaverReport};
use busy_beaver::{SearchConfig, StepBound};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "busy-beaver",
    about = "Exhaustive search for BB(n) and Sigma(n) over n-state, 2-symbol Turing machines"
)]
struct Cli {
    /// Smallest state count to search.
    #[arg(long, default_value_t = 1)]
    min_states: usize,
    /// Largest state count to search.
    #[arg(long, default_value_t = 4)]
    max_states: usize,
    /// Fixed per-machine step bound (default: 10^(n+3)).
    #[arg(long)]
    max_steps: Option<u64>,
    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,
    /// Print a progress line every this many machines (0 disables).
    #[arg(long, default_value_t = 100_000)]
    progress_interval: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ensure!(cli.min_states >= 1, "--min-states must be at least 1");

    let config = SearchConfig {
        step_bound: cli.max_steps.map_or(StepBound::Heuristic, StepBound::Fixed),
        threads: cli.threads,
        progress_interval: cli.progress_interval,
        ..SearchConfig::reference()
    };

    println!("=== Busy Beaver Problem ===");
    println!();
    println!("Note: BB(n) is the maximum steps, Sigma(n) is the maximum 1's");
    println!(
        "Computing for n={} to {} (larger n takes exponentially longer)",
        cli.min_states, cli.max_states
    );
    println!();

    for states in cli.min_states..=cli.max_states {
        println!("Computing BB({})...", states);
        let report = run_search(states, &config)?;
        print_report(&report);
    }

    println!("Warning: BB(5) and beyond are computationally intractable!");
    println!("BB(5) = 47,176,870 and requires examining 24^10 (about 6.3 * 10^13) machines.");

    Ok(())
}

fn run_search(states: usize, config: &SearchConfig) -> Result<BusyBeaverReport> {
    let space = busy_beaver::SearchSpace::new(states)
        .with_context(|| format!("cannot enumerate {}-state machines", states))?;
    println!("Total machines to test: {}", space.size());

    let progress = |examined: u64, total: u64| {
        println!("  Progress: {} / {}", examined, total);
    };
    busy_beaver_with_progress(states, config, &progress)
        .with_context(|| format!("search for BB({}) failed", states))
}

fn print_report(report: &BusyBeaverReport) {
    println!(
        "Machines that halted: {} / {}",
        report.halted_count, report.total_machines
    );

    let comparison = report.comparison();
    let flag = |matches: bool| if matches { " ✓" } else { "" };

    match comparison {
        Some(known) => {
            println!(
                "BB({}) = {} (known: {}){}",
                report.states,
                report.bb,
                known.known.bb,
                flag(known.bb_matches)
            );
            println!(
                "Sigma({}) = {} (known: {}){}",
                report.states,
                report.sigma,
                known.known.sigma,
                flag(known.sigma_matches)
            );
        }
        None => {
            println!("BB({}) = {}", report.states, report.bb);
            println!("Sigma({}) = {}", report.states, report.sigma);
        }
    }

    if let Some(champion) = report.step_champion() {
        tracing::info!(states = report.states, %champion, "step champion");
    }
    if let Some(champion) = report.ones_champion() {
        tracing::info!(states = report.states, %champion, "ones champion");
    }
    println!();
}
