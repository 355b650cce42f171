//! `advent`: runs archived Advent of Code solutions against local input files

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Linked for its `#[derive(Puzzle)]` registrations
use advent_puzzles as _;

use advent_core::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the `-v` count picks the level.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    debug!(puzzles = registry.len(), "registry built");

    if config.list {
        let puzzles: Vec<_> = registry
            .iter_info()
            .filter(|info| config.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| config.day_filter.is_none_or(|d| info.day == d))
            .collect();
        output::print_list(&puzzles);
        return Ok(());
    }

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Executor(e.into()))?;
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // A single selected puzzle without input fails before any work starts.
    if let [only] = work_items.as_slice()
        && !executor.inputs().contains(only.year, only.day)
    {
        executor.inputs().read(only.year, only.day)?;
    }
    for work in &work_items {
        if !executor.inputs().contains(work.year, work.day) {
            warn!(
                path = %executor.inputs().path(work.year, work.day).display(),
                "missing input"
            );
        }
    }

    run_executor(executor, work_items, config.quiet)
}

fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::Failed(failed)),
    }
}

/// Registry of every linked puzzle carrying all of `tags`
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_linked_puzzle_registers() {
        let registry = build_registry(&[]).unwrap();
        assert!(registry.contains(2021, 15));
        assert!(registry.contains(2015, 1));
        assert!(registry.contains(2023, 5));
        assert_eq!(registry.info(2021, 15).unwrap().title, "Chiton");
    }

    #[test]
    fn tag_filter_requires_every_tag() {
        let registry = build_registry(&["grid".to_string(), "dijkstra".to_string()]).unwrap();
        assert!(registry.contains(2021, 15));
        assert!(registry.iter_info().all(|info| info.day == 15 && info.year == 2021));

        let none = build_registry(&["no-such-tag".to_string()]).unwrap();
        assert!(none.is_empty());
    }
}
