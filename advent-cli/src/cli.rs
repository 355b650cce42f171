//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every puzzle in order on the calling thread
    Sequential,
    /// One task per year; days and parts run in order within a year
    Year,
    /// One task per puzzle; its parts share one parsed input (default)
    #[default]
    Day,
    /// One task per part; each part parses its own copy of the input
    Part,
}

/// Advent of Code archive runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run archived Advent of Code solutions", version)]
pub struct Args {
    /// Year to run (all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Only run puzzles carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Read the input of the selected puzzle from this file; needs --year and --day
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `<year>/dayDD.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// List the registered puzzles and exit
    #[arg(long)]
    pub list: bool,

    /// Only print answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
