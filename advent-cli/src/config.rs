//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// A puzzle must carry every one of these tags
    pub tags: Vec<String>,
    pub input_dir: PathBuf,
    /// Input file replacing the one under `input_dir` for the selected puzzle
    pub input_override: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub list: bool,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input needs both --year and --day".to_string(),
            ));
        }

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config("--threads must be at least 1".to_string()));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            thread_count,
            parallelize_by: args.parallelize_by,
            list: args.list,
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
