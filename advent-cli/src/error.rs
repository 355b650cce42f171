//! Error types for the CLI

use crate::inputs::InputError;
use advent_core::{RegistrationError, SolverError};
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// Every result was printed but some parts did not produce an answer
    #[error("{0} part(s) failed")]
    Failed(usize),
}

/// Errors raised while running puzzles; also carried by failed results
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error("{0}")]
    Solver(#[from] SolverError),

    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side that is
    /// already a `Multiple` and keeping `first`'s errors ahead of `second`'s.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first.clone()];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second.clone());
                combined
            }
            _ => vec![first.clone(), second.clone()],
        };
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
