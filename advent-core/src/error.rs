//! Error types shared by every solver and by the registry

use thiserror::Error;

/// Error type for turning raw puzzle input into a solver's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input doesn't match the grammar the puzzle expects
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or field is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0 or a part beyond the solver's declared count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input is well formed but admits no answer
    #[error("No solution: {0}")]
    NoSolution(String),
    /// Any other failure while computing the answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver instances
#[derive(Debug, Error)]
pub enum SolverError {
    /// Nothing is registered for the year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year or day lies outside the range the registry can store
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for the year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year or day lies outside the range the registry can store
    #[error("Cannot register year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}
