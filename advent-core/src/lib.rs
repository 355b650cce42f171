//! Solver framework for the Advent of Code archive
//!
//! Every puzzle in the archive is a self-contained solver: it parses its own
//! input into a `SharedData` value and answers each part from it. This crate
//! holds the traits those solvers implement and the registry the runner uses to
//! find them by year and day.
//!
//! # Quick Example
//!
//! ```
//! use advent_core::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(parts = 2)]
//! struct SonarSweep;
//!
//! impl AocParser for SonarSweep {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for SonarSweep {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for SonarSweep {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(depths.windows(4).filter(|w| w[3] > w[0]).count().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<SonarSweep>(2021, 1, "Sonar Sweep")
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "199\n200\n208\n210\n200").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "1");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns text into `SharedData`; [`PartSolver<N>`] answers part `N`.
//! - `#[derive(AocSolver)]` generates the [`Solver`] dispatcher over the parts.
//! - `#[derive(Puzzle)]` submits the solver to the global plugin list so
//!   [`SolverRegistryBuilder::register_all_plugins`] can find it.
//! - [`DynSolver`] is the type-erased view the runner works with.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    CAPACITY, DAYS_PER_YEAR, FIRST_YEAR, MAX_YEARS, PuzzleInfo, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the code `#[derive(Puzzle)]` expands to
pub use inventory;

pub use advent_macros::{AocSolver, Puzzle};
