//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data every part works from.
///
/// # Example
///
/// ```
/// use advent_core::{AocParser, ParseError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(format!("bad depth {l:?}"))))
///             .collect()
///     }
/// }
///
/// assert_eq!(SonarSweep::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything a later part wants to reuse.
    ///
    /// Owned data (`Vec<T>`, a struct) is the common case; `&'a str` works when
    /// the raw text needs no transformation.
    type SharedData<'a>: 'a;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// The const generic keeps each part in its own impl block; the
/// `AocSolver` derive stitches them into [`Solver::solve_part`].
///
/// # Example
///
/// ```
/// use advent_core::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for SonarSweep {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = SonarSweep::parse("199\n200\n208\n200").unwrap();
/// assert_eq!(<SonarSweep as PartSolver<1>>::solve(&mut depths).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for this part.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: the parser plus a dispatcher over its parts.
///
/// Usually derived with `#[derive(AocSolver)]`, but it can be written by hand:
///
/// ```
/// use advent_core::{AocParser, ParseError, SolveError, Solver};
///
/// struct NotQuiteLisp;
///
/// impl AocParser for NotQuiteLisp {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for NotQuiteLisp {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 let floor: i64 = shared.chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
///                 Ok(floor.to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = NotQuiteLisp::parse("(()(()(").unwrap();
/// assert_eq!(NotQuiteLisp::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer
    /// * `Err(SolveError::PartNotImplemented)` - No implementation for `part`
    /// * `Err(SolveError::NoSolution)` / `Err(SolveError::SolveFailed)` - Solving failed
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS` first.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
