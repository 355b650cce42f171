use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::parse_separated;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 7, title = "The Treachery of Whales")]
pub struct TreacheryOfWhales;

impl AocParser for TreacheryOfWhales {
    /// Crab positions, sorted
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut crabs: Vec<i64> = parse_separated(input, ',')?;
        if crabs.is_empty() {
            return Err(ParseError::MissingData("no crabs".to_string()));
        }
        crabs.sort_unstable();
        Ok(crabs)
    }
}

impl PartSolver<1> for TreacheryOfWhales {
    fn solve(crabs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let median = crabs[crabs.len() / 2];
        let fuel: i64 = crabs.iter().map(|c| (c - median).abs()).sum();
        Ok(fuel.to_string())
    }
}

impl PartSolver<2> for TreacheryOfWhales {
    fn solve(crabs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (lo, hi) = (crabs[0], crabs[crabs.len() - 1]);
        let fuel = (lo..=hi)
            .map(|target| {
                crabs
                    .iter()
                    .map(|c| {
                        let d = (c - target).abs();
                        d * (d + 1) / 2
                    })
                    .sum::<i64>()
            })
            .min()
            .ok_or_else(|| SolveError::NoSolution("no alignment target".to_string()))?;
        Ok(fuel.to_string())
    }
}
