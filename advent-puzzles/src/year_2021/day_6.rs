use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::parse_separated;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 6, title = "Lanternfish", tags = ["dp"])]
pub struct Lanternfish;

impl AocParser for Lanternfish {
    /// Number of fish per timer value 0..=8
    type SharedData<'a> = [u64; 9];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut counts = [0u64; 9];
        for timer in parse_separated::<usize>(input, ',')? {
            *counts.get_mut(timer).ok_or_else(|| {
                ParseError::InvalidFormat(format!("timer {timer} is out of range"))
            })? += 1;
        }
        Ok(counts)
    }
}

fn population(mut counts: [u64; 9], days: usize) -> u64 {
    for _ in 0..days {
        counts.rotate_left(1);
        counts[6] += counts[8];
    }
    counts.iter().sum()
}

impl PartSolver<1> for Lanternfish {
    fn solve(counts: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(*counts, 80).to_string())
    }
}

impl PartSolver<2> for Lanternfish {
    fn solve(counts: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(*counts, 256).to_string())
    }
}
