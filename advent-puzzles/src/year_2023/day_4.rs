use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::{parse_lines, parse_numbers};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2023, day = 4, title = "Scratchcards")]
pub struct Scratchcards;

impl AocParser for Scratchcards {
    /// Matching numbers on each card
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (_, numbers) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("missing ':' after the card id"))?;
            let (winning, have) = numbers
                .split_once('|')
                .ok_or_else(|| anyhow!("missing '|' between the number lists"))?;
            let winning: Vec<u32> = parse_numbers(winning)?;
            let have: Vec<u32> = parse_numbers(have)?;
            Ok(have.iter().filter(|n| winning.contains(n)).count())
        })
    }
}

impl PartSolver<1> for Scratchcards {
    fn solve(matches: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = matches
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u64 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Scratchcards {
    fn solve(matches: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; matches.len()];
        for (card, &won) in matches.iter().enumerate() {
            let end = (card + 1 + won).min(copies.len());
            for next in card + 1..end {
                copies[next] += copies[card];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}
