use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 10, title = "Syntax Scoring", tags = ["stack"])]
pub struct SyntaxScoring;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// First closing bracket that did not match
    Corrupted(u8),
    /// Closers needed to finish the line, innermost first
    Incomplete(Vec<u8>),
}

fn closer(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

fn check(line: &str) -> anyhow::Result<Line> {
    let mut expected = Vec::new();
    for b in line.bytes() {
        if let Some(close) = closer(b) {
            expected.push(close);
        } else if matches!(b, b')' | b']' | b'}' | b'>') {
            if expected.pop() != Some(b) {
                return Ok(Line::Corrupted(b));
            }
        } else {
            return Err(anyhow!("'{}' is not a bracket", b as char));
        }
    }
    expected.reverse();
    Ok(Line::Incomplete(expected))
}

impl AocParser for SyntaxScoring {
    type SharedData<'a> = Vec<Line>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, check)
    }
}

impl PartSolver<1> for SyntaxScoring {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = lines
            .iter()
            .map(|line| match line {
                Line::Corrupted(b')') => 3,
                Line::Corrupted(b']') => 57,
                Line::Corrupted(b'}') => 1197,
                Line::Corrupted(_) => 25137,
                Line::Incomplete(_) => 0,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for SyntaxScoring {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = lines
            .iter()
            .filter_map(|line| match line {
                Line::Incomplete(missing) if !missing.is_empty() => Some(missing),
                _ => None,
            })
            .map(|missing| {
                missing.iter().fold(0, |score, &b| {
                    score * 5
                        + match b {
                            b')' => 1,
                            b']' => 2,
                            b'}' => 3,
                            _ => 4,
                        }
                })
            })
            .collect();
        if scores.is_empty() {
            return Err(SolveError::NoSolution("no incomplete lines".to_string()));
        }
        let mid = scores.len() / 2;
        let (_, median, _) = scores.select_nth_unstable(mid);
        Ok(median.to_string())
    }
}
