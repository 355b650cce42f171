use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2015, day = 2, title = "I Was Told There Would Be No Math")]
pub struct NoMath;

/// Box dimensions, sorted ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present([u32; 3]);

impl AocParser for NoMath {
    type SharedData<'a> = Vec<Present>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let mut dims = [0u32; 3];
            let mut pieces = line.split('x');
            for dim in &mut dims {
                *dim = pieces
                    .next()
                    .ok_or_else(|| anyhow!("expected LxWxH, got '{line}'"))?
                    .parse()?;
            }
            if pieces.next().is_some() {
                return Err(anyhow!("expected LxWxH, got '{line}'"));
            }
            dims.sort_unstable();
            Ok(Present(dims))
        })
    }
}

impl PartSolver<1> for NoMath {
    fn solve(presents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paper: u32 = presents
            .iter()
            .map(|Present([a, b, c])| 2 * (a * b + b * c + a * c) + a * b)
            .sum();
        Ok(paper.to_string())
    }
}

impl PartSolver<2> for NoMath {
    fn solve(presents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ribbon: u32 = presents
            .iter()
            .map(|Present([a, b, c])| 2 * (a + b) + a * b * c)
            .sum();
        Ok(ribbon.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    #[test]
    fn wrapping_paper() {
        let mut shared = NoMath::parse("2x3x4").unwrap();
        assert_eq!(NoMath::solve_part(&mut shared, 1).unwrap(), "58");
        let mut shared = NoMath::parse("1x1x10").unwrap();
        assert_eq!(NoMath::solve_part(&mut shared, 1).unwrap(), "43");
    }

    #[test]
    fn ribbon() {
        let mut shared = NoMath::parse("2x3x4\n1x1x10\n").unwrap();
        assert_eq!(NoMath::solve_part(&mut shared, 2).unwrap(), "48");
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = NoMath::parse("2x3x4\n2x3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
    }
}
