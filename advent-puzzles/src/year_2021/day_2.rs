use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 2, title = "Dive!")]
pub struct Dive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AocParser for Dive {
    type SharedData<'a> = Vec<Command>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (word, amount) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected '<direction> <amount>'"))?;
            let amount = amount.trim().parse()?;
            match word {
                "forward" => Ok(Command::Forward(amount)),
                "down" => Ok(Command::Down(amount)),
                "up" => Ok(Command::Up(amount)),
                other => Err(anyhow!("unknown direction '{other}'")),
            }
        })
    }
}

impl PartSolver<1> for Dive {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (pos, depth) = commands.iter().fold((0i64, 0i64), |(pos, depth), cmd| match cmd {
            Command::Forward(n) => (pos + n, depth),
            Command::Down(n) => (pos, depth + n),
            Command::Up(n) => (pos, depth - n),
        });
        Ok((pos * depth).to_string())
    }
}

impl PartSolver<2> for Dive {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (pos, depth, _) =
            commands
                .iter()
                .fold((0i64, 0i64, 0i64), |(pos, depth, aim), cmd| match cmd {
                    Command::Forward(n) => (pos + n, depth + aim * n, aim),
                    Command::Down(n) => (pos, depth, aim + n),
                    Command::Up(n) => (pos, depth, aim - n),
                });
        Ok((pos * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn example() {
        let mut shared = Dive::parse(EXAMPLE).unwrap();
        assert_eq!(Dive::solve_part(&mut shared, 1).unwrap(), "150");
        assert_eq!(Dive::solve_part(&mut shared, 2).unwrap(), "900");
    }

    #[test]
    fn unknown_direction() {
        let err = Dive::parse("forward 1\nsideways 2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("sideways")));
    }
}
