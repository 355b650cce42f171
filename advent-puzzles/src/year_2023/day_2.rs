use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2023, day = 2, title = "Cube Conundrum")]
pub struct CubeConundrum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u32,
    /// Fewest cubes of each colour that make every reveal possible
    needed: Cubes,
}

fn reveal(text: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for part in text.split(',') {
        let (count, colour) = part
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <colour>', got '{}'", part.trim()))?;
        let count: u32 = count.parse()?;
        match colour {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            other => return Err(anyhow!("unknown colour '{other}'")),
        }
    }
    Ok(cubes)
}

impl AocParser for CubeConundrum {
    type SharedData<'a> = Vec<Game>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (head, reveals) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("missing ':' after the game id"))?;
            let id = head
                .strip_prefix("Game ")
                .ok_or_else(|| anyhow!("expected 'Game <id>', got '{head}'"))?
                .parse()?;
            let needed = reveals
                .split(';')
                .map(reveal)
                .try_fold(Cubes::default(), |acc, cubes| cubes.map(|c| acc.max(c)))?;
            Ok(Game { id, needed })
        })
    }
}

impl PartSolver<1> for CubeConundrum {
    fn solve(games: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let bag = Cubes {
            red: 12,
            green: 13,
            blue: 14,
        };
        let possible: u32 = games
            .iter()
            .filter(|g| bag.max(g.needed) == bag)
            .map(|g| g.id)
            .sum();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for CubeConundrum {
    fn solve(games: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let power: u32 = games
            .iter()
            .map(|g| g.needed.red * g.needed.green * g.needed.blue)
            .sum();
        Ok(power.to_string())
    }
}
