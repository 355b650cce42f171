use std::collections::HashSet;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(
    year = 2015,
    day = 3,
    title = "Perfectly Spherical Houses in a Vacuum",
    tags = ["simulation"]
)]
pub struct SphericalHouses;

impl AocParser for SphericalHouses {
    type SharedData<'a> = Vec<(i32, i32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '^' => Ok((0, 1)),
                'v' => Ok((0, -1)),
                '>' => Ok((1, 0)),
                '<' => Ok((-1, 0)),
                other => Err(ParseError::InvalidFormat(format!("unknown move '{other}'"))),
            })
            .collect()
    }
}

fn visit<'m>(moves: impl Iterator<Item = &'m (i32, i32)>, houses: &mut HashSet<(i32, i32)>) {
    let mut pos = (0, 0);
    houses.insert(pos);
    for (dx, dy) in moves {
        pos = (pos.0 + dx, pos.1 + dy);
        houses.insert(pos);
    }
}

impl PartSolver<1> for SphericalHouses {
    fn solve(moves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut houses = HashSet::new();
        visit(moves.iter(), &mut houses);
        Ok(houses.len().to_string())
    }
}

impl PartSolver<2> for SphericalHouses {
    fn solve(moves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut houses = HashSet::new();
        visit(moves.iter().step_by(2), &mut houses);
        visit(moves.iter().skip(1).step_by(2), &mut houses);
        Ok(houses.len().to_string())
    }
}
