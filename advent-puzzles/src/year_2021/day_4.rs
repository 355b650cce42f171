use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{blocks, parse_numbers, parse_separated};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 4, title = "Giant Squid", tags = ["simulation"])]
pub struct GiantSquid;

const SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<[u32; SIZE * SIZE]>,
    /// Scores in the order boards win, filled on first use
    wins: Option<Vec<u32>>,
}

impl AocParser for GiantSquid {
    type SharedData<'a> = Bingo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut sections = blocks(input);
        let draws = parse_separated(
            sections
                .next()
                .ok_or(ParseError::MissingData("no draws".to_string()))?,
            ',',
        )?;
        let boards = sections
            .enumerate()
            .map(|(idx, block)| {
                let numbers: Vec<u32> = parse_numbers(block)?;
                numbers.try_into().map_err(|numbers: Vec<u32>| {
                    ParseError::InvalidFormat(format!(
                        "board {} has {} numbers, expected {}",
                        idx + 1,
                        numbers.len(),
                        SIZE * SIZE
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards".to_string()));
        }
        Ok(Bingo {
            draws,
            boards,
            wins: None,
        })
    }
}

fn has_line(marked: &[bool; SIZE * SIZE]) -> bool {
    (0..SIZE).any(|i| {
        (0..SIZE).all(|j| marked[i * SIZE + j]) || (0..SIZE).all(|j| marked[j * SIZE + i])
    })
}

fn play(bingo: &mut Bingo) -> &[u32] {
    bingo.wins.get_or_insert_with(|| {
        let mut marked = vec![[false; SIZE * SIZE]; bingo.boards.len()];
        let mut done = vec![false; bingo.boards.len()];
        let mut wins = Vec::with_capacity(bingo.boards.len());

        for &draw in &bingo.draws {
            for (idx, board) in bingo.boards.iter().enumerate() {
                if done[idx] {
                    continue;
                }
                if let Some(cell) = board.iter().position(|&n| n == draw) {
                    marked[idx][cell] = true;
                }
                if has_line(&marked[idx]) {
                    done[idx] = true;
                    let unmarked: u32 = board
                        .iter()
                        .zip(marked[idx])
                        .filter(|(_, m)| !m)
                        .map(|(n, _)| n)
                        .sum();
                    wins.push(unmarked * draw);
                }
            }
        }
        wins
    })
}

impl PartSolver<1> for GiantSquid {
    fn solve(bingo: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play(bingo)
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no board ever wins".to_string()))
    }
}

impl PartSolver<2> for GiantSquid {
    fn solve(bingo: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play(bingo)
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no board ever wins".to_string()))
    }
}
