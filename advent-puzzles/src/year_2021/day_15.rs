use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{Grid, Point, parse_digit_grid, shortest_path};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 15, title = "Chiton", tags = ["grid", "dijkstra"])]
pub struct Chiton;

impl AocParser for Chiton {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let risk = parse_digit_grid(input)?;
        if let Some(p) = risk.points().find(|&p| risk[p] == 0) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) risk level 0 at column {}, expected 1-9",
                p.y + 1,
                p.x + 1
            )));
        }
        Ok(risk)
    }
}

/// Lowest total risk from the top-left to the bottom-right corner of the map
/// repeated `tiles` times in both directions.
///
/// Each repetition to the right or down adds one to every risk level, wrapping
/// from 9 back to 1.
fn lowest_risk(risk: &Grid<u8>, tiles: usize) -> Result<u64, SolveError> {
    let (w, h) = (risk.width(), risk.height());
    let (width, height) = (w * tiles, h * tiles);
    let entry_cost = |p: Point| {
        let base = u64::from(risk[Point::new(p.x % w, p.y % h)]);
        let bump = (p.x / w + p.y / h) as u64;
        Some((base + bump - 1) % 9 + 1)
    };
    shortest_path(
        width,
        height,
        Point::new(0, 0),
        Point::new(width - 1, height - 1),
        entry_cost,
    )
    .ok_or_else(|| SolveError::NoSolution("no path exists".to_string()))
}

impl PartSolver<1> for Chiton {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lowest_risk(risk, 1)?.to_string())
    }
}

impl PartSolver<2> for Chiton {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lowest_risk(risk, 5)?.to_string())
    }
}
