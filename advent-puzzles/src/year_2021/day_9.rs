use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{Grid, Point, parse_digit_grid};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 9, title = "Smoke Basin", tags = ["grid", "flood-fill"])]
pub struct SmokeBasin;

impl AocParser for SmokeBasin {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_digit_grid(input)
    }
}

fn low_points(map: &Grid<u8>) -> impl Iterator<Item = Point> + '_ {
    map.points()
        .filter(move |&p| map.neighbors4(p).all(|q| map[q] > map[p]))
}

/// Size of the basin around `low`, marking its cells as seen.
fn basin_size(map: &Grid<u8>, seen: &mut Grid<bool>, low: Point) -> usize {
    let mut stack = vec![low];
    let mut size = 0;
    seen[low] = true;
    while let Some(p) = stack.pop() {
        size += 1;
        for q in map.neighbors4(p) {
            if map[q] != 9 && !seen[q] {
                seen[q] = true;
                stack.push(q);
            }
        }
    }
    size
}

impl PartSolver<1> for SmokeBasin {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u32 = low_points(map).map(|p| u32::from(map[p]) + 1).sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for SmokeBasin {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = Grid::new(map.width(), map.height(), false);
        let mut sizes: Vec<usize> = low_points(map)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|low| basin_size(map, &mut seen, low))
            .collect();
        if sizes.len() < 3 {
            return Err(SolveError::NoSolution(format!("only {} basins", sizes.len())));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes[..3].iter().product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn example() {
        let mut shared = SmokeBasin::parse(EXAMPLE).unwrap();
        assert_eq!(SmokeBasin::solve_part(&mut shared, 1).unwrap(), "15");
        assert_eq!(SmokeBasin::solve_part(&mut shared, 2).unwrap(), "1134");
    }
}
