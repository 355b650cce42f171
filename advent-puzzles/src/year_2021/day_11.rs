use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{Grid, parse_digit_grid};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 11, title = "Dumbo Octopus", tags = ["grid", "simulation"])]
pub struct DumboOctopus;

impl AocParser for DumboOctopus {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_digit_grid(input)
    }
}

/// Advance one step and return how many octopuses flashed.
fn step(energy: &mut Grid<u8>) -> usize {
    let mut ready = Vec::new();
    for p in energy.points() {
        energy[p] += 1;
        if energy[p] > 9 {
            ready.push(p);
        }
    }

    let mut flashed = Grid::new(energy.width(), energy.height(), false);
    while let Some(p) = ready.pop() {
        if flashed[p] {
            continue;
        }
        flashed[p] = true;
        let neighbours: Vec<_> = energy.neighbors8(p).collect();
        for q in neighbours {
            energy[q] += 1;
            if energy[q] > 9 && !flashed[q] {
                ready.push(q);
            }
        }
    }

    for p in energy.points() {
        if flashed[p] {
            energy[p] = 0;
        }
    }
    flashed.cells().iter().filter(|&&f| f).count()
}

impl PartSolver<1> for DumboOctopus {
    fn solve(energy: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = energy.clone();
        let flashes: usize = (0..100).map(|_| step(&mut energy)).sum();
        Ok(flashes.to_string())
    }
}

impl PartSolver<2> for DumboOctopus {
    fn solve(energy: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = energy.clone();
        let everyone = energy.cells().len();
        (1..=100_000)
            .find(|_| step(&mut energy) == everyone)
            .map(|n: u32| n.to_string())
            .ok_or_else(|| SolveError::NoSolution("octopuses never synchronise".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn example() {
        let mut shared = DumboOctopus::parse(EXAMPLE).unwrap();
        assert_eq!(DumboOctopus::solve_part(&mut shared, 1).unwrap(), "1656");
        assert_eq!(DumboOctopus::solve_part(&mut shared, 2).unwrap(), "195");
    }

    #[test]
    fn small_cascade() {
        let mut energy = parse_digit_grid("11111\n19991\n19191\n19991\n11111").unwrap();
        assert_eq!(step(&mut energy), 9);
        assert_eq!(energy, parse_digit_grid("34543\n40004\n50005\n40004\n34543").unwrap());
    }
}
