use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 1, title = "Sonar Sweep", tags = ["warmup"])]
pub struct SonarSweep;

impl AocParser for SonarSweep {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| Ok(line.parse()?))
    }
}

/// Readings deeper than the one `gap` positions earlier. Comparing sums of
/// windows of width `gap` reduces to this since the shared terms cancel.
fn increases(depths: &[u32], gap: usize) -> usize {
    depths.iter().zip(depths.iter().skip(gap)).filter(|(a, b)| b > a).count()
}

impl PartSolver<1> for SonarSweep {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(depths, 1).to_string())
    }
}

impl PartSolver<2> for SonarSweep {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(depths, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn example() {
        let mut shared = SonarSweep::parse(EXAMPLE).unwrap();
        assert_eq!(SonarSweep::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(SonarSweep::solve_part(&mut shared, 2).unwrap(), "5");
    }

    #[test]
    fn short_inputs_have_no_increases() {
        let mut shared = SonarSweep::parse("5").unwrap();
        assert_eq!(SonarSweep::solve_part(&mut shared, 2).unwrap(), "0");
    }
}
