use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2015, day = 1, title = "Not Quite Lisp", tags = ["warmup"])]
pub struct NotQuiteLisp;

impl AocParser for NotQuiteLisp {
    /// +1 for every `(`, -1 for every `)`
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .enumerate()
            .map(|(idx, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected '{other}' at position {}",
                    idx + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for NotQuiteLisp {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steps.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for NotQuiteLisp {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        steps
            .iter()
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|idx| (idx + 1).to_string())
            .ok_or_else(|| SolveError::NoSolution("Santa never enters the basement".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = NotQuiteLisp::parse(input).unwrap();
        NotQuiteLisp::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn final_floor() {
        assert_eq!(solve("(())", 1), "0");
        assert_eq!(solve("(((", 1), "3");
        assert_eq!(solve(")())())", 1), "-3");
    }

    #[test]
    fn first_basement_position() {
        assert_eq!(solve(")", 2), "1");
        assert_eq!(solve("()())", 2), "5");
    }

    #[test]
    fn never_reaching_basement_is_no_solution() {
        let mut shared = NotQuiteLisp::parse("((").unwrap();
        assert!(matches!(
            NotQuiteLisp::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn rejects_other_characters() {
        assert!(NotQuiteLisp::parse("(x)").is_err());
    }
}
