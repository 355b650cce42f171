use advent_core::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone, Default)]
struct Report {
    depths: Vec<u32>,
    increases: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(parts = 3)]
struct ThreeParts;

impl AocParser for ThreeParts {
    type SharedData<'a> = Report;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let depths = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a depth: {line:?}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Report {
            depths,
            increases: None,
        })
    }
}

impl PartSolver<1> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let increases = shared.depths.windows(2).filter(|w| w[1] > w[0]).count();
        shared.increases = Some(increases);
        Ok(increases.to_string())
    }
}

impl PartSolver<2> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .depths
            .iter()
            .max()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no depths recorded".into()))
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Reads what part 1 left behind
        shared
            .increases
            .map(|n| (n * 10).to_string())
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<ThreeParts as Solver>::PARTS, 3);
}

#[test]
fn each_part_reaches_its_impl() {
    let mut shared = ThreeParts::parse("199\n200\n208\n200").unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 1).unwrap(), "2");
    assert_eq!(ThreeParts::solve_part(&mut shared, 2).unwrap(), "208");
    assert_eq!(ThreeParts::solve_part(&mut shared, 3).unwrap(), "20");
}

#[test]
fn later_part_sees_state_from_earlier_part() {
    let mut shared = ThreeParts::parse("1\n2").unwrap();
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 3),
        Err(SolveError::SolveFailed(_))
    ));
    ThreeParts::solve_part(&mut shared, 1).unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 3).unwrap(), "10");
}

#[test]
fn undeclared_part_is_not_implemented() {
    let mut shared = Report::default();
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn part_errors_pass_through_unchanged() {
    let mut shared = Report::default();
    match ThreeParts::solve_part(&mut shared, 2) {
        Err(SolveError::NoSolution(msg)) => assert_eq!(msg, "no depths recorded"),
        other => panic!("expected NoSolution, got {other:?}"),
    }
}
