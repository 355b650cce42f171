//! Property tests for the flat solver registry

use advent_core::{
    AocParser, CAPACITY, DAYS_PER_YEAR, FIRST_YEAR, MAX_YEARS, ParseError, RegistrationError,
    SolveError, Solver, SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Sums comma-separated numbers
struct Summer;

impl AocParser for Summer {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|n| {
                n.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n:?}")))
            })
            .collect()
    }
}

impl Solver for Summer {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().sum::<i64>().to_string()),
            2 => Ok(shared.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn last_year() -> u16 {
    FIRST_YEAR + MAX_YEARS as u16 - 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any supported date can be registered once and looked up again.
    #[test]
    fn supported_dates_round_trip(year in FIRST_YEAR..=2034u16, day in 1u8..=25) {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Summer>(year, day, "Summer")
            .unwrap()
            .build();

        let info = registry.info(year, day).unwrap();
        prop_assert_eq!((info.year, info.day, info.parts, info.title), (year, day, 2, "Summer"));
        prop_assert_eq!(registry.iter_info().collect::<Vec<_>>(), vec![info]);
    }

    /// Registering the same date twice fails with that date.
    #[test]
    fn duplicate_dates_are_rejected(year in FIRST_YEAR..=2034u16, day in 1u8..=25) {
        let result = SolverRegistryBuilder::new()
            .register_solver::<Summer>(year, day, "first")
            .unwrap()
            .register_solver::<Summer>(year, day, "second");
        prop_assert_eq!(result.err(), Some(RegistrationError::DuplicateSolver(year, day)));
    }

    /// Days outside 1..=25 never fit in the storage.
    #[test]
    fn unsupported_days_are_rejected(day in prop_oneof![Just(0u8), 26u8..=255]) {
        let result = SolverRegistryBuilder::new().register_solver::<Summer>(2021, day, "x");
        prop_assert_eq!(result.err(), Some(RegistrationError::InvalidYearDay(2021, day)));
    }
}

#[test]
fn years_outside_storage_are_rejected() {
    for year in [FIRST_YEAR - 1, last_year() + 1] {
        let result = SolverRegistryBuilder::new().register_solver::<Summer>(year, 1, "x");
        assert_eq!(result.err(), Some(RegistrationError::InvalidYearDay(year, 1)));
    }
    assert_eq!(CAPACITY, MAX_YEARS * DAYS_PER_YEAR);
}

#[test]
fn iteration_is_ordered_by_date() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Summer>(2023, 1, "c")
        .unwrap()
        .register_solver::<Summer>(2015, 6, "b")
        .unwrap()
        .register_solver::<Summer>(2015, 2, "a")
        .unwrap()
        .build();

    let dates: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(dates, vec![(2015, 2), (2015, 6), (2023, 1)]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn create_solver_reports_lookup_and_parse_failures() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Summer>(2021, 1, "Summer")
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2021, 2, "1"),
        Err(SolverError::NotFound(2021, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, "1"),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
    assert!(matches!(
        registry.create_solver(2021, 1, "1,two"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));

    let mut solver = registry.create_solver(2021, 1, "2, 3, 4").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "9");
    assert_eq!(solver.solve(2).unwrap().answer, "24");
    assert!(solver.solve(3).is_err());
}

#[test]
fn empty_registry() {
    let registry = SolverRegistryBuilder::default().build();
    assert!(registry.is_empty());
    assert_eq!(registry.iter_info().count(), 0);
}
