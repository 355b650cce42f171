use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{invalid, parse_numbers};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2023, day = 6, title = "Wait For It", tags = ["math"])]
pub struct WaitForIt;

/// Races as separate numbers, and as the one long race the kerning hides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Races {
    times: Vec<u64>,
    records: Vec<u64>,
    long_time: u64,
    long_record: u64,
}

/// Numbers with the spaces between them ignored.
fn joined(list: &str) -> Result<u64, ParseError> {
    list.split_whitespace().collect::<String>().parse().map_err(invalid)
}

impl AocParser for WaitForIt {
    type SharedData<'a> = Races;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let times = lines
            .next()
            .and_then(|l| l.strip_prefix("Time:"))
            .ok_or_else(|| ParseError::MissingData("expected a 'Time:' line".to_string()))?;
        let records = lines
            .next()
            .and_then(|l| l.strip_prefix("Distance:"))
            .ok_or_else(|| ParseError::MissingData("expected a 'Distance:' line".to_string()))?;

        let races = Races {
            times: parse_numbers(times)?,
            records: parse_numbers(records)?,
            long_time: joined(times)?,
            long_record: joined(records)?,
        };
        if races.times.len() != races.records.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} races but {} records",
                races.times.len(),
                races.records.len()
            )));
        }
        Ok(races)
    }
}

/// Number of whole hold times `t` in `0..=time` with `t * (time - t) > record`.
///
/// The float roots only seed the search; the bounds are then nudged so the
/// result is exact for large inputs.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |t: u64| u128::from(t) * u128::from(time - t) > u128::from(record);
    let (tf, rf) = (time as f64, record as f64);
    let disc = tf * tf - 4.0 * rf;
    if disc < 0.0 {
        return 0;
    }
    let mid = time / 2;
    if !beats(mid) {
        return 0;
    }

    let mut lo = (((tf - disc.sqrt()) / 2.0).max(0.0) as u64).min(mid);
    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }
    while !beats(lo) {
        lo += 1;
    }
    let mut hi = (((tf + disc.sqrt()) / 2.0) as u64).clamp(mid, time);
    while hi < time && beats(hi + 1) {
        hi += 1;
    }
    while !beats(hi) {
        hi -= 1;
    }
    hi - lo + 1
}

impl PartSolver<1> for WaitForIt {
    fn solve(races: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        races
            .times
            .iter()
            .zip(&races.records)
            .try_fold(1u64, |acc, (&t, &r)| acc.checked_mul(ways_to_win(t, r)))
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::NoSolution("margin product overflows 64 bits".to_string()))
    }
}

impl PartSolver<2> for WaitForIt {
    fn solve(races: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(ways_to_win(races.long_time, races.long_record).to_string())
    }
}
