use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2023, day = 1, title = "Trebuchet?!", tags = ["strings"])]
pub struct Trebuchet;

impl AocParser for Trebuchet {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<_> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("calibration document is empty".to_string()));
        }
        Ok(lines)
    }
}

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Digit starting at byte `i`, optionally accepting spelled-out names.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    match rest.first() {
        Some(b) if b.is_ascii_digit() => Some(u32::from(b - b'0')),
        _ if spelled => SPELLED
            .iter()
            .position(|word| rest.starts_with(word.as_bytes()))
            .map(|idx| idx as u32 + 1),
        _ => None,
    }
}

fn calibration(lines: &[&str], spelled: bool) -> Result<u32, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let first = (0..line.len()).find_map(|i| digit_at(line, i, spelled));
            let last = (0..line.len()).rev().find_map(|i| digit_at(line, i, spelled));
            match (first, last) {
                (Some(first), Some(last)) => Ok(first * 10 + last),
                _ => Err(SolveError::NoSolution(format!("(line {}) has no digit", idx + 1))),
            }
        })
        .sum()
}

impl PartSolver<1> for Trebuchet {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(lines, false)?.to_string())
    }
}

impl PartSolver<2> for Trebuchet {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(lines, true)?.to_string())
    }
}
