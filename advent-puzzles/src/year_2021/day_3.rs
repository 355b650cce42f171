use std::cmp::Ordering;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::{invalid, parse_lines};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 3, title = "Binary Diagnostic", tags = ["bits"])]
pub struct BinaryDiagnostic;

#[derive(Debug, Clone)]
pub struct Report {
    width: usize,
    values: Vec<u32>,
}

impl AocParser for BinaryDiagnostic {
    type SharedData<'a> = Report;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| {
            if line.len() > 31 {
                return Err(anyhow!("{} bits is too wide", line.len()));
            }
            Ok((line.len(), u32::from_str_radix(line, 2)?))
        })?;
        let width = rows.first().map(|(w, _)| *w).ok_or(ParseError::MissingData(
            "diagnostic report is empty".to_string(),
        ))?;
        if rows.iter().any(|(w, _)| *w != width) {
            return Err(invalid("report rows have different widths"));
        }
        Ok(Report {
            width,
            values: rows.into_iter().map(|(_, v)| v).collect(),
        })
    }
}

/// Ones minus zeros at `bit` across `values`.
fn balance(values: &[u32], bit: usize) -> Ordering {
    let ones = values.iter().filter(|v| *v >> bit & 1 == 1).count();
    ones.cmp(&(values.len() - ones))
}

fn rating(report: &Report, keep_most_common: bool) -> Result<u32, SolveError> {
    let mut values = report.values.clone();
    for bit in (0..report.width).rev() {
        if values.len() == 1 {
            break;
        }
        let most_common = u32::from(balance(&values, bit) != Ordering::Less);
        let wanted = if keep_most_common { most_common } else { 1 - most_common };
        values.retain(|v| v >> bit & 1 == wanted);
    }
    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(SolveError::NoSolution(format!(
            "{} values left after filtering",
            values.len()
        ))),
    }
}

impl PartSolver<1> for BinaryDiagnostic {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma = (0..report.width)
            .filter(|&bit| balance(&report.values, bit) == Ordering::Greater)
            .fold(0u32, |acc, bit| acc | 1 << bit);
        let epsilon = !gamma & ((1 << report.width) - 1);
        Ok((u64::from(gamma) * u64::from(epsilon)).to_string())
    }
}

impl PartSolver<2> for BinaryDiagnostic {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(report, true)?;
        let co2 = rating(report, false)?;
        Ok((u64::from(oxygen) * u64::from(co2)).to_string())
    }
}
