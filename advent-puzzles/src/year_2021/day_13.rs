use std::collections::BTreeSet;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::{blocks, parse_lines};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 13, title = "Transparent Origami", tags = ["rendering"])]
pub struct TransparentOrigami;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Fold the bottom half up along `y = n`
    Up(u32),
    /// Fold the right half left along `x = n`
    Left(u32),
}

#[derive(Debug, Clone)]
pub struct Manual {
    dots: BTreeSet<(u32, u32)>,
    folds: Vec<Fold>,
}

impl AocParser for TransparentOrigami {
    type SharedData<'a> = Manual;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut sections = blocks(input);
        let (Some(dots), Some(folds)) = (sections.next(), sections.next()) else {
            return Err(ParseError::MissingData(
                "expected dots and folds separated by a blank line".to_string(),
            ));
        };
        let dots = parse_lines(dots, |line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("expected 'x,y', got '{line}'"))?;
            Ok((x.parse::<u32>()?, y.parse::<u32>()?))
        })?;
        let folds = parse_lines(folds, |line| {
            let (axis, at) = line
                .strip_prefix("fold along ")
                .and_then(|rest| rest.split_once('='))
                .ok_or_else(|| anyhow!("expected 'fold along x=N', got '{line}'"))?;
            match axis {
                "x" => Ok(Fold::Left(at.parse()?)),
                "y" => Ok(Fold::Up(at.parse()?)),
                other => Err(anyhow!("unknown axis '{other}'")),
            }
        })?;
        Ok(Manual {
            dots: dots.into_iter().collect(),
            folds,
        })
    }
}

/// Mirror image of `v` across `line`; `None` if it would land before 0.
fn reflect(v: u32, line: u32) -> Option<u32> {
    if v > line {
        line.checked_mul(2)?.checked_sub(v)
    } else {
        Some(v)
    }
}

fn fold(dots: &BTreeSet<(u32, u32)>, fold: Fold) -> Result<BTreeSet<(u32, u32)>, SolveError> {
    dots.iter()
        .map(|&(x, y)| {
            let folded = match fold {
                Fold::Left(line) => reflect(x, line).map(|x| (x, y)),
                Fold::Up(line) => reflect(y, line).map(|y| (x, y)),
            };
            folded.ok_or_else(|| {
                SolveError::NoSolution(format!("dot {x},{y} folds off the paper at {fold:?}"))
            })
        })
        .collect()
}

fn render(dots: &BTreeSet<(u32, u32)>) -> String {
    let width = dots.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
    let height = dots.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PartSolver<1> for TransparentOrigami {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = manual
            .folds
            .first()
            .ok_or_else(|| SolveError::NoSolution("no folds".to_string()))?;
        Ok(fold(&manual.dots, *first)?.len().to_string())
    }
}

impl PartSolver<2> for TransparentOrigami {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let folded = manual
            .folds
            .iter()
            .try_fold(manual.dots.clone(), |dots, &f| fold(&dots, f))?;
        Ok(render(&folded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn example() {
        let mut shared = TransparentOrigami::parse(EXAMPLE).unwrap();
        assert_eq!(TransparentOrigami::solve_part(&mut shared, 1).unwrap(), "17");
        assert_eq!(
            TransparentOrigami::solve_part(&mut shared, 2).unwrap(),
            "#####\n#...#\n#...#\n#...#\n#####"
        );
    }

    #[test]
    fn folds_are_required() {
        assert!(matches!(
            TransparentOrigami::parse("1,2\n3,4\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn dot_beyond_mirror_range_is_no_solution() {
        let mut shared = TransparentOrigami::parse("0,0\n9,0\n\nfold along x=2\n").unwrap();
        for part in [1, 2] {
            assert!(matches!(
                TransparentOrigami::solve_part(&mut shared, part),
                Err(SolveError::NoSolution(_))
            ));
        }
    }
}
