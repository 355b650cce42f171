use std::ops::RangeInclusive;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use regex::Regex;

use crate::utils::invalid;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 17, title = "Trick Shot", tags = ["simulation", "regex"])]
pub struct TrickShot;

/// Target area, always to the right of and below the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    x: RangeInclusive<i64>,
    y: RangeInclusive<i64>,
}

impl AocParser for TrickShot {
    type SharedData<'a> = Target;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern = Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)")
            .map_err(invalid)?;
        let line = input.trim();
        let caps = pattern.captures(line).ok_or_else(|| {
            ParseError::InvalidFormat(format!("expected 'target area: x=A..B, y=C..D', got '{line}'"))
        })?;
        let number = |i: usize| caps[i].parse::<i64>().map_err(invalid);
        let (x1, x2, y1, y2) = (number(1)?, number(2)?, number(3)?, number(4)?);
        if x1 <= 0 || x1 > x2 || y1 > y2 || y2 >= 0 {
            return Err(ParseError::InvalidFormat(
                "target must lie to the right of and below the launcher".to_string(),
            ));
        }
        Ok(Target {
            x: x1..=x2,
            y: y1..=y2,
        })
    }
}

/// Highest point reached by a launch that ends inside the target.
fn apex_if_hit(target: &Target, mut vx: i64, mut vy: i64) -> Option<i64> {
    let (mut x, mut y, mut apex) = (0, 0, 0);
    while x <= *target.x.end() && y >= *target.y.start() {
        if target.x.contains(&x) && target.y.contains(&y) {
            return Some(apex);
        }
        x += vx;
        y += vy;
        apex = apex.max(y);
        vx -= vx.signum();
        vy -= 1;
    }
    None
}

/// Apex of every launch that hits. Faster horizontally overshoots on the
/// first step, and faster vertically overshoots on the way back through 0.
fn hits(target: &Target) -> impl Iterator<Item = i64> + '_ {
    let max_vy = -target.y.start() - 1;
    (1..=*target.x.end()).flat_map(move |vx| {
        (*target.y.start()..=max_vy).filter_map(move |vy| apex_if_hit(target, vx, vy))
    })
}

impl PartSolver<1> for TrickShot {
    fn solve(target: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        hits(target)
            .max()
            .map(|apex| apex.to_string())
            .ok_or_else(|| SolveError::NoSolution("no launch hits the target".to_string()))
    }
}

impl PartSolver<2> for TrickShot {
    fn solve(target: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(hits(target).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "target area: x=20..30, y=-10..-5\n";

    #[test]
    fn example() {
        let mut shared = TrickShot::parse(EXAMPLE).unwrap();
        assert_eq!(TrickShot::solve_part(&mut shared, 1).unwrap(), "45");
        assert_eq!(TrickShot::solve_part(&mut shared, 2).unwrap(), "112");
    }

    #[test]
    fn sample_launches() {
        let target = TrickShot::parse(EXAMPLE).unwrap();
        assert_eq!(apex_if_hit(&target, 7, 2), Some(3));
        assert_eq!(apex_if_hit(&target, 6, 9), Some(45));
        assert_eq!(apex_if_hit(&target, 17, -4), None);
    }

    #[test]
    fn target_above_launcher_is_rejected() {
        assert!(TrickShot::parse("target area: x=20..30, y=5..10").is_err());
    }
}
