use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;
use regex::Regex;

use crate::utils::{Grid, Point, invalid, parse_lines};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2015, day = 6, title = "Probably a Fire Hazard", tags = ["grid", "regex"])]
pub struct FireHazard;

const SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    action: Action,
    from: Point,
    to: Point,
}

impl AocParser for FireHazard {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern = Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$")
            .map_err(invalid)?;
        parse_lines(input, |line| {
            let caps = pattern
                .captures(line)
                .ok_or_else(|| anyhow!("unrecognised instruction '{line}'"))?;
            let action = match &caps[1] {
                "turn on" => Action::TurnOn,
                "turn off" => Action::TurnOff,
                _ => Action::Toggle,
            };
            let from = Point::new(caps[2].parse()?, caps[3].parse()?);
            let to = Point::new(caps[4].parse()?, caps[5].parse()?);
            if to.x >= SIDE || to.y >= SIDE || from.x > to.x || from.y > to.y {
                return Err(anyhow!("rectangle {from:?}..{to:?} outside the light grid"));
            }
            Ok(Instruction { action, from, to })
        })
    }
}

fn apply(instructions: &[Instruction], update: impl Fn(Action, u32) -> u32) -> u32 {
    let mut lights = Grid::new(SIDE, SIDE, 0u32);
    for ins in instructions {
        for y in ins.from.y..=ins.to.y {
            for x in ins.from.x..=ins.to.x {
                let light = &mut lights[Point::new(x, y)];
                *light = update(ins.action, *light);
            }
        }
    }
    lights.cells().iter().sum()
}

impl PartSolver<1> for FireHazard {
    fn solve(instructions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = apply(instructions, |action, light| match action {
            Action::TurnOn => 1,
            Action::TurnOff => 0,
            Action::Toggle => 1 - light,
        });
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for FireHazard {
    fn solve(instructions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = apply(instructions, |action, light| match action {
            Action::TurnOn => light + 1,
            Action::TurnOff => light.saturating_sub(1),
            Action::Toggle => light + 2,
        });
        Ok(brightness.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = FireHazard::parse(input).unwrap();
        FireHazard::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn lights_on_off_toggle() {
        assert_eq!(solve("turn on 0,0 through 999,999", 1), "1000000");
        assert_eq!(solve("toggle 0,0 through 999,0", 1), "1000");
        assert_eq!(
            solve("turn on 0,0 through 999,999\nturn off 499,499 through 500,500", 1),
            "999996"
        );
    }

    #[test]
    fn brightness() {
        assert_eq!(solve("turn on 0,0 through 0,0", 2), "1");
        assert_eq!(solve("toggle 0,0 through 999,999", 2), "2000000");
        assert_eq!(solve("turn off 0,0 through 9,9", 2), "0");
    }

    #[test]
    fn rejects_garbage() {
        assert!(FireHazard::parse("turn sideways 0,0 through 1,1").is_err());
        assert!(FireHazard::parse("toggle 0,0 through 1000,0").is_err());
    }
}
