use std::collections::HashMap;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;
use regex::Regex;

use crate::utils::{invalid, parse_lines};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 5, title = "Hydrothermal Venture", tags = ["grid", "regex"])]
pub struct HydrothermalVenture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vent {
    from: (i32, i32),
    to: (i32, i32),
}

impl Vent {
    fn is_diagonal(&self) -> bool {
        self.from.0 != self.to.0 && self.from.1 != self.to.1
    }

    fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let dx = (self.to.0 - self.from.0).signum();
        let dy = (self.to.1 - self.from.1).signum();
        let steps = (self.to.0 - self.from.0)
            .abs()
            .max((self.to.1 - self.from.1).abs());
        let (x, y) = self.from;
        (0..=steps).map(move |i| (x + i * dx, y + i * dy))
    }
}

impl AocParser for HydrothermalVenture {
    type SharedData<'a> = Vec<Vent>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").map_err(invalid)?;
        parse_lines(input, |line| {
            let caps = pattern
                .captures(line)
                .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2', got '{line}'"))?;
            let vent = Vent {
                from: (caps[1].parse()?, caps[2].parse()?),
                to: (caps[3].parse()?, caps[4].parse()?),
            };
            let (w, h) = (vent.to.0 - vent.from.0, vent.to.1 - vent.from.1);
            if vent.is_diagonal() && w.abs() != h.abs() {
                return Err(anyhow!("line is neither straight nor at 45 degrees"));
            }
            Ok(vent)
        })
    }
}

fn overlaps<'v>(vents: impl Iterator<Item = &'v Vent>) -> usize {
    let mut covered: HashMap<(i32, i32), u32> = HashMap::new();
    for cell in vents.flat_map(Vent::cells) {
        *covered.entry(cell).or_default() += 1;
    }
    covered.values().filter(|&&n| n > 1).count()
}

impl PartSolver<1> for HydrothermalVenture {
    fn solve(vents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(vents.iter().filter(|v| !v.is_diagonal())).to_string())
    }
}

impl PartSolver<2> for HydrothermalVenture {
    fn solve(vents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(vents.iter()).to_string())
    }
}
