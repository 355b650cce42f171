use std::collections::HashMap;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

use crate::utils::{Grid, Point, parse_char_grid};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2023, day = 3, title = "Gear Ratios", tags = ["grid"])]
pub struct GearRatios;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartNumber {
    value: u32,
    /// Symbols touching the number, with their positions
    symbols: Vec<(Point, char)>,
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

/// Every number on the schematic together with the symbols around it.
fn numbers(schematic: &Grid<char>) -> Vec<PartNumber> {
    let mut found = Vec::new();
    for y in 0..schematic.height() {
        let mut x = 0;
        while x < schematic.width() {
            if !schematic[Point::new(x, y)].is_ascii_digit() {
                x += 1;
                continue;
            }
            let start = x;
            let mut value = 0;
            while let Some(d) = schematic.get(Point::new(x, y)).and_then(|c| c.to_digit(10)) {
                value = value * 10 + d;
                x += 1;
            }

            let mut symbols: Vec<(Point, char)> = (start..x)
                .flat_map(|dx| schematic.neighbors8(Point::new(dx, y)))
                .map(|p| (p, schematic[p]))
                .filter(|&(_, c)| is_symbol(c))
                .collect();
            symbols.sort_unstable();
            symbols.dedup();
            found.push(PartNumber { value, symbols });
        }
    }
    found
}

impl AocParser for GearRatios {
    type SharedData<'a> = Vec<PartNumber>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(numbers(&parse_char_grid(input)?))
    }
}

impl PartSolver<1> for GearRatios {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = numbers
            .iter()
            .filter(|n| !n.symbols.is_empty())
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for GearRatios {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Point, Vec<u32>> = HashMap::new();
        for n in numbers.iter() {
            for &(p, c) in &n.symbols {
                if c == '*' {
                    gears.entry(p).or_default().push(n.value);
                }
            }
        }
        let ratios: u64 = gears
            .values()
            .filter(|parts| parts.len() == 2)
            .map(|parts| u64::from(parts[0]) * u64::from(parts[1]))
            .sum();
        Ok(ratios.to_string())
    }
}
