use std::ops::Range;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::{blocks, parse_lines, parse_numbers};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(
    year = 2023,
    day = 5,
    title = "If You Give A Seed A Fertilizer",
    tags = ["intervals"]
)]
pub struct SeedFertilizer;

/// Maps `source..source + len` onto `dest..dest + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    source: u64,
    dest: u64,
    len: u64,
}

impl Shift {
    fn source_end(&self) -> u64 {
        self.source + self.len
    }

    fn apply(&self, value: u64) -> u64 {
        value - self.source + self.dest
    }
}

/// One category-to-category map, shifts sorted by source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    shifts: Vec<Shift>,
}

impl Layer {
    fn map(&self, value: u64) -> u64 {
        self.shifts
            .iter()
            .find(|s| (s.source..s.source_end()).contains(&value))
            .map_or(value, |s| s.apply(value))
    }

    /// Image of `range` as a set of ranges; unmapped gaps pass through.
    fn map_range(&self, range: Range<u64>, out: &mut Vec<Range<u64>>) {
        let mut cursor = range.start;
        for shift in &self.shifts {
            if cursor >= range.end {
                break;
            }
            if shift.source_end() <= cursor {
                continue;
            }
            if shift.source >= range.end {
                break;
            }
            if shift.source > cursor {
                out.push(cursor..shift.source);
                cursor = shift.source;
            }
            let end = shift.source_end().min(range.end);
            out.push(shift.apply(cursor)..shift.apply(end));
            cursor = end;
        }
        if cursor < range.end {
            out.push(cursor..range.end);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<u64>,
    layers: Vec<Layer>,
}

impl AocParser for SeedFertilizer {
    type SharedData<'a> = Almanac;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut sections = blocks(input);
        let seeds = sections
            .next()
            .and_then(|s| s.strip_prefix("seeds:"))
            .ok_or_else(|| ParseError::MissingData("expected 'seeds: ...' first".to_string()))?;
        let seeds = parse_numbers(seeds)?;

        let layers = sections
            .map(|section| {
                let (_, body) = section.split_once('\n').unwrap_or((section, ""));
                let mut shifts = parse_lines(body, |line| match parse_numbers::<u64>(line)?[..] {
                    [dest, source, len] => Ok(Shift { source, dest, len }),
                    _ => Err(anyhow!("expected 'dest source length', got '{line}'")),
                })?;
                shifts.sort_unstable_by_key(|s| s.source);
                Ok(Layer { shifts })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Almanac { seeds, layers })
    }
}

impl PartSolver<1> for SeedFertilizer {
    fn solve(almanac: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        almanac
            .seeds
            .iter()
            .map(|&seed| almanac.layers.iter().fold(seed, |v, layer| layer.map(v)))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::NoSolution("no seeds".to_string()))
    }
}

impl PartSolver<2> for SeedFertilizer {
    fn solve(almanac: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if almanac.seeds.len() % 2 != 0 {
            return Err(SolveError::NoSolution(
                "seed list does not pair into ranges".to_string(),
            ));
        }
        let mut ranges: Vec<Range<u64>> = almanac
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .filter(|r| !r.is_empty())
            .collect();
        for layer in &almanac.layers {
            let mut next = Vec::with_capacity(ranges.len());
            for range in ranges {
                layer.map_range(range, &mut next);
            }
            ranges = next;
        }
        ranges
            .iter()
            .map(|r| r.start)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::NoSolution("no seed ranges".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn example() {
        let mut shared = SeedFertilizer::parse(EXAMPLE).unwrap();
        assert_eq!(SeedFertilizer::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(SeedFertilizer::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn range_splits_around_shifts() {
        let layer = Layer {
            shifts: vec![
                Shift { source: 5, dest: 100, len: 3 },
                Shift { source: 10, dest: 0, len: 2 },
            ],
        };
        let mut out = Vec::new();
        layer.map_range(3..12, &mut out);
        assert_eq!(out, vec![3..5, 100..103, 8..10, 0..2]);
    }
}
