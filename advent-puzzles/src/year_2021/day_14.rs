use std::collections::HashMap;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;
use itertools::{Itertools, MinMaxResult};

use crate::utils::{blocks, parse_lines};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 14, title = "Extended Polymerization", tags = ["dp"])]
pub struct ExtendedPolymerization;

#[derive(Debug, Clone)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<(u8, u8), u8>,
}

impl AocParser for ExtendedPolymerization {
    type SharedData<'a> = Polymer;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut sections = blocks(input);
        let (Some(template), Some(rules)) = (sections.next(), sections.next()) else {
            return Err(ParseError::MissingData(
                "expected a template and insertion rules".to_string(),
            ));
        };
        let rules = parse_lines(rules, |line| match line.as_bytes() {
            [a, b, b' ', b'-', b'>', b' ', c] => Ok(((*a, *b), *c)),
            _ => Err(anyhow!("expected 'AB -> C', got '{line}'")),
        })?;
        Ok(Polymer {
            template: template.trim().as_bytes().to_vec(),
            rules: rules.into_iter().collect(),
        })
    }
}

/// Most minus least common element after `steps` insertion rounds.
///
/// Only pair counts are tracked; every element except the two ends is
/// counted twice across pairs.
fn spread(polymer: &Polymer, steps: usize) -> Result<u64, SolveError> {
    let mut pairs: HashMap<(u8, u8), u64> = HashMap::new();
    for (a, b) in polymer.template.iter().copied().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }

    for _ in 0..steps {
        let mut next = HashMap::with_capacity(pairs.len());
        for ((a, b), n) in pairs {
            match polymer.rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }

    let mut counts: HashMap<u8, u64> = HashMap::new();
    for ((a, b), n) in pairs {
        *counts.entry(a).or_default() += n;
        *counts.entry(b).or_default() += n;
    }
    if let (Some(&first), Some(&last)) = (polymer.template.first(), polymer.template.last()) {
        *counts.entry(first).or_default() += 1;
        *counts.entry(last).or_default() += 1;
    }

    match counts.values().map(|n| n / 2).minmax() {
        MinMaxResult::MinMax(min, max) => Ok(max - min),
        MinMaxResult::OneElement(_) => Ok(0),
        MinMaxResult::NoElements => Err(SolveError::NoSolution("empty polymer".to_string())),
    }
}

impl PartSolver<1> for ExtendedPolymerization {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread(polymer, 10)?.to_string())
    }
}

impl PartSolver<2> for ExtendedPolymerization {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread(polymer, 40)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn example() {
        let mut shared = ExtendedPolymerization::parse(EXAMPLE).unwrap();
        assert_eq!(ExtendedPolymerization::solve_part(&mut shared, 1).unwrap(), "1588");
        assert_eq!(
            ExtendedPolymerization::solve_part(&mut shared, 2).unwrap(),
            "2188189693529"
        );
    }

    #[test]
    fn zero_steps_counts_the_template() {
        let polymer = ExtendedPolymerization::parse(EXAMPLE).unwrap();
        // NNCB: N twice, C and B once
        assert_eq!(spread(&polymer, 0).unwrap(), 1);
    }
}
