use std::collections::HashMap;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 12, title = "Passage Pathing", tags = ["graph", "dfs"])]
pub struct PassagePathing;

/// Cave system with caves numbered by first appearance
#[derive(Debug, Clone)]
pub struct Caves {
    small: Vec<bool>,
    links: Vec<Vec<usize>>,
    start: usize,
    end: usize,
}

impl AocParser for PassagePathing {
    type SharedData<'a> = Caves;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let edges = parse_lines(input, |line| {
            let (a, b) = line
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| anyhow!("expected 'a-b', got '{line}'"))?;
            // Two connected big caves would allow endless paths.
            if !is_small(a) && !is_small(b) {
                return Err(anyhow!("big caves '{a}' and '{b}' are directly connected"));
            }
            Ok((a, b))
        })?;

        let mut ids = HashMap::new();
        let mut caves = Caves {
            small: Vec::new(),
            links: Vec::new(),
            start: 0,
            end: 0,
        };
        for (a, b) in edges {
            let a = caves.intern(&mut ids, a);
            let b = caves.intern(&mut ids, b);
            caves.links[a].push(b);
            caves.links[b].push(a);
        }
        caves.start = caves.intern(&mut ids, "start");
        caves.end = caves.intern(&mut ids, "end");
        Ok(caves)
    }
}

fn is_small(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_lowercase())
}

impl Caves {
    fn intern<'a>(&mut self, ids: &mut HashMap<&'a str, usize>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.small.push(is_small(name));
            self.links.push(Vec::new());
            self.links.len() - 1
        })
    }
}

fn count_paths(caves: &Caves, at: usize, visited: &mut Vec<bool>, revisit_left: bool) -> usize {
    if at == caves.end {
        return 1;
    }
    let mut paths = 0;
    for &next in &caves.links[at] {
        if next == caves.start {
            continue;
        }
        if !caves.small[next] || !visited[next] {
            visited[next] |= caves.small[next];
            paths += count_paths(caves, next, visited, revisit_left);
            if caves.small[next] {
                visited[next] = false;
            }
        } else if revisit_left {
            paths += count_paths(caves, next, visited, false);
        }
    }
    paths
}

fn paths(caves: &Caves, allow_revisit: bool) -> usize {
    let mut visited = vec![false; caves.small.len()];
    visited[caves.start] = true;
    count_paths(caves, caves.start, &mut visited, allow_revisit)
}

impl PartSolver<1> for PassagePathing {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(paths(caves, false).to_string())
    }
}

impl PartSolver<2> for PassagePathing {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(paths(caves, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const SMALL: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";

    const MEDIUM: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    #[test]
    fn small_example() {
        let mut shared = PassagePathing::parse(SMALL).unwrap();
        assert_eq!(PassagePathing::solve_part(&mut shared, 1).unwrap(), "10");
        assert_eq!(PassagePathing::solve_part(&mut shared, 2).unwrap(), "36");
    }

    #[test]
    fn medium_example() {
        let mut shared = PassagePathing::parse(MEDIUM).unwrap();
        assert_eq!(PassagePathing::solve_part(&mut shared, 1).unwrap(), "19");
        assert_eq!(PassagePathing::solve_part(&mut shared, 2).unwrap(), "103");
    }

    #[test]
    fn missing_end_has_no_paths() {
        let mut shared = PassagePathing::parse("start-a\na-b").unwrap();
        assert_eq!(PassagePathing::solve_part(&mut shared, 1).unwrap(), "0");
    }

    #[test]
    fn linked_big_caves_are_rejected() {
        let err = PassagePathing::parse("start-A\nA-B\nB-end").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
        assert!(PassagePathing::parse("start-A\nA-A\nA-end").is_err());
    }
}
