use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use anyhow::anyhow;

use crate::utils::parse_lines;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 8, title = "Seven Segment Search", tags = ["backtracking"])]
pub struct SevenSegmentSearch;

/// Segment sets as bitmasks, bit 0 = `a` .. bit 6 = `g`
type Segments = u8;

/// Lit segments of the digits 0-9 on a correctly wired display.
const DIGITS: [Segments; 10] = [
    0b1110111, 0b0100100, 0b1011101, 0b1101101, 0b0101110, 0b1101011, 0b1111011, 0b0100101,
    0b1111111, 0b1101111,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    patterns: [Segments; 10],
    output: [Segments; 4],
}

fn segments(word: &str) -> anyhow::Result<Segments> {
    word.bytes().try_fold(0, |mask, b| match b {
        b'a'..=b'g' => Ok(mask | 1 << (b - b'a')),
        other => Err(anyhow!("'{}' is not a segment", other as char)),
    })
}

fn segment_list<const N: usize>(words: &str) -> anyhow::Result<[Segments; N]> {
    let list = words
        .split_whitespace()
        .map(segments)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let len = list.len();
    list.try_into()
        .map_err(|_| anyhow!("expected {N} patterns, got {len}"))
}

impl AocParser for SevenSegmentSearch {
    type SharedData<'a> = Vec<Entry>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (patterns, output) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("missing '|' separator"))?;
            Ok(Entry {
                patterns: segment_list(patterns)?,
                output: segment_list(output)?,
            })
        })
    }
}

fn rewire(pattern: Segments, wiring: &[Option<u8>; 7]) -> Option<Segments> {
    (0..7).filter(|w| pattern >> w & 1 == 1).try_fold(0, |mask, w| {
        wiring[w as usize].map(|segment| mask | 1 << segment)
    })
}

/// Assigns wires to segments one at a time, abandoning an assignment as soon
/// as a fully wired pattern fails to show a digit.
fn search(patterns: &[Segments; 10], wiring: &mut [Option<u8>; 7], wire: usize, used: u8) -> bool {
    if wire == 7 {
        return true;
    }
    for segment in 0..7 {
        if used >> segment & 1 == 1 {
            continue;
        }
        wiring[wire] = Some(segment);
        let consistent = patterns
            .iter()
            .filter_map(|&p| rewire(p, wiring))
            .all(|shown| DIGITS.contains(&shown));
        if consistent && search(patterns, wiring, wire + 1, used | 1 << segment) {
            return true;
        }
    }
    wiring[wire] = None;
    false
}

fn decode(entry: &Entry) -> Result<u32, SolveError> {
    let mut wiring = [None; 7];
    if !search(&entry.patterns, &mut wiring, 0, 0) {
        return Err(SolveError::NoSolution("no wiring matches the patterns".to_string()));
    }
    entry.output.iter().try_fold(0, |value, &pattern| {
        rewire(pattern, &wiring)
            .and_then(|shown| DIGITS.iter().position(|&d| d == shown))
            .map(|digit| value * 10 + digit as u32)
            .ok_or_else(|| SolveError::NoSolution("output shows no digit".to_string()))
    })
}

impl PartSolver<1> for SevenSegmentSearch {
    fn solve(entries: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let easy = entries
            .iter()
            .flat_map(|e| e.output)
            .filter(|p| matches!(p.count_ones(), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for SevenSegmentSearch {
    fn solve(entries: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = entries
            .iter()
            .map(decode)
            .sum::<Result<u32, _>>()?;
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    const EXAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

    #[test]
    fn example() {
        let mut shared = SevenSegmentSearch::parse(EXAMPLE).unwrap();
        assert_eq!(SevenSegmentSearch::solve_part(&mut shared, 1).unwrap(), "26");
        assert_eq!(SevenSegmentSearch::solve_part(&mut shared, 2).unwrap(), "61229");
    }

    #[test]
    fn single_entry_decodes() {
        let entries = SevenSegmentSearch::parse(
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
        )
        .unwrap();
        assert_eq!(decode(&entries[0]).unwrap(), 5353);
    }

    #[test]
    fn wrong_pattern_count_is_rejected() {
        assert!(SevenSegmentSearch::parse("ab cd | ab cd ab cd").is_err());
    }
}
