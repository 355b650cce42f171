use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use itertools::Itertools;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(
    year = 2015,
    day = 5,
    title = "Doesn't He Have Intern-Elves For This?",
    tags = ["strings"]
)]
pub struct InternElves;

impl AocParser for InternElves {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<_> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if let Some(bad) = words.iter().find(|w| !w.bytes().all(|b| b.is_ascii_lowercase())) {
            return Err(ParseError::InvalidFormat(format!("'{bad}' is not lowercase ascii")));
        }
        Ok(words)
    }
}

fn nice_by_old_rules(word: &str) -> bool {
    let bytes = word.as_bytes();
    let vowels = bytes.iter().filter(|b| b"aeiou".contains(b)).count();
    let doubled = bytes.iter().tuple_windows().any(|(a, b)| a == b);
    let forbidden = ["ab", "cd", "pq", "xy"].iter().any(|pair| word.contains(pair));
    vowels >= 3 && doubled && !forbidden
}

fn nice_by_new_rules(word: &str) -> bool {
    let bytes = word.as_bytes();
    let repeated_pair = (0..bytes.len().saturating_sub(1))
        .any(|i| bytes[i + 2..].windows(2).any(|w| w == &bytes[i..i + 2]));
    let sandwich = bytes.iter().tuple_windows().any(|(a, _, c)| a == c);
    repeated_pair && sandwich
}

impl PartSolver<1> for InternElves {
    fn solve(words: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(words.iter().filter(|w| nice_by_old_rules(w)).count().to_string())
    }
}

impl PartSolver<2> for InternElves {
    fn solve(words: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(words.iter().filter(|w| nice_by_new_rules(w)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_rules() {
        assert!(nice_by_old_rules("ugknbfddgicrmopn"));
        assert!(nice_by_old_rules("aaa"));
        assert!(!nice_by_old_rules("jchzalrnumimnmhp"));
        assert!(!nice_by_old_rules("haegwjzuvuyypxyu"));
        assert!(!nice_by_old_rules("dvszwmarrgswjxmb"));
    }

    #[test]
    fn new_rules() {
        assert!(nice_by_new_rules("qjhvhtzxzqqjkmpb"));
        assert!(nice_by_new_rules("xxyxx"));
        assert!(!nice_by_new_rules("uurcxstgmygtbstg"));
        assert!(!nice_by_new_rules("ieodomkazucvgmuy"));
        assert!(!nice_by_new_rules("aaa"));
    }

    #[test]
    fn counts_nice_words() {
        use advent_core::Solver;
        let mut words = InternElves::parse("ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\n").unwrap();
        assert_eq!(InternElves::solve_part(&mut words, 1).unwrap(), "2");
    }
}
