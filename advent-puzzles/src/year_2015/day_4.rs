use std::io::Write;

use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2015, day = 4, title = "The Ideal Stocking Stuffer", tags = ["hashing"])]
pub struct StockingStuffer;

impl AocParser for StockingStuffer {
    /// The secret key
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let secret = input.trim();
        if secret.is_empty() {
            return Err(ParseError::MissingData("empty secret key".to_string()));
        }
        if secret.contains(char::is_whitespace) {
            return Err(ParseError::InvalidFormat(format!(
                "secret key '{secret}' contains whitespace"
            )));
        }
        Ok(secret)
    }
}

/// Whether the hex form of `digest` starts with `zeros` zeros.
fn leading_hex_zeros(digest: &md5::Digest, zeros: usize) -> bool {
    let bytes = &digest.0[..zeros / 2];
    bytes.iter().all(|&b| b == 0) && (zeros % 2 == 0 || digest.0[zeros / 2] >> 4 == 0)
}

/// Lowest positive number whose hash, appended to `secret`, starts with
/// `zeros` hex zeros.
fn mine(secret: &str, zeros: usize) -> Result<String, SolveError> {
    let mut buf = Vec::with_capacity(secret.len() + 20);
    (1..=u64::MAX)
        .find(|nonce| {
            buf.clear();
            buf.extend_from_slice(secret.as_bytes());
            // Writing into a Vec cannot fail.
            let _ = write!(buf, "{nonce}");
            leading_hex_zeros(&md5::compute(&buf), zeros)
        })
        .map(|nonce| nonce.to_string())
        .ok_or_else(|| SolveError::NoSolution(format!("no hash with {zeros} leading zeros")))
}

impl PartSolver<1> for StockingStuffer {
    fn solve(secret: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        mine(secret, 5)
    }
}

impl PartSolver<2> for StockingStuffer {
    fn solve(secret: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        mine(secret, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = StockingStuffer::parse(input).unwrap();
        StockingStuffer::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn five_zero_examples() {
        assert_eq!(solve("abcdef\n", 1), "609043");
        assert_eq!(solve("pqrstuv", 1), "1048970");
    }

    #[test]
    fn example_hash_has_five_zeros_not_six() {
        let digest = md5::compute("abcdef609043");
        assert!(format!("{digest:x}").starts_with("000001dbbfa"));
        assert!(leading_hex_zeros(&digest, 5));
        assert!(!leading_hex_zeros(&digest, 6));
    }

    #[test]
    fn odd_and_even_zero_counts() {
        let mut bytes = [0xffu8; 16];
        bytes[..3].copy_from_slice(&[0x00, 0x00, 0x0f]);
        let digest = md5::Digest(bytes);
        assert!(leading_hex_zeros(&digest, 4));
        assert!(leading_hex_zeros(&digest, 5));
        assert!(!leading_hex_zeros(&digest, 6));
    }

    #[test]
    fn secret_must_be_one_word() {
        assert!(matches!(StockingStuffer::parse("  \n"), Err(ParseError::MissingData(_))));
        assert!(matches!(StockingStuffer::parse("ab cd"), Err(ParseError::InvalidFormat(_))));
    }
}
