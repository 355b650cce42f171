//! Small parsing helpers shared by solvers

use std::fmt::Display;
use std::str::FromStr;

use advent_core::ParseError;
use anyhow::anyhow;

/// Wrap any displayable error as [`ParseError::InvalidFormat`].
pub fn invalid<E: Display>(err: E) -> ParseError {
    ParseError::InvalidFormat(err.to_string())
}

/// Apply `f` to every non-blank line, prefixing failures with the 1-based
/// line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line.trim()).map_err(|e| anyhow!("(line {}) {}", idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

/// Parse numbers separated by `sep` (blank pieces are skipped).
pub fn parse_separated<T>(input: &str, sep: char) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .split(sep)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("'{piece}': {e}")))
        })
        .collect()
}

/// Parse whitespace-separated numbers.
pub fn parse_numbers<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .split_whitespace()
        .map(|piece| {
            piece
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("'{piece}': {e}")))
        })
        .collect()
}

/// Split on blank lines, tolerating `\r\n` endings.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input.trim();
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim().is_empty() {
                let block = rest[..offset].trim();
                rest = rest[offset + line.len()..].trim_start();
                return Some(block);
            }
            offset += line.len();
        }
        let block = rest.trim();
        rest = "";
        Some(block)
    })
}
