//! Advent of Code puzzle solutions
//!
//! Solutions are grouped by event year behind `year-YYYY` features. Each one
//! registers itself through `#[derive(Puzzle)]`, so linking this crate is
//! enough for `SolverRegistryBuilder::register_all_plugins` to find them.

pub mod utils;

#[cfg(feature = "year-2015")]
pub mod year_2015;

#[cfg(feature = "year-2021")]
pub mod year_2021;

#[cfg(feature = "year-2023")]
pub mod year_2023;
