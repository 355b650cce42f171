//! Helpers shared across puzzles

pub mod grid;
pub mod indexed_heap;
pub mod parse;
pub mod shortest_path;

pub use grid::{Grid, Point, parse_char_grid, parse_digit_grid};
pub use indexed_heap::{Comparator, Handle, HeapError, IndexedMinHeap, NaturalOrder};
pub use parse::{blocks, invalid, parse_lines, parse_numbers, parse_separated};
pub use shortest_path::{DistanceOrder, shortest_path};
