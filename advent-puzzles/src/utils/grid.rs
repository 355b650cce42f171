//! Row-major rectangular grids addressed by [`Point`]

use std::ops::{Index, IndexMut};

use advent_core::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shifted point, or `None` if either coordinate would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A `width` x `height` grid filled with `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build from rows, rejecting rows of unequal length.
    pub fn from_rows<I>(rows: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) row has {} cells, expected {w}",
                        height + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Row-major position of `p`.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.y * self.width + p.x)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Every point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.neighbors(p, &ORTHOGONAL)
    }

    /// In-bounds neighbours of `p`, diagonals included.
    pub fn neighbors8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.neighbors(p, &SURROUNDING)
    }

    fn neighbors<'a>(
        &'a self,
        p: Point,
        deltas: &'static [(isize, isize)],
    ) -> impl Iterator<Item = Point> + 'a {
        deltas
            .iter()
            .filter_map(move |&(dx, dy)| p.offset(dx, dy))
            .filter(move |q| self.contains(*q))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        assert!(self.contains(p), "{p:?} outside {}x{} grid", self.width, self.height);
        &self.cells[p.y * self.width + p.x]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        assert!(self.contains(p), "{p:?} outside {}x{} grid", self.width, self.height);
        &mut self.cells[p.y * self.width + p.x]
    }
}

/// Parse a block of single-digit cells such as `"123\n456"`.
pub fn parse_digit_grid(input: &str) -> Result<Grid<u8>, ParseError> {
    let rows = input
        .trim()
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.trim()
                .chars()
                .map(|c| {
                    c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                        ParseError::InvalidFormat(format!("(line {}) '{c}' is not a digit", idx + 1))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    non_empty(Grid::from_rows(rows)?)
}

/// Parse a block of characters, one cell per byte-sized char.
pub fn parse_char_grid(input: &str) -> Result<Grid<char>, ParseError> {
    non_empty(Grid::from_rows(
        input.trim_end().lines().map(|line| line.trim_end().chars().collect()),
    )?)
}

fn non_empty<T>(grid: Grid<T>) -> Result<Grid<T>, ParseError> {
    if grid.width == 0 || grid.height == 0 {
        return Err(ParseError::MissingData("empty grid".to_string()));
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_grid_is_row_major() {
        let grid = parse_digit_grid("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[Point::new(2, 0)], 3);
        assert_eq!(grid[Point::new(0, 1)], 4);
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.index_of(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn ragged_rows_are_rejected_with_line_number() {
        let err = parse_digit_grid("12\n345").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
    }

    #[test]
    fn non_digit_and_empty_input_fail() {
        assert!(matches!(parse_digit_grid("1x"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse_char_grid(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn neighbours_stay_inside() {
        let grid = Grid::new(3, 3, 0);
        let corner: Vec<_> = grid.neighbors4(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(grid.neighbors4(Point::new(1, 1)).count(), 4);
        assert_eq!(grid.neighbors8(Point::new(1, 1)).count(), 8);
        assert_eq!(grid.neighbors8(Point::new(2, 2)).count(), 3);
    }

    #[test]
    fn points_cover_every_cell_once() {
        let grid = Grid::new(4, 2, ());
        let points: Vec<_> = grid.points().collect();
        assert_eq!(points.len(), 8);
        assert_eq!(points[5], Point::new(1, 1));
    }

    #[test]
    fn offset_refuses_negative_coordinates() {
        assert_eq!(Point::new(0, 3).offset(-1, 0), None);
        assert_eq!(Point::new(2, 3).offset(-1, 1), Some(Point::new(1, 4)));
    }
}
