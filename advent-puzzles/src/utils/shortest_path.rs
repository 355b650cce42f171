//! Dijkstra over a rectangular grid with per-cell entry costs

use tracing::trace;

use super::grid::Point;
use super::indexed_heap::{Comparator, Handle, IndexedMinHeap};

/// Heap ordering backed by the distance table of the search.
#[derive(Debug, Clone)]
pub struct DistanceOrder {
    dist: Vec<u64>,
}

impl DistanceOrder {
    pub fn new(cells: usize) -> Self {
        Self {
            dist: vec![u64::MAX; cells],
        }
    }

    pub fn distance(&self, cell: usize) -> u64 {
        self.dist[cell]
    }
}

impl Comparator<usize> for DistanceOrder {
    fn less(&self, a: &usize, b: &usize) -> bool {
        self.dist[*a] < self.dist[*b]
    }
}

/// Minimum total cost of moving from `start` to `goal` in a `width` x
/// `height` grid.
///
/// Moving into a cell costs `entry_cost(cell)`; the start cell itself is
/// free. `None` from `entry_cost` marks a wall. Returns `None` when either
/// endpoint is outside the grid or no path exists.
///
/// ```
/// use advent_puzzles::utils::{Point, shortest_path};
///
/// let cost = shortest_path(2, 2, Point::new(0, 0), Point::new(1, 1), |_| Some(1));
/// assert_eq!(cost, Some(2));
/// ```
pub fn shortest_path<F>(
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
    entry_cost: F,
) -> Option<u64>
where
    F: Fn(Point) -> Option<u64>,
{
    let cell_of = |p: Point| (p.x < width && p.y < height).then(|| p.y * width + p.x);
    let start_cell = cell_of(start)?;
    let goal_cell = cell_of(goal)?;
    if start_cell == goal_cell {
        return Some(0);
    }

    let mut order = DistanceOrder::new(width * height);
    order.dist[start_cell] = 0;
    let mut heap = IndexedMinHeap::with_capacity(width * height, order);

    // Cell index -> heap handle; walls never enter the frontier.
    let mut handles: Vec<Option<Handle>> = vec![None; width * height];
    for y in 0..height {
        for x in 0..width {
            let p = Point::new(x, y);
            let cell = y * width + x;
            if cell == start_cell || entry_cost(p).is_some() {
                handles[cell] = Some(heap.insert(cell));
            }
        }
    }

    while let Some((_, cell)) = heap.pop() {
        let dist = heap.order().distance(cell);
        if dist == u64::MAX {
            trace!(cell, "frontier exhausted");
            return None;
        }
        if cell == goal_cell {
            return Some(dist);
        }

        let here = Point::new(cell % width, cell / width);
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let Some(next) = here.offset(dx, dy) else {
                continue;
            };
            let Some(next_cell) = cell_of(next) else {
                continue;
            };
            let Some(handle) = handles[next_cell].filter(|h| heap.contains(*h)) else {
                continue;
            };
            let Some(cost) = entry_cost(next) else {
                continue;
            };

            let candidate = dist.saturating_add(cost);
            if candidate < heap.order().distance(next_cell) {
                heap.order_mut().dist[next_cell] = candidate;
                let repaired = heap.decrease(handle);
                debug_assert!(repaired.is_ok(), "{repaired:?}");
            }
        }
        trace!(cell, dist, remaining = heap.len(), "settled");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::{Grid, parse_digit_grid};

    fn solve(grid: &Grid<u8>) -> Option<u64> {
        shortest_path(
            grid.width(),
            grid.height(),
            Point::new(0, 0),
            Point::new(grid.width() - 1, grid.height() - 1),
            |p| grid.get(p).map(|&c| u64::from(c)),
        )
    }

    #[test]
    fn uniform_square() {
        let grid = parse_digit_grid("11\n11").unwrap();
        assert_eq!(solve(&grid), Some(2));
    }

    #[test]
    fn takes_cheaper_detour() {
        let grid = parse_digit_grid(
            "\
19111
19191
11191",
        )
        .unwrap();
        // Snakes around both walls of nines instead of crossing one.
        assert_eq!(solve(&grid), Some(10));
        let direct = parse_digit_grid("19\n91").unwrap();
        assert_eq!(solve(&direct), Some(10));
    }

    #[test]
    fn single_cell_costs_nothing() {
        let grid = parse_digit_grid("7").unwrap();
        assert_eq!(solve(&grid), Some(0));
    }

    #[test]
    fn walled_off_goal_has_no_path() {
        let walls = ["..#", "###", "..."];
        let passable = |p: Point| (walls[p.y].as_bytes()[p.x] == b'.').then_some(1);
        assert_eq!(
            shortest_path(3, 3, Point::new(0, 0), Point::new(2, 2), passable),
            None
        );
        assert_eq!(
            shortest_path(3, 3, Point::new(0, 0), Point::new(1, 0), passable),
            Some(1)
        );
    }

    #[test]
    fn out_of_bounds_endpoint_has_no_path() {
        assert_eq!(shortest_path(2, 2, Point::new(0, 0), Point::new(2, 0), |_| Some(1)), None);
    }
}
