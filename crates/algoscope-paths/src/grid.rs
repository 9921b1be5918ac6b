//! Square board with a set of impassable cells.

use std::collections::HashSet;

use algoscope_core::{Point, Range};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A `grid_size` x `grid_size` board where some cells are blocked.
///
/// Movement is 4-directional with unit cost; the A* estimate is the
/// Manhattan distance.
#[derive(Debug, Clone, Default)]
pub struct ObstacleGrid {
    range: Range,
    blocked: HashSet<Point>,
}

impl ObstacleGrid {
    /// An empty board of side `grid_size`.
    pub fn new(grid_size: i32) -> Self {
        Self {
            range: Range::square(grid_size),
            blocked: HashSet::new(),
        }
    }

    /// A board of side `grid_size` with every point of `obstacles` blocked.
    pub fn with_obstacles(grid_size: i32, obstacles: impl IntoIterator<Item = Point>) -> Self {
        let mut grid = Self::new(grid_size);
        grid.extend(obstacles);
        grid
    }

    /// The board rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Unblock every cell, keeping the board size.
    pub fn clear(&mut self) {
        self.blocked.clear();
    }

    /// Block every point yielded by `points`.
    pub fn extend(&mut self, points: impl IntoIterator<Item = Point>) {
        self.blocked.extend(points);
    }

    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    /// Whether `p` is on the board and not blocked.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.range.contains(p) && !self.is_blocked(p)
    }
}

impl Pather for ObstacleGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_free(n)));
    }
}

impl WeightedPather for ObstacleGrid {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for ObstacleGrid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
