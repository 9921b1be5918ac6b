//! Snake autopilot: shortest path to the food, or a random safe step.

use algoscope_core::{Direction, Point, Range};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::PathError;
use crate::grid::ObstacleGrid;
use crate::pathfinder::Pathfinder;

/// Shortest 4-directional path from `start` to `goal` on a square board.
///
/// Returns `Ok(vec![])` when the goal cannot be reached.
pub fn find_path(
    start: Point,
    goal: Point,
    grid_size: i32,
    obstacles: &[Point],
) -> Result<Vec<Point>, PathError> {
    let grid = ObstacleGrid::with_obstacles(grid_size, obstacles.iter().copied());
    Pathfinder::new(grid.range())?.find(&grid, start, goal)
}

/// The path drawn as the AI's planned trail. Same query as [`find_path`].
pub fn pathfinding_trail(
    start: Point,
    goal: Point,
    grid_size: i32,
    obstacles: &[Point],
) -> Result<Vec<Point>, PathError> {
    find_path(start, goal, grid_size, obstacles)
}

/// One-shot form of [`Navigator::next_direction`].
pub fn next_direction<R: Rng + ?Sized>(
    head: Point,
    target: Point,
    grid_size: i32,
    obstacles: &[Point],
    snake_body: &[Point],
    rng: &mut R,
) -> Result<Option<Direction>, PathError> {
    Navigator::new(grid_size)?.next_direction(head, target, obstacles, snake_body, rng)
}

/// Reusable per-game navigator.
///
/// Keeps the board and A* caches between ticks.
pub struct Navigator {
    grid: ObstacleGrid,
    finder: Pathfinder,
}

impl Navigator {
    /// Fails when the board is too large for a [`Pathfinder`].
    pub fn new(grid_size: i32) -> Result<Self, PathError> {
        let grid = ObstacleGrid::new(grid_size);
        let finder = Pathfinder::new(grid.range())?;
        Ok(Self { grid, finder })
    }

    /// Shortest path from `head` to `target`, treating `obstacles` and every
    /// body segment after the head as blocked.
    pub fn plan(
        &mut self,
        head: Point,
        target: Point,
        obstacles: &[Point],
        snake_body: &[Point],
    ) -> Result<Vec<Point>, PathError> {
        self.load(obstacles, snake_body);
        self.finder.find(&self.grid, head, target)
    }

    /// Direction of the first step towards `target`.
    ///
    /// Without a path, picks uniformly among the adjacent cells that are on
    /// the board, not obstacles and not body. `Ok(None)` means no legal move
    /// exists.
    pub fn next_direction<R: Rng + ?Sized>(
        &mut self,
        head: Point,
        target: Point,
        obstacles: &[Point],
        snake_body: &[Point],
        rng: &mut R,
    ) -> Result<Option<Direction>, PathError> {
        let path = self.plan(head, target, obstacles, snake_body)?;
        if path.len() >= 2 {
            return Ok(Direction::between(path[0], path[1]));
        }

        let safe = self.safe_directions(head);
        let choice = safe.choose(rng).copied();
        match choice {
            Some(d) => log::trace!("no path {head} -> {target}, random safe move {d}"),
            None => log::warn!("no legal move from {head}"),
        }
        Ok(choice)
    }

    /// Directions from `head` into cells that are free on the currently
    /// loaded board.
    fn safe_directions(&self, head: Point) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.grid.is_free(d.apply(head)))
            .collect()
    }

    fn load(&mut self, obstacles: &[Point], snake_body: &[Point]) {
        self.grid.clear();
        self.grid.extend(obstacles.iter().copied());
        self.grid.extend(snake_body.iter().skip(1).copied());
    }

    /// The board rectangle.
    pub fn range(&self) -> Range {
        self.grid.range()
    }
}
