//! Text renderings of a snake board and of a trace frame.
//!
//! Renderers produce plain characters tagged with a semantic class; the
//! terminal layer picks colours for the classes.

use algoscope_core::Point;
use algoscope_trace::Step;

use crate::snake::SnakeGame;

// ---------------------------------------------------------------------------
// Snake board
// ---------------------------------------------------------------------------

/// Content of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Obstacle,
    Food,
    Head,
    Body,
    /// On the planned route to the food.
    Trail,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Obstacle => '#',
            Tile::Food => '*',
            Tile::Head => '@',
            Tile::Body => 'o',
            Tile::Trail => '.',
        }
    }
}

/// Board rows, top to bottom.
pub fn snake_tiles(game: &SnakeGame) -> Vec<Vec<Tile>> {
    let size = game.config().grid_size;
    let mut rows = vec![vec![Tile::Empty; size as usize]; size as usize];
    let mut put = |p: Point, tile: Tile| {
        if game.range().contains(p) {
            rows[p.y as usize][p.x as usize] = tile;
        }
    };
    for &p in game.trail() {
        put(p, Tile::Trail);
    }
    for &p in game.obstacles() {
        put(p, Tile::Obstacle);
    }
    if let Some(food) = game.food() {
        put(food, Tile::Food);
    }
    for &p in game.snake().iter().skip(1) {
        put(p, Tile::Body);
    }
    put(game.head(), Tile::Head);
    rows
}

pub fn snake_lines(game: &SnakeGame) -> Vec<String> {
    snake_tiles(game)
        .iter()
        .map(|row| row.iter().map(|t| t.glyph()).collect())
        .collect()
}

pub fn snake_status(game: &SnakeGame) -> String {
    let mut status = format!(
        "score {}  length {}  tick {}",
        game.score(),
        game.snake().len(),
        game.ticks()
    );
    if let Some(reason) = game.game_over() {
        status.push_str(&format!("  GAME OVER: {reason}"));
    }
    status
}

// ---------------------------------------------------------------------------
// Trace frame
// ---------------------------------------------------------------------------

/// Highlight of one array index in a frame, strongest first when several
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Idle,
    /// Sorted, or visited by a search.
    Sorted,
    Comparing,
    Swapped,
    Pivot,
    Current,
    Found,
}

pub const BAR: char = '\u{2588}';

/// Strongest role of every index of `step`.
pub fn roles(step: &Step) -> Vec<Role> {
    let mut roles = vec![Role::Idle; step.array.len()];
    let mut raise = |i: usize, role: Role| {
        if let Some(r) = roles.get_mut(i) {
            *r = (*r).max(role);
        }
    };
    for &i in &step.sorted {
        raise(i, Role::Sorted);
    }
    for &i in &step.comparing {
        raise(i, Role::Comparing);
    }
    for &i in &step.swapped {
        raise(i, Role::Swapped);
    }
    for &i in &step.pivot {
        raise(i, Role::Pivot);
    }
    if let Some(i) = step.current {
        raise(i, Role::Current);
    }
    if let Some(i) = step.found_index() {
        raise(i, Role::Found);
    }
    roles
}

/// Bar height of each value, between 1 and `height` rows. The bar scale
/// starts at zero or at the smallest value, whichever is lower.
pub fn bar_heights(values: &[i32], height: usize) -> Vec<usize> {
    let height = height.max(1);
    let lo = values.iter().copied().min().unwrap_or(0).min(0);
    let hi = values.iter().copied().max().unwrap_or(0).max(0);
    let span = i64::from(hi) - i64::from(lo);
    values
        .iter()
        .map(|&v| {
            if span == 0 {
                return 1;
            }
            let rel = (i64::from(v) - i64::from(lo)) * (height as i64 - 1) / span;
            1 + rel as usize
        })
        .collect()
}

/// Vertical bar chart of `step`, top row first, one column per index.
pub fn step_cells(step: &Step, height: usize) -> Vec<Vec<(char, Role)>> {
    let heights = bar_heights(&step.array, height);
    let roles = roles(step);
    let height = height.max(1);
    (0..height)
        .map(|row| {
            let level = height - row;
            heights
                .iter()
                .zip(&roles)
                .map(|(&h, &role)| (if h >= level { BAR } else { ' ' }, role))
                .collect()
        })
        .collect()
}

pub fn step_lines(step: &Step, height: usize) -> Vec<String> {
    step_cells(step, height)
        .iter()
        .map(|row| row.iter().map(|&(c, _)| c).collect())
        .collect()
}

/// One-line caption: position in the trace and the frame's description.
pub fn step_status(step: &Step, total: usize) -> String {
    format!(
        "[{}/{}] {}",
        step.step,
        total.saturating_sub(1),
        step.description
    )
}
