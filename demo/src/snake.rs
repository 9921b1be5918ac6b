//! Self-driving snake on a square board.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use algoscope_core::{Direction, Point, Range};
use algoscope_paths::{Navigator, PathError, manhattan};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::DemoError;

/// Segments of a freshly spawned snake.
pub const INITIAL_LENGTH: usize = 3;

/// Smallest board the initial snake fits on with room to move.
pub const MIN_GRID_SIZE: i32 = 5;

/// Board presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn config(self) -> GridConfig {
        match self {
            Difficulty::Easy => GridConfig {
                grid_size: 15,
                obstacles: 0,
                tick: Duration::from_millis(150),
            },
            Difficulty::Normal => GridConfig {
                grid_size: 20,
                obstacles: 12,
                tick: Duration::from_millis(100),
            },
            Difficulty::Hard => GridConfig {
                grid_size: 25,
                obstacles: 40,
                tick: Duration::from_millis(70),
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DemoError::UnknownDifficulty(s.to_string()))
    }
}

/// Board size, obstacle count and game speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub grid_size: i32,
    pub obstacles: usize,
    /// Interval between two snake moves.
    pub tick: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    /// No adjacent cell was free.
    Trapped,
    /// The head ran into a wall, an obstacle or the body.
    Collision,
    /// No free cell was left for food.
    BoardFull,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameOver::Trapped => "trapped with no legal move",
            GameOver::Collision => "collision",
            GameOver::BoardFull => "board full",
        })
    }
}

/// Result of one [`SnakeGame::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Moved(Direction),
    Ate(Direction),
    Over(GameOver),
}

/// A snake steered by the autopilot towards the food.
///
/// `snake[0]` is the head. All randomness (obstacles, food, fallback moves)
/// comes from one seeded generator, so a seed replays the same game.
pub struct SnakeGame {
    config: GridConfig,
    rng: SmallRng,
    navigator: Navigator,
    snake: Vec<Point>,
    obstacles: Vec<Point>,
    food: Option<Point>,
    trail: Vec<Point>,
    score: u32,
    ticks: u32,
    over: Option<GameOver>,
}

impl SnakeGame {
    /// Start a game: snake in the middle heading right, obstacles away from
    /// its head, then the first food.
    pub fn new(mut config: GridConfig, seed: u64) -> Result<Self, PathError> {
        config.grid_size = config.grid_size.max(MIN_GRID_SIZE);
        let navigator = Navigator::new(config.grid_size)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let c = config.grid_size / 2;
        let snake: Vec<Point> = (0..INITIAL_LENGTH as i32)
            .map(|i| Point::new(c - i, c))
            .collect();

        let head = snake[0];
        let mut candidates: Vec<Point> = Range::square(config.grid_size)
            .iter()
            .filter(|p| !snake.contains(p) && manhattan(*p, head) > 2)
            .collect();
        candidates.shuffle(&mut rng);
        candidates.truncate(config.obstacles);
        let obstacles = candidates;

        let mut game = Self {
            config,
            rng,
            navigator,
            snake,
            obstacles,
            food: None,
            trail: Vec::new(),
            score: 0,
            ticks: 0,
            over: None,
        };
        game.food = game.spawn_food();
        game.refresh_trail()?;
        log::debug!(
            "new game: size {}, {} obstacles, food at {:?}",
            game.config.grid_size,
            game.obstacles.len(),
            game.food
        );
        Ok(game)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        config: GridConfig,
        snake: Vec<Point>,
        obstacles: Vec<Point>,
        food: Point,
    ) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(0),
            navigator: Navigator::new(config.grid_size).unwrap(),
            snake,
            obstacles,
            food: Some(food),
            trail: Vec::new(),
            score: 0,
            ticks: 0,
            over: None,
        }
    }

    /// Advance the snake one cell.
    pub fn tick(&mut self) -> Result<Tick, PathError> {
        if let Some(reason) = self.over {
            return Ok(Tick::Over(reason));
        }
        let Some(food) = self.food else {
            return Ok(self.end(GameOver::BoardFull));
        };
        let head = self.head();
        let dir = match self.navigator.next_direction(
            head,
            food,
            &self.obstacles,
            &self.snake,
            &mut self.rng,
        )? {
            Some(d) => d,
            None => return Ok(self.end(GameOver::Trapped)),
        };

        let next = dir.apply(head);
        let body = &self.snake[..self.snake.len() - 1];
        if !self.range().contains(next) || self.obstacles.contains(&next) || body.contains(&next) {
            return Ok(self.end(GameOver::Collision));
        }

        self.snake.insert(0, next);
        self.ticks += 1;
        let ate = next == food;
        if ate {
            self.score += 1;
            self.food = self.spawn_food();
            if self.food.is_none() {
                return Ok(self.end(GameOver::BoardFull));
            }
        } else {
            self.snake.pop();
        }
        self.refresh_trail()?;
        Ok(if ate { Tick::Ate(dir) } else { Tick::Moved(dir) })
    }

    fn end(&mut self, reason: GameOver) -> Tick {
        self.over = Some(reason);
        self.trail.clear();
        log::debug!(
            "game over after {} ticks with score {}: {reason}",
            self.ticks,
            self.score
        );
        Tick::Over(reason)
    }

    /// A random cell that is neither snake nor obstacle.
    fn spawn_food(&mut self) -> Option<Point> {
        let free: Vec<Point> = self
            .range()
            .iter()
            .filter(|p| !self.snake.contains(p) && !self.obstacles.contains(p))
            .collect();
        free.choose(&mut self.rng).copied()
    }

    fn refresh_trail(&mut self) -> Result<(), PathError> {
        self.trail = match self.food {
            Some(food) => self
                .navigator
                .plan(self.snake[0], food, &self.obstacles, &self.snake)?,
            None => Vec::new(),
        };
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn range(&self) -> Range {
        self.navigator.range()
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    /// Segments from head to tail.
    pub fn snake(&self) -> &[Point] {
        &self.snake
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Planned route from the head to the food; empty when unreachable.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.over
    }
}
