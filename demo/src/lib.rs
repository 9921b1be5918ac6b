//! Terminal front-end for the algoscope libraries.
//!
//! Demonstrates: the snake autopilot (A* towards the food with a random
//! safe fallback) on boards of three difficulties, and animated playback of
//! any of the 24 traced sorting and searching algorithms, both drawn with
//! crossterm.

pub mod app;
pub mod cli;
pub mod error;
pub mod keys;
pub mod render;
pub mod snake;
pub mod term;

pub use cli::{Command, USAGE};
pub use error::DemoError;
pub use keys::{Input, Keys};
pub use snake::{Difficulty, GameOver, GridConfig, SnakeGame, Tick};
pub use term::Terminal;
