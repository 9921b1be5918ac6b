use std::fmt;

use algoscope_core::Point;

use crate::pathfinder::MAX_GRID_CELLS;

/// Errors reported by pathfinding queries.
///
/// An unreachable goal is not an error: it is an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A query endpoint lies outside `[0, grid_size)` on some axis.
    InvalidPosition { pos: Point, grid_size: i32 },
    /// The board has more than [`MAX_GRID_CELLS`] cells.
    GridTooLarge { width: i32, height: i32 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { pos, grid_size } => {
                write!(f, "position {pos} is outside the {grid_size}x{grid_size} grid")
            }
            Self::GridTooLarge { width, height } => {
                write!(f, "{width}x{height} grid exceeds {MAX_GRID_CELLS} cells")
            }
        }
    }
}

impl std::error::Error for PathError {}
