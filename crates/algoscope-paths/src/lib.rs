//! Pathfinding for the snake autopilot.
//!
//! This crate computes shortest 4-directional paths on a bounded square grid
//! with A* and turns them into single-step movement decisions:
//!
//! - **A\*** shortest-path search ([`Pathfinder::astar_path`], [`find_path`])
//! - **Trail** for drawing the planned route ([`pathfinding_trail`])
//! - **Autopilot** next-move decision with a random safe fallback
//!   ([`next_direction`], [`Navigator`])
//!
//! [`Pathfinder`] owns and reuses its node array so that repeated queries
//! incur no allocations after warm-up. An unreachable goal yields an empty
//! path; only off-grid endpoints and boards over [`MAX_GRID_CELLS`] cells
//! are errors ([`PathError`]).
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod distance;
mod error;
mod grid;
mod navigator;
mod pathfinder;
mod traits;

pub use distance::manhattan;
pub use error::PathError;
pub use grid::ObstacleGrid;
pub use navigator::{Navigator, find_path, next_direction, pathfinding_trail};
pub use pathfinder::{MAX_GRID_CELLS, Pathfinder};
pub use traits::{AstarPather, Pather, WeightedPather};
