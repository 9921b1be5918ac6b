//! Shared grid geometry for the algoscope crates.
//!
//! This crate provides the small value types used across the *algoscope*
//! workspace: integer grid cells, half-open rectangles and the four cardinal
//! movement directions.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range, RangeIter};
