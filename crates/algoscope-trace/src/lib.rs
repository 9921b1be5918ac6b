//! Instrumented sorting and searching algorithms.
//!
//! [`run`] executes one of the 24 catalogued [`Algorithm`]s on a private
//! copy of an integer array and returns the ordered list of [`Step`]s it
//! went through: the array after each operation, the indices involved,
//! the indices already sorted or visited, and a short description.
//! [`Playback`] steps through such a trace for animated display.
//!
//! Graph searches treat the array as a path graph: index `i` is linked to
//! `i - 1` and `i + 1` with weight `|a[i] - a[j]|`, and the search starts
//! at index 0.

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod error;
pub mod playback;
pub mod step;

mod searching;
mod sorting;
mod tracer;

pub use algorithm::{Algorithm, Family};
pub use config::TraceConfig;
pub use engine::{MAX_ARRAY_LEN, run, run_by_id};
pub use error::TraceError;
pub use playback::{Playback, PlaybackAction};
pub use step::{SearchOutcome, Step};
