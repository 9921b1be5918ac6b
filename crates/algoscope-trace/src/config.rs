//! Trace request configuration.

use std::time::Duration;

use rand::{Rng, RngExt};
use rand::seq::IndexedRandom;

use crate::algorithm::Algorithm;
use crate::engine::MAX_ARRAY_LEN;

/// Values of generated arrays are drawn from `VALUE_RANGE`.
pub const VALUE_RANGE: std::ops::RangeInclusive<i32> = 1..=99;

/// What to trace and how fast to play it back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TraceConfig {
    pub algorithm: Algorithm,
    /// Length of generated arrays, clamped to `1..=MAX_ARRAY_LEN`.
    pub array_size: usize,
    /// Search target; a value from the array is picked when unset.
    pub target: Option<i32>,
    /// Interval between frames at normal speed, in milliseconds.
    pub interval_ms: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::BubbleSort,
            array_size: 20,
            target: None,
            interval_ms: 200,
        }
    }
}

impl TraceConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Set the array length, clamped to what the engine accepts.
    pub fn with_array_size(mut self, n: usize) -> Self {
        self.array_size = n.clamp(1, MAX_ARRAY_LEN);
        self
    }

    pub fn with_target(mut self, target: i32) -> Self {
        self.target = Some(target);
        self
    }

    /// Effective array length.
    pub fn array_size(&self) -> usize {
        self.array_size.clamp(1, MAX_ARRAY_LEN)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Generate an input array of [`TraceConfig::array_size`] values.
    pub fn random_array<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i32> {
        (0..self.array_size())
            .map(|_| rng.random_range(VALUE_RANGE))
            .collect()
    }

    /// The target to search for in `array`: the configured one, or a value
    /// picked from the array. Sorting algorithms get `None`.
    pub fn resolve_target<R: Rng + ?Sized>(
        &self,
        array: &[i32],
        rng: &mut R,
    ) -> Option<i32> {
        if !self.algorithm.needs_target() {
            return None;
        }
        self.target.or_else(|| array.choose(rng).copied())
    }
}
