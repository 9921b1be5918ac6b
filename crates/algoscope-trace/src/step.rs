//! Trace frames.

/// How a search trace ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SearchOutcome {
    /// The target sits at this index of the frame's array.
    Found(usize),
    NotFound,
}

/// One immutable snapshot of an algorithm run.
///
/// `array` is the working array after the operation in `description`.
/// Index sets are ascending and deduplicated. In search traces `sorted`
/// holds the visited indices, or exactly the found index on the frame that
/// reports success.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Step {
    pub array: Vec<i32>,
    pub comparing: Vec<usize>,
    pub current: Option<usize>,
    pub sorted: Vec<usize>,
    pub swapped: Vec<usize>,
    pub pivot: Vec<usize>,
    pub description: String,
    pub step: usize,
    /// Set only on the final frame of a search trace.
    pub outcome: Option<SearchOutcome>,
}

impl Step {
    /// Whether this frame reports the target as found.
    pub fn found_index(&self) -> Option<usize> {
        match self.outcome {
            Some(SearchOutcome::Found(i)) => Some(i),
            _ => None,
        }
    }
}
