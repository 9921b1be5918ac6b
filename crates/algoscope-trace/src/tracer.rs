//! Working array plus the frames recorded against it.

use crate::step::{SearchOutcome, Step};

/// Private working copy of the caller's array and the trace built so far.
///
/// Algorithms mutate the array only through this type and record a frame
/// with [`Tracer::frame`] after each operation worth showing.
pub(crate) struct Tracer {
    arr: Vec<i32>,
    marked: Vec<bool>,
    steps: Vec<Step>,
}

impl Tracer {
    pub(crate) fn new(input: &[i32]) -> Self {
        Self {
            arr: input.to_vec(),
            marked: vec![false; input.len()],
            steps: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.arr.len()
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> i32 {
        self.arr[i]
    }

    #[inline]
    pub(crate) fn values(&self) -> &[i32] {
        &self.arr
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, v: i32) {
        self.arr[i] = v;
    }

    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.arr.swap(i, j);
    }

    /// Replace the whole working array with a same-length permutation.
    pub(crate) fn replace(&mut self, values: Vec<i32>) {
        debug_assert_eq!(values.len(), self.arr.len());
        self.arr = values;
    }

    /// Record that index `i` holds its final value (sorting) or has been
    /// visited (searching).
    #[inline]
    pub(crate) fn mark(&mut self, i: usize) {
        self.marked[i] = true;
    }

    pub(crate) fn mark_range(&mut self, r: std::ops::Range<usize>) {
        for m in &mut self.marked[r] {
            *m = true;
        }
    }

    #[inline]
    pub(crate) fn is_marked(&self, i: usize) -> bool {
        self.marked[i]
    }

    fn marked_indices(&self) -> Vec<usize> {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }

    /// Start a frame describing the operation just performed.
    pub(crate) fn frame(&mut self, description: impl Into<String>) -> Frame<'_> {
        Frame {
            tracer: self,
            description: description.into(),
            comparing: Vec::new(),
            current: None,
            swapped: Vec::new(),
            pivot: Vec::new(),
            sorted: None,
            outcome: None,
        }
    }

    /// Mark every index sorted and record the closing frame.
    pub(crate) fn finish_sorted(&mut self) {
        let n = self.len();
        self.mark_range(0..n);
        self.frame("Array is sorted").emit();
    }

    /// Record the frame that reports `target` at index `i`.
    pub(crate) fn found(&mut self, i: usize, target: i32) {
        self.frame(format!("Found {target} at index {i}"))
            .current(i)
            .sorted([i])
            .outcome(SearchOutcome::Found(i))
            .emit();
    }

    /// Record the closing frame of an unsuccessful search.
    pub(crate) fn not_found(&mut self, target: i32) {
        self.frame(format!("{target} is not in the array"))
            .outcome(SearchOutcome::NotFound)
            .emit();
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    #[cfg(test)]
    pub(crate) fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Builder for one frame; nothing is recorded until [`Frame::emit`].
#[must_use = "a frame is only recorded by calling emit()"]
pub(crate) struct Frame<'a> {
    tracer: &'a mut Tracer,
    description: String,
    comparing: Vec<usize>,
    current: Option<usize>,
    swapped: Vec<usize>,
    pivot: Vec<usize>,
    sorted: Option<Vec<usize>>,
    outcome: Option<SearchOutcome>,
}

fn index_set(idx: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut v: Vec<usize> = idx.into_iter().collect();
    v.sort_unstable();
    v.dedup();
    v
}

impl Frame<'_> {
    pub(crate) fn comparing(mut self, idx: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = index_set(idx);
        self
    }

    pub(crate) fn current(mut self, i: usize) -> Self {
        self.current = Some(i);
        self
    }

    pub(crate) fn swapped(mut self, idx: impl IntoIterator<Item = usize>) -> Self {
        self.swapped = index_set(idx);
        self
    }

    pub(crate) fn pivot(mut self, idx: impl IntoIterator<Item = usize>) -> Self {
        self.pivot = index_set(idx);
        self
    }

    /// Override the marked set for this frame only.
    pub(crate) fn sorted(mut self, idx: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = Some(index_set(idx));
        self
    }

    pub(crate) fn outcome(mut self, outcome: SearchOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub(crate) fn emit(self) {
        let tracer = self.tracer;
        let sorted = match self.sorted {
            Some(s) => s,
            None => tracer.marked_indices(),
        };
        let step = Step {
            array: tracer.arr.clone(),
            comparing: self.comparing,
            current: self.current,
            sorted,
            swapped: self.swapped,
            pivot: self.pivot,
            description: self.description,
            step: tracer.steps.len(),
            outcome: self.outcome,
        };
        tracer.steps.push(step);
    }
}
