use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    heap_sort_range(t, 0, n);
    t.finish_sorted();
}

/// Heap sort of `[lo, hi)`. Extracted maxima are marked sorted, so callers
/// must only pass a slice whose values all belong in it.
pub(crate) fn heap_sort_range(t: &mut Tracer, lo: usize, hi: usize) {
    let n = hi - lo;
    if n == 0 {
        return;
    }
    t.frame(format!("Building max-heap over [{lo}, {hi})"))
        .comparing(lo..hi)
        .emit();
    for root in (0..n / 2).rev() {
        sift_down(t, lo, root, n);
    }
    for end in (1..n).rev() {
        t.swap(lo, lo + end);
        t.mark(lo + end);
        t.frame(format!("Moved max {} to position {}", t.get(lo + end), lo + end))
            .swapped([lo, lo + end])
            .emit();
        sift_down(t, lo, 0, end);
    }
    t.mark(lo);
}

/// Restore the max-heap property below `root` for a heap of `len` nodes
/// stored from `lo`.
fn sift_down(t: &mut Tracer, lo: usize, mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;
        let mut largest = root;
        if t.get(lo + left) > t.get(lo + largest) {
            largest = left;
        }
        if right < len && t.get(lo + right) > t.get(lo + largest) {
            largest = right;
        }
        let children = if right < len {
            vec![lo + left, lo + right]
        } else {
            vec![lo + left]
        };
        t.frame(format!("Comparing {} with its children", t.get(lo + root)))
            .comparing(children.into_iter().chain([lo + root]))
            .current(lo + root)
            .emit();
        if largest == root {
            return;
        }
        t.swap(lo + root, lo + largest);
        t.frame(format!("Sifted {} down", t.get(lo + largest)))
            .swapped([lo + root, lo + largest])
            .emit();
        root = largest;
    }
}
