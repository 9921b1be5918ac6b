use crate::sorting::heap::heap_sort_range;
use crate::sorting::insertion::insertion_range;
use crate::sorting::quick::partition;
use crate::tracer::Tracer;

/// Partitions this small are finished by insertion sort.
const SMALL: usize = 16;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    let depth = 2 * n.max(1).ilog2() as usize;
    intro_sort(t, 0, n, depth);
    t.finish_sorted();
}

fn intro_sort(t: &mut Tracer, lo: usize, hi: usize, depth: usize) {
    let size = hi - lo;
    if size <= 1 {
        if size == 1 {
            t.mark(lo);
        }
        return;
    }
    if size <= SMALL {
        t.frame(format!("Insertion sort on [{lo}, {hi})"))
            .comparing(lo..hi)
            .emit();
        insertion_range(t, lo, hi);
        t.mark_range(lo..hi);
        return;
    }
    if depth == 0 {
        t.frame(format!("Depth limit reached: heap sort on [{lo}, {hi})"))
            .comparing(lo..hi)
            .emit();
        heap_sort_range(t, lo, hi);
        return;
    }

    let mid = lo + size / 2;
    let m = median_of_three(t, lo, mid, hi - 1);
    if m != hi - 1 {
        t.swap(m, hi - 1);
        t.frame(format!("Median {} moved to the pivot slot", t.get(hi - 1)))
            .swapped([m, hi - 1])
            .pivot([hi - 1])
            .emit();
    }
    let p = partition(t, lo, hi - 1);
    intro_sort(t, lo, p, depth - 1);
    intro_sort(t, p + 1, hi, depth - 1);
}

fn median_of_three(t: &mut Tracer, a: usize, b: usize, c: usize) -> usize {
    t.frame("Choosing median of three").comparing([a, b, c]).emit();
    let (va, vb, vc) = (t.get(a), t.get(b), t.get(c));
    if (va <= vb) == (vb <= vc) {
        b
    } else if (vb <= va) == (va <= vc) {
        a
    } else {
        c
    }
}
