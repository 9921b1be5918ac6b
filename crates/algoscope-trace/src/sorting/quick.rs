use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    quick_sort(t, 0, n);
    t.finish_sorted();
}

fn quick_sort(t: &mut Tracer, lo: usize, hi: usize) {
    match hi - lo {
        0 => {}
        1 => t.mark(lo),
        _ => {
            let p = partition(t, lo, hi - 1);
            quick_sort(t, lo, p);
            quick_sort(t, p + 1, hi);
        }
    }
}

/// Lomuto partition of `[lo, hi]` around the value at `hi`.
///
/// Returns the pivot's final index, which is marked sorted.
pub(crate) fn partition(t: &mut Tracer, lo: usize, hi: usize) -> usize {
    let pivot = t.get(hi);
    t.frame(format!("Pivot is {pivot}")).pivot([hi]).emit();

    let mut store = lo;
    for j in lo..hi {
        t.frame(format!("Comparing {} with pivot {pivot}", t.get(j)))
            .comparing([j, hi])
            .current(j)
            .pivot([hi])
            .emit();
        if t.get(j) < pivot {
            if store != j {
                t.swap(store, j);
                t.frame(format!("Moved {} left of the pivot", t.get(store)))
                    .swapped([store, j])
                    .pivot([hi])
                    .emit();
            }
            store += 1;
        }
    }
    if store != hi {
        t.swap(store, hi);
    }
    t.mark(store);
    t.frame(format!("Pivot {pivot} placed at position {store}"))
        .swapped([store, hi])
        .pivot([store])
        .emit();
    store
}
