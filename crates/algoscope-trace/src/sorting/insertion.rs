use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    insertion_range(t, 0, n);
    t.finish_sorted();
}

/// Insertion sort of `[lo, hi)` by adjacent swaps. Marks nothing: positions
/// are final only relative to the slice.
pub(crate) fn insertion_range(t: &mut Tracer, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        t.frame(format!("Inserting {}", t.get(i))).current(i).emit();
        let mut j = i;
        while j > lo {
            let (a, b) = (t.get(j - 1), t.get(j));
            t.frame(format!("Comparing {a} and {b}"))
                .comparing([j - 1, j])
                .current(j)
                .emit();
            if a <= b {
                break;
            }
            t.swap(j - 1, j);
            t.frame(format!("Shifted {a} right"))
                .swapped([j - 1, j])
                .current(j - 1)
                .emit();
            j -= 1;
        }
    }
}
