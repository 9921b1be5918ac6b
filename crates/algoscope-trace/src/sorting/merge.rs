use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    merge_sort(t, 0, n);
    t.finish_sorted();
}

fn merge_sort(t: &mut Tracer, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    t.frame(format!("Splitting [{lo}, {hi}) at {mid}"))
        .comparing(lo..hi)
        .emit();
    merge_sort(t, lo, mid);
    merge_sort(t, mid, hi);
    merge(t, lo, mid, hi);
}

/// Merge the sorted runs `[lo, mid)` and `[mid, hi)` through auxiliary
/// buffers, recording every write.
pub(crate) fn merge(t: &mut Tracer, lo: usize, mid: usize, hi: usize) {
    let left = t.values()[lo..mid].to_vec();
    let right = t.values()[mid..hi].to_vec();
    t.frame(format!("Merging [{lo}, {mid}) with [{mid}, {hi})"))
        .comparing(lo..hi)
        .emit();

    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        let (a, b) = (left[i], right[j]);
        t.frame(format!("Comparing {a} and {b}"))
            .comparing([k, mid + j])
            .current(k)
            .emit();
        // `<=` keeps equal keys in their original order.
        let v = if a <= b {
            i += 1;
            a
        } else {
            j += 1;
            b
        };
        write(t, k, v);
        k += 1;
    }
    for &v in left[i..].iter().chain(&right[j..]) {
        write(t, k, v);
        k += 1;
    }
}

fn write(t: &mut Tracer, k: usize, v: i32) {
    t.set(k, v);
    t.frame(format!("Placed {v} at position {k}"))
        .swapped([k])
        .current(k)
        .emit();
}
