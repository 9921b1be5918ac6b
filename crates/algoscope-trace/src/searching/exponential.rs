use crate::searching::binary::binary_range;
use crate::searching::sort_copy;
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    sort_copy(t);
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    t.mark(0);
    t.frame(format!("Checking first element {}", t.get(0)))
        .comparing([0])
        .current(0)
        .emit();
    if t.get(0) == target {
        t.found(0, target);
        return;
    }

    let mut bound = 1;
    while bound < n && t.get(bound) <= target {
        t.mark(bound);
        t.frame(format!("{} <= {target}, doubling the bound", t.get(bound)))
            .comparing([bound])
            .current(bound)
            .emit();
        bound *= 2;
    }

    let lo = bound / 2;
    let hi = (bound + 1).min(n);
    t.frame(format!("Binary search within [{lo}, {hi})"))
        .comparing(lo..hi)
        .emit();
    match binary_range(t, lo, hi, target) {
        Some(i) => t.found(i, target),
        None => t.not_found(target),
    }
}
