use crate::searching::sort_copy;
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    sort_copy(t);
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }
    let jump = ((n as f64).sqrt() as usize).max(1);

    // Jump block by block until the block's last element reaches the target.
    let mut prev = 0;
    let mut end = jump.min(n);
    loop {
        let probe = end - 1;
        let v = t.get(probe);
        t.mark(probe);
        t.frame(format!("Block [{prev}, {end}) ends with {v}"))
            .comparing(prev..end)
            .current(probe)
            .emit();
        if v >= target {
            break;
        }
        prev = end;
        if prev >= n {
            t.not_found(target);
            return;
        }
        end = (end + jump).min(n);
    }

    for i in prev..end {
        let v = t.get(i);
        t.mark(i);
        t.frame(format!("Scanning {v} at index {i}"))
            .comparing([i])
            .current(i)
            .emit();
        if v == target {
            t.found(i, target);
            return;
        }
        if v > target {
            break;
        }
    }
    t.not_found(target);
}
