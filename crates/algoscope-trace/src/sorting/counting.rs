use std::collections::BTreeMap;

use crate::sorting::{min_max, offset_key};
use crate::tracer::Tracer;

/// Widest value span counted with a dense array; wider inputs count into an
/// ordered map instead.
const DENSE_SPAN_LIMIT: u64 = 1 << 16;

pub(crate) fn run(t: &mut Tracer) {
    let Some((min, max)) = min_max(t.values()) else {
        t.finish_sorted();
        return;
    };
    t.frame(format!("Values range from {min} to {max}")).emit();

    let counts = if offset_key(max, min) < DENSE_SPAN_LIMIT {
        count_dense(t, min, max)
    } else {
        count_sparse(t)
    };

    let mut k = 0;
    for (v, c) in counts {
        for _ in 0..c {
            t.set(k, v);
            t.mark(k);
            t.frame(format!("Wrote {v} to position {k}"))
                .swapped([k])
                .current(k)
                .emit();
            k += 1;
        }
    }
    t.finish_sorted();
}

/// Counts indexed by `v - min`, returned as ascending `(value, count)`.
fn count_dense(t: &mut Tracer, min: i32, max: i32) -> Vec<(i32, usize)> {
    let mut counts = vec![0usize; offset_key(max, min) as usize + 1];
    for i in 0..t.len() {
        let v = t.get(i);
        let slot = offset_key(v, min) as usize;
        counts[slot] += 1;
        t.frame(format!("Counted {v} (seen {} times)", counts[slot]))
            .current(i)
            .emit();
    }
    counts
        .into_iter()
        .enumerate()
        .filter(|&(_, c)| c > 0)
        .map(|(slot, c)| ((i64::from(min) + slot as i64) as i32, c))
        .collect()
}

fn count_sparse(t: &mut Tracer) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for i in 0..t.len() {
        let v = t.get(i);
        let c = counts.entry(v).or_default();
        *c += 1;
        let seen = *c;
        t.frame(format!("Counted {v} (seen {seen} times)"))
            .current(i)
            .emit();
    }
    counts.into_iter().collect()
}
