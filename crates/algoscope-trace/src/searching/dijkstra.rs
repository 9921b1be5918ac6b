use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::searching::{SOURCE, edge_weight, path_neighbors};
use crate::tracer::Tracer;

/// Settles nodes in order of path cost from the source; the first settled
/// node holding the target is the cheapest one to reach.
pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let mut dist = vec![i64::MAX; n];
    dist[SOURCE] = 0;
    let mut open = BinaryHeap::from([Reverse((0i64, SOURCE))]);

    while let Some(Reverse((d, u))) = open.pop() {
        if t.is_marked(u) {
            continue;
        }
        t.mark(u);
        t.frame(format!("Settled node {u} (value {}) at distance {d}", t.get(u)))
            .comparing([u])
            .current(u)
            .emit();
        if t.get(u) == target {
            t.found(u, target);
            return;
        }
        for v in path_neighbors(u, n) {
            if t.is_marked(v) {
                continue;
            }
            let nd = d + edge_weight(t, u, v);
            if nd < dist[v] {
                dist[v] = nd;
                open.push(Reverse((nd, v)));
                t.frame(format!("Relaxed edge {u} -> {v}: distance {nd}"))
                    .comparing([u, v])
                    .current(v)
                    .emit();
            }
        }
    }
    t.not_found(target);
}
