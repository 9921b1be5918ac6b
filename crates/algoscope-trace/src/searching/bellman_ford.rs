use crate::searching::{SOURCE, edge_weight, path_neighbors};
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let mut dist = vec![i64::MAX; n];
    dist[SOURCE] = 0;
    t.mark(SOURCE);
    t.frame(format!("Source node {SOURCE} at distance 0"))
        .current(SOURCE)
        .emit();

    for pass in 1..n {
        let mut changed = false;
        for u in 0..n {
            if dist[u] == i64::MAX {
                continue;
            }
            for v in path_neighbors(u, n) {
                let nd = dist[u] + edge_weight(t, u, v);
                if nd < dist[v] {
                    dist[v] = nd;
                    changed = true;
                    t.mark(v);
                    t.frame(format!("Pass {pass}: relaxed {u} -> {v}, distance {nd}"))
                        .comparing([u, v])
                        .current(v)
                        .emit();
                }
            }
        }
        if !changed {
            t.frame(format!("Pass {pass} changed nothing; distances are final"))
                .emit();
            break;
        }
    }

    let mut best: Option<usize> = None;
    for i in 0..n {
        if t.get(i) != target || dist[i] == i64::MAX {
            continue;
        }
        t.frame(format!("Node {i} holds {target} at distance {}", dist[i]))
            .comparing([i])
            .current(i)
            .emit();
        if best.is_none_or(|b| dist[i] < dist[b]) {
            best = Some(i);
        }
    }
    match best {
        Some(i) => t.found(i, target),
        None => t.not_found(target),
    }
}
