use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::searching::{SOURCE, edge_weight, path_neighbors};
use crate::tracer::Tracer;

/// A* towards any node holding the target.
///
/// The estimate `|a[v] - target|` never exceeds the summed value
/// differences along a path to a target-valued node, so the first
/// target-valued node expanded is the cheapest one.
pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }
    let estimate = |t: &Tracer, v: usize| (i64::from(t.get(v)) - i64::from(target)).abs();

    let mut g = vec![i64::MAX; n];
    g[SOURCE] = 0;
    let mut open = BinaryHeap::from([Reverse((estimate(t, SOURCE), 0i64, SOURCE))]);

    while let Some(Reverse((f, gu, u))) = open.pop() {
        if t.is_marked(u) {
            continue;
        }
        t.mark(u);
        t.frame(format!(
            "Expanding node {u} (value {}): g = {gu}, f = {f}",
            t.get(u)
        ))
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
            let ng = gu + edge_weight(t, u, v);
            if ng < g[v] {
                g[v] = ng;
                let h = estimate(t, v);
                open.push(Reverse((ng + h, ng, v)));
                t.frame(format!("Opened node {v}: g = {ng}, h = {h}"))
                    .comparing([u, v])
                    .current(v)
                    .emit();
            }
        }
    }
    t.not_found(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::test_util::{assert_search_all, trace};

    #[test]
    fn finds_or_reports_absent() {
        assert_search_all(run);
    }

    #[test]
    fn agrees_with_dijkstra() {
        let input = [0, 5, 100, 5, 7, 5];
        for target in [5, 7, 100] {
            let a = trace(run, &input, target);
            let d = trace(crate::searching::dijkstra::run, &input, target);
            assert_eq!(
                a.last().unwrap().found_index(),
                d.last().unwrap().found_index()
            );
        }
    }
}
