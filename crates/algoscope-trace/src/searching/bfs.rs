use std::collections::VecDeque;

use crate::searching::{SOURCE, path_neighbors};
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let mut discovered = vec![false; n];
    let mut queue = VecDeque::from([SOURCE]);
    discovered[SOURCE] = true;

    while let Some(u) = queue.pop_front() {
        t.mark(u);
        t.frame(format!("Dequeued node {u} with value {}", t.get(u)))
            .comparing([u])
            .current(u)
            .emit();
        if t.get(u) == target {
            t.found(u, target);
            return;
        }
        for v in path_neighbors(u, n) {
            if discovered[v] {
                continue;
            }
            discovered[v] = true;
            queue.push_back(v);
            t.frame(format!("Enqueued node {v}"))
                .comparing([u, v])
                .current(u)
                .emit();
        }
    }
    t.not_found(target);
}
