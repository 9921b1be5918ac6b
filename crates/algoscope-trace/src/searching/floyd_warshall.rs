use crate::searching::{SOURCE, edge_weight};
use crate::tracer::Tracer;

const INF: i64 = i64::MAX / 4;

/// All-pairs shortest paths, then the target-valued node nearest the source.
///
/// One frame per intermediate node keeps the trace linear in the array
/// length while the relaxation itself is cubic.
pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let mut dist = vec![vec![INF; n]; n];
    for i in 0..n {
        dist[i][i] = 0;
        if i + 1 < n {
            let w = edge_weight(t, i, i + 1);
            dist[i][i + 1] = w;
            dist[i + 1][i] = w;
        }
    }
    t.frame("Initialised distances from adjacent value differences")
        .emit();

    for k in 0..n {
        let mut improved = 0usize;
        for i in 0..n {
            if dist[i][k] >= INF {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    improved += 1;
                }
            }
        }
        t.mark(k);
        t.frame(format!("Through node {k}: {improved} distances improved"))
            .current(k)
            .emit();
    }

    let mut best: Option<usize> = None;
    for i in 0..n {
        if t.get(i) == target
            && dist[SOURCE][i] < INF
            && best.is_none_or(|b| dist[SOURCE][i] < dist[SOURCE][b])
        {
            best = Some(i);
        }
    }
    match best {
        Some(i) => t.found(i, target),
        None => t.not_found(target),
    }
}
