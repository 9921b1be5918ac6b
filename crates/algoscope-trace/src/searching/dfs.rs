use crate::searching::{SOURCE, path_neighbors};
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let mut stack = vec![SOURCE];
    while let Some(u) = stack.pop() {
        if t.is_marked(u) {
            continue;
        }
        t.mark(u);
        t.frame(format!("Visiting node {u} with value {}", t.get(u)))
            .comparing([u])
            .current(u)
            .emit();
        if t.get(u) == target {
            t.found(u, target);
            return;
        }
        // Pushed in reverse so the right-hand neighbour is explored first.
        let next: Vec<usize> = path_neighbors(u, n).filter(|&v| !t.is_marked(v)).collect();
        for &v in next.iter().rev() {
            stack.push(v);
            t.frame(format!("Pushed node {v}"))
                .comparing([u, v])
                .current(u)
                .emit();
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
    fn visits_in_depth_order() {
        let steps = trace(run, &[4, 8, 15, 16], 99);
        let visits: Vec<usize> = steps
            .iter()
            .filter(|s| s.description.starts_with("Visiting"))
            .filter_map(|s| s.current)
            .collect();
        assert_eq!(visits, vec![0, 1, 2, 3]);
    }
}
