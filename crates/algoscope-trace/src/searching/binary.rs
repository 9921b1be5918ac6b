use std::cmp::Ordering;

use crate::searching::sort_copy;
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    sort_copy(t);
    let n = t.len();
    match binary_range(t, 0, n, target) {
        Some(i) => t.found(i, target),
        None => t.not_found(target),
    }
}

/// Binary search of the sorted slice `[lo, hi)`.
pub(crate) fn binary_range(
    t: &mut Tracer,
    mut lo: usize,
    mut hi: usize,
    target: i32,
) -> Option<usize> {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let v = t.get(mid);
        t.mark(mid);
        let verdict = match v.cmp(&target) {
            Ordering::Equal => "match",
            Ordering::Less => "too small, searching right half",
            Ordering::Greater => "too large, searching left half",
        };
        t.frame(format!("Middle of [{lo}, {hi}) is {v}: {verdict}"))
            .comparing([lo, hi - 1])
            .current(mid)
            .emit();
        match v.cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
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
    fn reports_sorted_index() {
        let steps = trace(run, &[5, 3, 1], 3);
        let found = steps.iter().find(|s| s.found_index().is_some()).unwrap();
        assert_eq!(found.array, vec![1, 3, 5]);
        assert_eq!(found.found_index(), Some(1));
        assert_eq!(found.sorted, vec![1]);
    }

    #[test]
    fn logarithmic_probes() {
        let input: Vec<i32> = (0..128).collect();
        let steps = trace(run, &input, -1);
        let probes = steps.iter().filter(|s| s.description.starts_with("Middle")).count();
        assert!(probes <= 8);
    }
}
