use crate::sorting::insertion::insertion_range;
use crate::sorting::merge::merge;
use crate::tracer::Tracer;

/// Length of the runs sorted by insertion before merging.
pub(crate) const RUN: usize = 32;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    for start in (0..n).step_by(RUN) {
        let end = (start + RUN).min(n);
        t.frame(format!("Sorting run [{start}, {end})"))
            .comparing(start..end)
            .emit();
        insertion_range(t, start, end);
    }

    let mut size = RUN;
    while size < n {
        for left in (0..n).step_by(2 * size) {
            let mid = (left + size).min(n);
            let right = (left + 2 * size).min(n);
            if mid < right {
                merge(t, left, mid, right);
            }
        }
        size *= 2;
    }
    t.finish_sorted();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_util::{CASES, assert_sorts, trace};

    #[test]
    fn sorts_cases() {
        for case in CASES {
            assert_sorts(run, case);
        }
    }

    #[test]
    fn long_input_merges_runs() {
        let input: Vec<i32> = (0..100).rev().collect();
        assert_sorts(run, &input);
        let steps = trace(run, &input);
        let merges = steps
            .iter()
            .filter(|s| s.description.starts_with("Merging"))
            .count();
        // 4 runs: two merges of 32+32, then one of 64+36
        assert_eq!(merges, 3);
    }
}
