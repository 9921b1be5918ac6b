use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            let (a, b) = (t.get(j), t.get(j + 1));
            t.frame(format!("Comparing {a} and {b}"))
                .comparing([j, j + 1])
                .current(j)
                .emit();
            if a > b {
                t.swap(j, j + 1);
                swapped = true;
                t.frame(format!("Swapped {a} and {b}"))
                    .swapped([j, j + 1])
                    .current(j + 1)
                    .emit();
            }
        }
        t.mark(n - 1 - i);
        if !swapped {
            // A pass without swaps means the prefix is already in order.
            break;
        }
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
    fn sorted_input_stops_after_one_pass() {
        let steps = trace(run, &[1, 2, 3, 4]);
        // start + 3 comparisons + final
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|s| s.swapped.is_empty()));
    }

    #[test]
    fn largest_bubbles_to_the_end() {
        let steps = trace(run, &[5, 3, 1]);
        let first_marked = steps.iter().find(|s| !s.sorted.is_empty()).unwrap();
        assert_eq!(first_marked.sorted, vec![2]);
        assert_eq!(first_marked.array[2], 5);
    }
}
