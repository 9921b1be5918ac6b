use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            t.frame(format!("Comparing {} with current minimum {}", t.get(j), t.get(min)))
                .comparing([min, j])
                .current(j)
                .emit();
            if t.get(j) < t.get(min) {
                min = j;
                t.frame(format!("New minimum {}", t.get(min)))
                    .current(min)
                    .emit();
            }
        }
        if min != i {
            t.swap(i, min);
            t.mark(i);
            t.frame(format!("Moved {} to position {i}", t.get(i)))
                .swapped([i, min])
                .emit();
        } else {
            t.mark(i);
            t.frame(format!("{} is already at position {i}", t.get(i)))
                .current(i)
                .emit();
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
    fn prefix_grows_one_per_pass() {
        let steps = trace(run, &[3, 2, 1]);
        let marked: Vec<usize> = steps.iter().map(|s| s.sorted.len()).collect();
        assert!(marked.windows(2).all(|w| w[1] >= w[0]));
        assert!(marked.contains(&1) && marked.contains(&2));
    }
}
