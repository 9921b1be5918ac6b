use crate::searching::sort_copy;
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    sort_copy(t);
    let n = t.len();

    // Smallest Fibonacci number >= n, with its two predecessors.
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib1 + fib2;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib1 + fib2;
    }

    // Index of the last element known to be smaller than the target, plus one.
    let mut offset = 0usize;
    while fib > 1 {
        let i = (offset + fib2 - 1).min(n - 1);
        let v = t.get(i);
        t.mark(i);
        t.frame(format!("Probing {v} at index {i} (Fibonacci step {fib})"))
            .comparing([i])
            .current(i)
            .emit();
        if v < target {
            fib = fib1;
            fib1 = fib2;
            fib2 = fib - fib1;
            offset = i + 1;
        } else if v > target {
            fib = fib2;
            fib1 -= fib2;
            fib2 = fib - fib1;
        } else {
            t.found(i, target);
            return;
        }
    }

    if fib1 == 1 && offset < n {
        t.mark(offset);
        t.frame(format!("Checking last candidate {}", t.get(offset)))
            .comparing([offset])
            .current(offset)
            .emit();
        if t.get(offset) == target {
            t.found(offset, target);
            return;
        }
    }
    t.not_found(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::test_util::{assert_search, assert_search_all};

    #[test]
    fn finds_or_reports_absent() {
        assert_search_all(run);
    }

    #[test]
    fn every_position_of_a_long_array() {
        let input: Vec<i32> = (0..60).map(|i| i * 3).collect();
        for &v in &input {
            assert_search(run, &input, v);
        }
        assert_search(run, &input, 1);
        assert_search(run, &input, 500);
    }
}
