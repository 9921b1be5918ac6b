//! Sorting family. Every trace ends with the array ascending and every index
//! marked sorted.

pub(crate) mod bubble;
pub(crate) mod bucket;
pub(crate) mod counting;
pub(crate) mod heap;
pub(crate) mod insertion;
pub(crate) mod intro;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod radix;
pub(crate) mod selection;
pub(crate) mod shell;
pub(crate) mod tim;

/// Smallest and largest value, or `None` for an empty slice.
pub(crate) fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Distance of `v` above `min`, as an unsigned key. Lets the distribution
/// sorts index buckets by value when the input contains negatives.
#[inline]
pub(crate) fn offset_key(v: i32, min: i32) -> u64 {
    (i64::from(v) - i64::from(min)) as u64
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::step::Step;
    use crate::tracer::Tracer;

    /// Run a sorting entry point and return its trace.
    pub(crate) fn trace(run: fn(&mut Tracer), input: &[i32]) -> Vec<Step> {
        let mut t = Tracer::new(input);
        t.frame("start").emit();
        run(&mut t);
        t.into_steps()
    }

    /// Assert the trace ends sorted and fully marked.
    pub(crate) fn assert_sorts(run: fn(&mut Tracer), input: &[i32]) {
        let steps = trace(run, input);
        let last = steps.last().unwrap();
        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(last.array, expected, "input {input:?}");
        assert_eq!(last.sorted, (0..input.len()).collect::<Vec<_>>());
        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.step, i);
            assert_eq!(s.array.len(), input.len());
        }
    }

    pub(crate) const CASES: &[&[i32]] = &[
        &[],
        &[7],
        &[2, 1],
        &[4, 4, 4, 4],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[5, 3, 1],
        &[38, 27, 43, 3, 9, 82, 10],
        &[0, -3, 12, -3, 7, 100, 0],
    ];
}
