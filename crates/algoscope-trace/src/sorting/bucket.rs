use crate::sorting::insertion::insertion_range;
use crate::sorting::{min_max, offset_key};
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    let Some((min, max)) = min_max(t.values()) else {
        t.finish_sorted();
        return;
    };
    let bucket_count = ((n as f64).sqrt().ceil() as usize).max(1);
    let span = offset_key(max, min) + 1;

    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); bucket_count];
    for i in 0..n {
        let v = t.get(i);
        let b = (offset_key(v, min) * bucket_count as u64 / span) as usize;
        buckets[b].push(v);
        t.frame(format!("{v} goes to bucket {b}")).current(i).emit();
    }

    let mut k = 0;
    for (b, bucket) in buckets.iter().enumerate() {
        let start = k;
        for &v in bucket {
            t.set(k, v);
            t.frame(format!("Wrote {v} from bucket {b} to position {k}"))
                .swapped([k])
                .current(k)
                .emit();
            k += 1;
        }
        if k > start {
            t.frame(format!("Sorting bucket {b} in [{start}, {k})"))
                .comparing(start..k)
                .emit();
            insertion_range(t, start, k);
            t.mark_range(start..k);
        }
    }
    t.finish_sorted();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_util::{CASES, assert_sorts};

    #[test]
    fn sorts_cases() {
        for case in CASES {
            assert_sorts(run, case);
        }
    }

    #[test]
    fn extreme_values_stay_in_bounds() {
        assert_sorts(run, &[i32::MIN, i32::MAX, 0, i32::MAX, i32::MIN]);
    }
}
