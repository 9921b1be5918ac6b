use crate::sorting::{min_max, offset_key};
use crate::tracer::Tracer;

const BASE: u64 = 10;

/// LSD radix sort in base 10 over `v - min`, so negative inputs sort too.
pub(crate) fn run(t: &mut Tracer) {
    let n = t.len();
    let Some((min, max)) = min_max(t.values()) else {
        t.finish_sorted();
        return;
    };
    let max_key = offset_key(max, min);

    let mut exp: u64 = 1;
    while max_key / exp > 0 {
        t.frame(format!("Sorting by digit place {exp}")).emit();
        let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); BASE as usize];
        for i in 0..n {
            let v = t.get(i);
            let digit = (offset_key(v, min) / exp % BASE) as usize;
            buckets[digit].push(v);
            t.frame(format!("{v} goes to bucket {digit}"))
                .current(i)
                .emit();
        }
        let mut k = 0;
        for (digit, bucket) in buckets.iter().enumerate() {
            for &v in bucket {
                t.set(k, v);
                t.frame(format!("Wrote {v} from bucket {digit} to position {k}"))
                    .swapped([k])
                    .current(k)
                    .emit();
                k += 1;
            }
        }
        exp *= BASE;
    }
    t.finish_sorted();
}
