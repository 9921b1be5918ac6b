use crate::searching::sort_copy;
use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    sort_copy(t);
    let n = t.len();
    if n == 0 {
        t.not_found(target);
        return;
    }

    let (mut lo, mut hi) = (0usize, n - 1);
    while lo <= hi && target >= t.get(lo) && target <= t.get(hi) {
        let (vlo, vhi) = (i64::from(t.get(lo)), i64::from(t.get(hi)));
        let pos = if vhi == vlo {
            lo
        } else {
            lo + ((i64::from(target) - vlo) * (hi - lo) as i64 / (vhi - vlo)) as usize
        };
        let v = t.get(pos);
        t.mark(pos);
        t.frame(format!("Estimated position {pos} holds {v}"))
            .comparing([lo, hi])
            .current(pos)
            .emit();
        if v == target {
            t.found(pos, target);
            return;
        }
        if v < target {
            lo = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            hi = pos - 1;
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
    fn uniform_values_hit_first_probe() {
        let input: Vec<i32> = (0..50).map(|i| i * 10).collect();
        let steps = trace(run, &input, 270);
        let probes = steps
            .iter()
            .filter(|s| s.description.starts_with("Estimated"))
            .count();
        assert_eq!(probes, 1);
        assert_eq!(steps.last().unwrap().found_index(), Some(27));
    }

    #[test]
    fn out_of_range_target_probes_nothing() {
        let steps = trace(run, &[1, 2, 3], 10);
        assert!(steps.iter().all(|s| !s.description.starts_with("Estimated")));
    }
}
