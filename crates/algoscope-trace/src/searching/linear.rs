use crate::tracer::Tracer;

pub(crate) fn run(t: &mut Tracer, target: i32) {
    for i in 0..t.len() {
        t.mark(i);
        t.frame(format!("Checking {} at index {i}", t.get(i)))
            .comparing([i])
            .current(i)
            .emit();
        if t.get(i) == target {
            t.found(i, target);
            return;
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
    fn keeps_original_order() {
        let steps = trace(run, &[5, 3, 1], 1);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![5, 3, 1]);
        assert_eq!(last.found_index(), Some(2));
    }

    #[test]
    fn absent_visits_everything() {
        let steps = trace(run, &[5, 3, 1], 9);
        assert_eq!(steps.last().unwrap().sorted, vec![0, 1, 2]);
    }
}
