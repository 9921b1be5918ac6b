use algoscope_trace::{Algorithm, Family, SearchOutcome, Step, TraceError, run, run_by_id};
use proptest::prelude::*;

fn assert_well_formed(steps: &[Step], len: usize) {
    assert!(!steps.is_empty());
    for (i, s) in steps.iter().enumerate() {
        assert_eq!(s.step, i);
        assert_eq!(s.array.len(), len);
        for set in [&s.comparing, &s.sorted, &s.swapped, &s.pivot] {
            assert!(set.windows(2).all(|w| w[0] < w[1]), "{set:?}");
            assert!(set.iter().all(|&j| j < len));
        }
        assert!(s.current.is_none_or(|j| j < len));
    }
}

#[test]
fn bubble_sort_small() {
    let steps = run_by_id("bubble-sort", &[5, 3, 1], None).unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 3, 5]);
    assert_eq!(last.sorted, vec![0, 1, 2]);
}

#[test]
fn binary_search_reports_sorted_index() {
    let steps = run_by_id("binary-search", &[5, 3, 1], Some(3)).unwrap();
    let found = steps.iter().find(|s| s.found_index().is_some()).unwrap();
    assert_eq!(found.array, vec![1, 3, 5]);
    assert_eq!(found.found_index(), Some(1));
    assert_eq!(found.sorted, vec![1]);
}

#[test]
fn linear_search_absent() {
    let steps = run_by_id("linear-search", &[5, 3, 1], Some(9)).unwrap();
    assert_eq!(steps.last().unwrap().outcome, Some(SearchOutcome::NotFound));
    assert!(steps.iter().all(|s| s.found_index().is_none()));
}

#[test]
fn caller_array_untouched() {
    let input = vec![9, -1, 4, 4, 0];
    for alg in Algorithm::ALL {
        let _ = run(alg, &input, Some(4)).unwrap();
        assert_eq!(input, vec![9, -1, 4, 4, 0], "{alg}");
    }
}

#[test]
fn every_algorithm_on_empty_input() {
    for alg in Algorithm::ALL {
        let steps = run(alg, &[], Some(1)).unwrap();
        assert_well_formed(&steps, 0);
        if alg.needs_target() {
            assert_eq!(steps.last().unwrap().outcome, Some(SearchOutcome::NotFound));
        }
    }
}

#[test]
fn graph_searches_cross_the_whole_path() {
    // Target only at the far end of the path graph.
    let input = [1, 2, 3, 4, 5, 6, 7, 8, 9, 42];
    for id in [
        "depth-first-search",
        "breadth-first-search",
        "dijkstra",
        "a-star",
        "bellman-ford",
        "floyd-warshall",
    ] {
        let steps = run_by_id(id, &input, Some(42)).unwrap();
        assert_eq!(steps.last().unwrap().found_index(), Some(9), "{id}");
    }
}

#[test]
fn errors() {
    assert_eq!(
        run_by_id("quantum-sort", &[1], None),
        Err(TraceError::UnknownAlgorithm("quantum-sort".into()))
    );
    assert_eq!(
        run_by_id("a-star", &[1], None),
        Err(TraceError::MissingTarget(Algorithm::AStar))
    );
    assert!(run(Algorithm::LinearSearch, &[0; 201], Some(0)).is_err());
}

fn sorting() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::of_family(Family::Sorting).collect::<Vec<_>>())
}

fn searching() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::of_family(Family::Searching).collect::<Vec<_>>())
}

fn input() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000..1000i32, 0..40)
}

proptest! {
    #[test]
    fn sorting_sorts(alg in sorting(), arr in input()) {
        let steps = run(alg, &arr, None).unwrap();
        assert_well_formed(&steps, arr.len());
        let mut expected = arr.clone();
        expected.sort_unstable();
        let last = steps.last().unwrap();
        prop_assert_eq!(&last.array, &expected);
        prop_assert_eq!(&last.sorted, &(0..arr.len()).collect::<Vec<_>>());
        prop_assert_eq!(&steps[0].array, &arr);
    }

    #[test]
    fn searching_finds_present(
        alg in searching(),
        arr in input(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!arr.is_empty());
        let target = arr[pick.index(arr.len())];
        let steps = run(alg, &arr, Some(target)).unwrap();
        assert_well_formed(&steps, arr.len());
        let found: Vec<&Step> = steps.iter().filter(|s| s.found_index().is_some()).collect();
        prop_assert_eq!(found.len(), 1);
        let i = found[0].found_index().unwrap();
        prop_assert_eq!(found[0].array[i], target);
        prop_assert_eq!(&found[0].sorted, &vec![i]);
    }

    #[test]
    fn searching_reports_absent(alg in searching(), arr in input(), target in -2000..2000i32) {
        prop_assume!(!arr.contains(&target));
        let steps = run(alg, &arr, Some(target)).unwrap();
        assert_well_formed(&steps, arr.len());
        prop_assert!(steps.iter().all(|s| s.found_index().is_none()));
        prop_assert_eq!(steps.last().unwrap().outcome, Some(SearchOutcome::NotFound));
    }

    #[test]
    fn traces_are_deterministic(idx in 0..24usize, arr in input(), target in -1000..1000i32) {
        let alg = Algorithm::ALL[idx];
        prop_assert_eq!(run(alg, &arr, Some(target)), run(alg, &arr, Some(target)));
    }
}
