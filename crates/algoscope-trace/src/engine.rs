use crate::algorithm::{Algorithm, Runner};
use crate::error::TraceError;
use crate::step::Step;
use crate::tracer::Tracer;

/// Longest input the engine accepts. Quadratic sorts record tens of
/// thousands of full-array frames at this size.
pub const MAX_ARRAY_LEN: usize = 200;

/// Run `algorithm` on a private copy of `array` and return the full trace.
///
/// Step 0 shows the input. Sorting traces end with the array ascending and
/// every index sorted; search traces end with a frame whose
/// [`Step::outcome`] is set. `target` is ignored by sorting algorithms and
/// required by searching ones.
pub fn run(
    algorithm: Algorithm,
    array: &[i32],
    target: Option<i32>,
) -> Result<Vec<Step>, TraceError> {
    if array.len() > MAX_ARRAY_LEN {
        return Err(TraceError::ArrayTooLarge {
            len: array.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    let mut tracer = Tracer::new(array);
    tracer
        .frame(format!(
            "Starting {} on {} elements",
            algorithm.name(),
            array.len()
        ))
        .emit();
    match algorithm.runner() {
        Runner::Sort(f) => f(&mut tracer),
        Runner::Search(f) => {
            let Some(target) = target else {
                return Err(TraceError::MissingTarget(algorithm));
            };
            f(&mut tracer, target)
        }
    }

    let steps = tracer.into_steps();
    log::debug!(
        "{algorithm}: {} steps for {} elements",
        steps.len(),
        array.len()
    );
    Ok(steps)
}

/// [`run`] with the algorithm named by its identifier, e.g. `"a-star"`.
pub fn run_by_id(
    id: &str,
    array: &[i32],
    target: Option<i32>,
) -> Result<Vec<Step>, TraceError> {
    run(id.parse()?, array, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_the_input() {
        let steps = run(Algorithm::QuickSort, &[3, 1, 2], None).unwrap();
        assert_eq!(steps[0].step, 0);
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert!(steps[0].sorted.is_empty());
    }

    #[test]
    fn sorting_ignores_target() {
        let a = run(Algorithm::HeapSort, &[2, 1], None).unwrap();
        let b = run(Algorithm::HeapSort, &[2, 1], Some(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn search_without_target() {
        for alg in Algorithm::of_family(crate::Family::Searching) {
            assert_eq!(
                run(alg, &[1, 2], None),
                Err(TraceError::MissingTarget(alg))
            );
        }
    }

    #[test]
    fn unknown_id() {
        assert_eq!(
            run_by_id("sleep-sort", &[1], None),
            Err(TraceError::UnknownAlgorithm("sleep-sort".into()))
        );
    }

    #[test]
    fn length_limit() {
        let big = vec![0; MAX_ARRAY_LEN + 1];
        assert_eq!(
            run(Algorithm::BubbleSort, &big, None),
            Err(TraceError::ArrayTooLarge {
                len: MAX_ARRAY_LEN + 1,
                max: MAX_ARRAY_LEN
            })
        );
        assert!(run(Algorithm::BubbleSort, &big[1..], None).is_ok());
    }
}
