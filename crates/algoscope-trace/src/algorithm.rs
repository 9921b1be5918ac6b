//! The fixed catalogue of traceable algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::TraceError;
use crate::searching;
use crate::sorting;
use crate::tracer::Tracer;

/// Which input an algorithm consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Family {
    /// Reorders the array; ignores any target.
    Sorting,
    /// Looks for a target value; requires one.
    Searching,
}

/// Entry point of one algorithm, typed by family.
#[derive(Clone, Copy)]
pub(crate) enum Runner {
    Sort(fn(&mut Tracer)),
    Search(fn(&mut Tracer, i32)),
}

macro_rules! catalogue {
    ($( $variant:ident => $id:literal, $name:literal, $family:ident; )*) => {
        /// Every algorithm the engine can trace.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum Algorithm {
            $( $variant, )*
        }

        impl Algorithm {
            /// The whole catalogue, sorting family first.
            pub const ALL: [Algorithm; 24] = [ $( Algorithm::$variant, )* ];

            /// Kebab-case identifier, e.g. `"bubble-sort"`.
            pub const fn id(self) -> &'static str {
                match self {
                    $( Algorithm::$variant => $id, )*
                }
            }

            /// Human-readable name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Algorithm::$variant => $name, )*
                }
            }

            pub const fn family(self) -> Family {
                match self {
                    $( Algorithm::$variant => Family::$family, )*
                }
            }

            /// Look an algorithm up by identifier.
            pub fn from_id(id: &str) -> Option<Algorithm> {
                match id {
                    $( $id => Some(Algorithm::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

catalogue! {
    BubbleSort => "bubble-sort", "Bubble Sort", Sorting;
    SelectionSort => "selection-sort", "Selection Sort", Sorting;
    InsertionSort => "insertion-sort", "Insertion Sort", Sorting;
    MergeSort => "merge-sort", "Merge Sort", Sorting;
    QuickSort => "quick-sort", "Quick Sort", Sorting;
    HeapSort => "heap-sort", "Heap Sort", Sorting;
    ShellSort => "shell-sort", "Shell Sort", Sorting;
    CountingSort => "counting-sort", "Counting Sort", Sorting;
    RadixSort => "radix-sort", "Radix Sort", Sorting;
    BucketSort => "bucket-sort", "Bucket Sort", Sorting;
    TimSort => "tim-sort", "Tim Sort", Sorting;
    IntroSort => "intro-sort", "Intro Sort", Sorting;
    LinearSearch => "linear-search", "Linear Search", Searching;
    BinarySearch => "binary-search", "Binary Search", Searching;
    ExponentialSearch => "exponential-search", "Exponential Search", Searching;
    FibonacciSearch => "fibonacci-search", "Fibonacci Search", Searching;
    JumpSearch => "jump-search", "Jump Search", Searching;
    InterpolationSearch => "interpolation-search", "Interpolation Search", Searching;
    DepthFirstSearch => "depth-first-search", "Depth-First Search", Searching;
    BreadthFirstSearch => "breadth-first-search", "Breadth-First Search", Searching;
    Dijkstra => "dijkstra", "Dijkstra", Searching;
    AStar => "a-star", "A*", Searching;
    BellmanFord => "bellman-ford", "Bellman-Ford", Searching;
    FloydWarshall => "floyd-warshall", "Floyd-Warshall", Searching;
}

impl Algorithm {
    /// Function implementing this algorithm.
    pub(crate) fn runner(self) -> Runner {
        use Runner::{Search, Sort};
        match self {
            Algorithm::BubbleSort => Sort(sorting::bubble::run),
            Algorithm::SelectionSort => Sort(sorting::selection::run),
            Algorithm::InsertionSort => Sort(sorting::insertion::run),
            Algorithm::MergeSort => Sort(sorting::merge::run),
            Algorithm::QuickSort => Sort(sorting::quick::run),
            Algorithm::HeapSort => Sort(sorting::heap::run),
            Algorithm::ShellSort => Sort(sorting::shell::run),
            Algorithm::CountingSort => Sort(sorting::counting::run),
            Algorithm::RadixSort => Sort(sorting::radix::run),
            Algorithm::BucketSort => Sort(sorting::bucket::run),
            Algorithm::TimSort => Sort(sorting::tim::run),
            Algorithm::IntroSort => Sort(sorting::intro::run),
            Algorithm::LinearSearch => Search(searching::linear::run),
            Algorithm::BinarySearch => Search(searching::binary::run),
            Algorithm::ExponentialSearch => Search(searching::exponential::run),
            Algorithm::FibonacciSearch => Search(searching::fibonacci::run),
            Algorithm::JumpSearch => Search(searching::jump::run),
            Algorithm::InterpolationSearch => Search(searching::interpolation::run),
            Algorithm::DepthFirstSearch => Search(searching::dfs::run),
            Algorithm::BreadthFirstSearch => Search(searching::bfs::run),
            Algorithm::Dijkstra => Search(searching::dijkstra::run),
            Algorithm::AStar => Search(searching::astar::run),
            Algorithm::BellmanFord => Search(searching::bellman_ford::run),
            Algorithm::FloydWarshall => Search(searching::floyd_warshall::run),
        }
    }

    /// Whether running this algorithm requires a target value.
    pub fn needs_target(self) -> bool {
        self.family() == Family::Searching
    }

    /// The algorithms of one family, in catalogue order.
    pub fn of_family(family: Family) -> impl Iterator<Item = Algorithm> {
        Self::ALL.into_iter().filter(move |a| a.family() == family)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_id(s).ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_of_each_family() {
        assert_eq!(Algorithm::of_family(Family::Sorting).count(), 12);
        assert_eq!(Algorithm::of_family(Family::Searching).count(), 12);
    }

    #[test]
    fn ids_round_trip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.id().parse::<Algorithm>(), Ok(alg));
            assert_eq!(alg.to_string(), alg.id());
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = Algorithm::ALL.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn unknown_id() {
        assert_eq!(
            "bogo-sort".parse::<Algorithm>(),
            Err(TraceError::UnknownAlgorithm("bogo-sort".into()))
        );
        assert!("Bubble-Sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn runner_family_matches() {
        for alg in Algorithm::ALL {
            let is_search = matches!(alg.runner(), Runner::Search(_));
            assert_eq!(is_search, alg.needs_target(), "{alg}");
        }
    }
}
