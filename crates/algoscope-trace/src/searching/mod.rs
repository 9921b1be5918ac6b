//! Searching family.
//!
//! Array searches that need ascending input sort a private copy first and
//! report indices into that copy. Graph searches read the array as a path
//! graph (index `i` adjacent to `i - 1` and `i + 1`) explored from node 0;
//! weighted variants use `|a[i] - a[j]|` as the edge weight.

pub(crate) mod astar;
pub(crate) mod bellman_ford;
pub(crate) mod bfs;
pub(crate) mod binary;
pub(crate) mod dfs;
pub(crate) mod dijkstra;
pub(crate) mod exponential;
pub(crate) mod fibonacci;
pub(crate) mod floyd_warshall;
pub(crate) mod interpolation;
pub(crate) mod jump;
pub(crate) mod linear;

use crate::tracer::Tracer;

/// Node all graph searches start from.
pub(crate) const SOURCE: usize = 0;

/// Sort the working array for searches that require ascending input.
pub(crate) fn sort_copy(t: &mut Tracer) {
    let mut v = t.values().to_vec();
    v.sort_unstable();
    if v.as_slice() == t.values() {
        t.frame("Input is already in ascending order").emit();
    } else {
        t.replace(v);
        t.frame("Sorted a copy of the input; indices refer to the sorted copy")
            .emit();
    }
}

/// Neighbours of node `i` in the path graph over `n` nodes.
pub(crate) fn path_neighbors(i: usize, n: usize) -> impl Iterator<Item = usize> {
    let left = i.checked_sub(1);
    let right = (i + 1 < n).then_some(i + 1);
    left.into_iter().chain(right)
}

/// Weight of the edge between adjacent nodes `i` and `j`.
#[inline]
pub(crate) fn edge_weight(t: &Tracer, i: usize, j: usize) -> i64 {
    (i64::from(t.get(i)) - i64::from(t.get(j))).abs()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_at_edges() {
        assert_eq!(path_neighbors(0, 3).collect::<Vec<_>>(), vec![1]);
        assert_eq!(path_neighbors(1, 3).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(path_neighbors(2, 3).collect::<Vec<_>>(), vec![1]);
        assert_eq!(path_neighbors(0, 1).count(), 0);
    }

    #[test]
    fn sort_copy_keeps_caller_slice() {
        let input = [3, 1, 2];
        let mut t = Tracer::new(&input);
        sort_copy(&mut t);
        assert_eq!(t.values(), &[1, 2, 3]);
        assert_eq!(input, [3, 1, 2]);
    }
}
