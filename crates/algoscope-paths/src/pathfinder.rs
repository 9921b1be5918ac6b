use algoscope_core::{Point, Range};

use crate::error::PathError;
use crate::traits::AstarPather;

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry, ordered by `f` then insertion sequence for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed earliest.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Largest board area, in cells, a [`Pathfinder`] allocates nodes for: a
/// 1024x1024 board.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Reusable A* engine for one grid rectangle.
///
/// `Pathfinder` owns the node array and neighbor scratch buffer so that a
/// game loop issuing one query per tick does not reallocate. Nodes from a
/// previous query are invalidated lazily with a generation counter.
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for the given grid rectangle.
    ///
    /// Fails with [`PathError::GridTooLarge`] when the rectangle has more
    /// than [`MAX_GRID_CELLS`] cells.
    pub fn new(rng: Range) -> Result<Self, PathError> {
        let w = rng.width().max(0) as usize;
        let h = rng.height().max(0) as usize;
        let cells = w
            .checked_mul(h)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or(PathError::GridTooLarge {
                width: rng.width(),
                height: rng.height(),
            })?;
        Ok(Self {
            rng,
            width: w,
            nodes: vec![Node::default(); cells],
            generation: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes moved to the closed set by the last query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Shortest path from `start` to `goal`, validating both endpoints.
    ///
    /// Returns `Ok(vec![])` when the goal is unreachable and
    /// [`PathError::InvalidPosition`] when an endpoint is off the grid.
    pub fn find<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        for p in [start, goal] {
            if !self.rng.contains(p) {
                return Err(PathError::InvalidPosition {
                    pos: p,
                    grid_size: self.rng.width(),
                });
            }
        }
        let path = self.astar_path(pather, start, goal).unwrap_or_default();
        log::debug!(
            "path {start} -> {goal}: {} cells, {} expanded",
            path.len(),
            self.expanded
        );
        Ok(path)
    }

    pub(crate) fn bump_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale tags could now collide with the live one.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_range_is_rejected() {
        assert_eq!(
            Pathfinder::new(Range::square(i32::MAX)).err(),
            Some(PathError::GridTooLarge {
                width: i32::MAX,
                height: i32::MAX
            })
        );
        assert!(Pathfinder::new(Range::square(1025)).is_err());
        let pf = Pathfinder::new(Range::square(1024)).unwrap();
        assert_eq!(pf.nodes.len(), MAX_GRID_CELLS);
        assert_eq!(Pathfinder::new(Range::square(0)).unwrap().nodes.len(), 0);
    }

    #[test]
    fn idx_point_round_trip() {
        let pf = Pathfinder::new(Range::new(2, 3, 7, 9)).unwrap();
        for p in pf.range() {
            let i = pf.idx(p).unwrap();
            assert_eq!(pf.point(i), p);
        }
        assert_eq!(pf.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn generation_wrap_resets_tags() {
        let mut pf = Pathfinder::new(Range::square(3)).unwrap();
        pf.nodes[4].generation = 7;
        pf.generation = u32::MAX;
        assert_eq!(pf.bump_generation(), 1);
        assert!(pf.nodes.iter().all(|n| n.generation == 0));
    }

    #[test]
    fn node_ref_pops_lowest_f_then_fifo() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 5, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 3, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 3, seq: 2 });
        heap.push(NodeRef { idx: 3, f: 4, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
