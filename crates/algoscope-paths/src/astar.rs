use std::collections::BinaryHeap;

use algoscope_core::Point;

use crate::Pathfinder;
use crate::pathfinder::{Node, NodeRef};
use crate::traits::AstarPather;

/// Parent link of a start node.
const NO_PARENT: usize = usize::MAX;

impl Pathfinder {
    /// A* search over `pather` from `from` to `to`.
    ///
    /// The path runs from `from` to `to`, both included. `None` means an
    /// endpoint lies off the range or `to` cannot be reached. When several
    /// frontier cells share the lowest `f`, the one queued first wins.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.expanded = 0;
        let start = self.idx(from)?;
        let goal = self.idx(to)?;
        if start == goal {
            return Some(vec![from]);
        }

        let stamp = self.bump_generation();
        let mut seq = 0u64;
        let mut frontier = BinaryHeap::new();
        self.nodes[start] = Node {
            g: 0,
            f: pather.estimate(from, to),
            parent: NO_PARENT,
            generation: stamp,
            closed: false,
        };
        frontier.push(NodeRef {
            idx: start,
            f: self.nodes[start].f,
            seq,
        });

        let mut scratch = std::mem::take(&mut self.nbuf);
        let mut reached = false;
        while let Some(NodeRef { idx: cur, .. }) = frontier.pop() {
            if cur == goal {
                reached = true;
                break;
            }
            // A cheaper entry for this cell was already expanded.
            if self.nodes[cur].closed {
                continue;
            }
            self.nodes[cur].closed = true;
            self.expanded += 1;

            let here = self.point(cur);
            let g = self.nodes[cur].g;
            scratch.clear();
            pather.neighbors(here, &mut scratch);
            for &next in &scratch {
                let Some(ni) = self.idx(next) else {
                    continue;
                };
                let g_next = g + pather.cost(here, next);
                let node = &mut self.nodes[ni];
                let seen = node.generation == stamp;
                if seen && (node.closed || g_next >= node.g) {
                    continue;
                }
                *node = Node {
                    g: g_next,
                    f: g_next + pather.estimate(next, to),
                    parent: cur,
                    generation: stamp,
                    closed: false,
                };
                seq += 1;
                frontier.push(NodeRef {
                    idx: ni,
                    f: node.f,
                    seq,
                });
            }
        }
        self.nbuf = scratch;

        reached.then(|| self.walk_back(goal))
    }

    /// Cells from the start of the last search to `goal`.
    fn walk_back(&self, goal: usize) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(goal), |&i| {
            let parent = self.nodes[i].parent;
            (parent != NO_PARENT).then_some(parent)
        })
        .map(|i| self.point(i))
        .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObstacleGrid;
    use algoscope_core::Range;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn straight_line() {
        let grid = ObstacleGrid::new(10);
        let mut pf = Pathfinder::new(grid.range()).unwrap();
        let path = pf
            .astar_path(&grid, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert_eq!(path, pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn same_cell() {
        let grid = ObstacleGrid::new(4);
        let mut pf = Pathfinder::new(grid.range()).unwrap();
        let p = Point::new(2, 2);
        assert_eq!(pf.astar_path(&grid, p, p), Some(vec![p]));
    }

    #[test]
    fn detour_around_wall() {
        // .#.
        // .#.
        // ...
        let grid = ObstacleGrid::with_obstacles(3, pts(&[(1, 0), (1, 1)]));
        let mut pf = Pathfinder::new(grid.range()).unwrap();
        let path = pf
            .astar_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(!path.iter().any(|p| grid.is_blocked(*p)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let goal = Point::new(5, 5);
        let grid = ObstacleGrid::with_obstacles(10, goal.neighbors_4());
        let mut pf = Pathfinder::new(grid.range()).unwrap();
        assert_eq!(pf.astar_path(&grid, Point::new(0, 0), goal), None);
        // Everything outside the cage was explored.
        assert_eq!(pf.expanded(), 100 - 5);
    }

    #[test]
    fn reuse_across_queries() {
        let mut grid = ObstacleGrid::new(6);
        let mut pf = Pathfinder::new(grid.range()).unwrap();
        let a = pf
            .astar_path(&grid, Point::new(0, 0), Point::new(5, 5))
            .unwrap();
        assert_eq!(a.len(), 11);

        grid.extend((0..5).map(|y| Point::new(3, y)));
        let b = pf
            .astar_path(&grid, Point::new(0, 0), Point::new(5, 0))
            .unwrap();
        assert_eq!(b.len(), 16);
        assert!(b.contains(&Point::new(3, 5)));
    }

    #[test]
    fn out_of_range_endpoint() {
        let grid = ObstacleGrid::new(4);
        let mut pf = Pathfinder::new(Range::square(4)).unwrap();
        assert_eq!(pf.astar_path(&grid, Point::new(0, 0), Point::new(4, 0)), None);
    }
}
