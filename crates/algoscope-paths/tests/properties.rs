use std::collections::{HashSet, VecDeque};

use algoscope_core::{Point, Range};
use algoscope_paths::{PathError, find_path, manhattan, pathfinding_trail};
use proptest::prelude::*;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Reference step distance by plain breadth-first search.
fn bfs_distance(start: Point, goal: Point, size: i32, blocked: &HashSet<Point>) -> Option<usize> {
    let range = Range::square(size);
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0usize)]);
    while let Some((cur, d)) = queue.pop_front() {
        if cur == goal {
            return Some(d);
        }
        for n in cur.neighbors_4() {
            if range.contains(n) && !blocked.contains(&n) && seen.insert(n) {
                queue.push_back((n, d + 1));
            }
        }
    }
    None
}

fn cell(size: i32) -> impl Strategy<Value = Point> {
    (0..size, 0..size).prop_map(|(x, y)| Point::new(x, y))
}

#[test]
fn straight_corridor() {
    let path = find_path(p(0, 0), p(3, 0), 10, &[]).unwrap();
    assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
}

#[test]
fn single_obstacle_detour() {
    let path = find_path(p(0, 0), p(2, 0), 10, &[p(1, 0)]).unwrap();
    assert_eq!(path.len(), 5);
    assert!(!path.contains(&p(1, 0)));
    assert_eq!(path, vec![p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)]);
}

#[test]
fn start_equals_goal() {
    assert_eq!(find_path(p(4, 2), p(4, 2), 5, &[]).unwrap(), vec![p(4, 2)]);
}

#[test]
fn enclosed_goal_returns_empty() {
    let goal = p(3, 3);
    let ring: Vec<Point> = Range::new(2, 2, 5, 5).iter().filter(|&c| c != goal).collect();
    assert!(find_path(p(0, 0), goal, 8, &ring).unwrap().is_empty());
    assert!(pathfinding_trail(p(0, 0), goal, 8, &ring).unwrap().is_empty());
}

#[test]
fn out_of_grid_goal_is_rejected() {
    assert_eq!(
        find_path(p(0, 0), p(0, 10), 10, &[]),
        Err(PathError::InvalidPosition {
            pos: p(0, 10),
            grid_size: 10
        })
    );
}

#[test]
fn empty_grid_rejects_everything() {
    assert!(find_path(p(0, 0), p(0, 0), 0, &[]).is_err());
}

#[test]
fn oversized_grid_is_an_error_not_a_crash() {
    assert_eq!(
        find_path(p(0, 0), p(1, 0), i32::MAX, &[]),
        Err(PathError::GridTooLarge {
            width: i32::MAX,
            height: i32::MAX
        })
    );
    assert_eq!(
        pathfinding_trail(p(0, 0), p(1, 0), 1024, &[]).unwrap(),
        vec![p(0, 0), p(1, 0)]
    );
}

proptest! {
    #[test]
    fn open_grid_paths_are_manhattan_optimal(
        size in 1i32..16,
        sx in 0i32..16, sy in 0i32..16, gx in 0i32..16, gy in 0i32..16,
    ) {
        let start = p(sx % size, sy % size);
        let goal = p(gx % size, gy % size);
        let path = find_path(start, goal, size, &[]).unwrap();
        prop_assert_eq!(path.len(), manhattan(start, goal) as usize + 1);
        prop_assert_eq!(path[0], start);
        prop_assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn paths_avoid_obstacles_and_are_shortest(
        start in cell(12),
        goal in cell(12),
        obstacles in proptest::collection::vec(cell(12), 0..60),
    ) {
        let blocked: HashSet<Point> =
            obstacles.iter().copied().filter(|&o| o != start).collect();
        let obstacles: Vec<Point> = blocked.iter().copied().collect();
        let path = find_path(start, goal, 12, &obstacles).unwrap();

        match bfs_distance(start, goal, 12, &blocked) {
            Some(d) => {
                prop_assert_eq!(path.len(), d + 1);
                prop_assert_eq!(path[0], start);
                prop_assert_eq!(*path.last().unwrap(), goal);
                for c in &path[1..] {
                    prop_assert!(!blocked.contains(c));
                }
                for w in path.windows(2) {
                    prop_assert!(w[0].is_adjacent(w[1]));
                }
            }
            None => prop_assert!(path.is_empty()),
        }
    }
}
