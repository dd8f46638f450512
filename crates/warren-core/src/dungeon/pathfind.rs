//! A* pathfinding over a traversability grid.
//!
//! The search is 8-connected with a uniform step cost of 1 for straight and
//! diagonal moves alike (an intentional simplification; the heuristic is
//! the straight-line distance). Corridor carving relies on the path
//! reconstruction splicing orthogonal intermediates between diagonal steps
//! so the carved tunnel stays walkable without diagonal movement.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

/// A grid coordinate.
pub type Coord = (usize, usize);

/// Internal pathfinding failure.
///
/// "No path exists" is a normal outcome and is not an error; this is
/// raised only when recorded parent links cannot be walked back to the
/// start, which indicates a search bug rather than a property of the map.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("path reconstruction walked off the parent chain")]
    Reconstruction,
}

const ORTHO: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Search bookkeeping for one reached cell. The start is its own parent.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    parent: Coord,
    g: f32,
    f: f32,
}

/// Open-set entry. Ordered so a max-heap pops the minimum f-cost, with
/// ties broken in favor of the earliest-discovered node.
struct OpenNode {
    f: f32,
    seq: u64,
    pos: Coord,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn euclidean(a: Coord, b: Coord) -> f32 {
    let dx = a.0 as f32 - b.0 as f32;
    let dy = a.1 as f32 - b.1 as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Shortest path from `start` to `goal` over a `width` x `height` grid.
///
/// `passable` decides which cells may be entered. Returns `Ok(None)` when
/// no path exists: the goal is unenterable or equal to the start, the open
/// set drains, or the open set grows to the size of the whole grid (the
/// termination bound for disconnected regions). The returned path runs
/// start to goal inclusive; duplicate nodes from the smoothing pass are
/// tolerated by the carver.
pub fn find_path<F>(
    width: usize,
    height: usize,
    passable: F,
    start: Coord,
    goal: Coord,
) -> Result<Option<Vec<Coord>>, PathError>
where
    F: Fn(Coord) -> bool,
{
    let in_bounds = |(x, y): Coord| x < width && y < height;
    if !in_bounds(start) || !in_bounds(goal) {
        return Ok(None);
    }
    if start == goal || !passable(goal) {
        return Ok(None);
    }

    let idx = |(x, y): Coord| y * width + x;
    let mut records: Vec<Option<NodeRecord>> = vec![None; width * height];
    let mut closed = vec![false; width * height];
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;

    records[idx(start)] = Some(NodeRecord {
        parent: start,
        g: 0.0,
        f: 0.0,
    });
    open.push(OpenNode {
        f: 0.0,
        seq,
        pos: start,
    });

    while !open.is_empty() && open.len() < width * height {
        // Re-validate popped entries: stale or unenterable nodes are
        // discarded and extraction retries.
        let node = match open.pop() {
            Some(n) => n,
            None => break,
        };
        if closed[idx(node.pos)] || !passable(node.pos) {
            continue;
        }
        closed[idx(node.pos)] = true;
        let g_here = match records[idx(node.pos)] {
            Some(record) => record.g,
            None => return Err(PathError::Reconstruction),
        };

        let (x, y) = (node.pos.0 as i32, node.pos.1 as i32);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 {
                    continue;
                }
                let neighbor = (nx as usize, ny as usize);
                if !in_bounds(neighbor) || !passable(neighbor) {
                    continue;
                }
                // The goal ends the search the moment it is discovered.
                if neighbor == goal {
                    let g = g_here + 1.0;
                    records[idx(goal)] = Some(NodeRecord {
                        parent: node.pos,
                        g,
                        f: g,
                    });
                    return reconstruct(width, height, &records, start, goal).map(Some);
                }
                if closed[idx(neighbor)] {
                    continue;
                }
                let g = g_here + 1.0;
                let h = euclidean(neighbor, goal);
                let f = g + h;
                let improves = match records[idx(neighbor)] {
                    None => true,
                    Some(record) => f < record.f,
                };
                if improves {
                    records[idx(neighbor)] = Some(NodeRecord {
                        parent: node.pos,
                        g,
                        f,
                    });
                    seq += 1;
                    open.push(OpenNode {
                        f,
                        seq,
                        pos: neighbor,
                    });
                }
            }
        }
    }

    Ok(None)
}

/// Walk parent links back from the goal, then replay the chain forward
/// while splicing in orthogonal children, so a diagonal step sequence
/// carves into an orthogonally walkable corridor.
fn reconstruct(
    width: usize,
    height: usize,
    records: &[Option<NodeRecord>],
    start: Coord,
    goal: Coord,
) -> Result<Vec<Coord>, PathError> {
    let idx = |(x, y): Coord| y * width + x;

    // Goal back to start; the start is the only node that is its own parent.
    let mut chain = Vec::new();
    let mut cursor = goal;
    loop {
        let record = records[idx(cursor)].ok_or(PathError::Reconstruction)?;
        chain.push(cursor);
        if cursor == start {
            break;
        }
        if record.parent == cursor || chain.len() > width * height {
            return Err(PathError::Reconstruction);
        }
        cursor = record.parent;
    }

    // The chain doubles as a stack: start is on top, so popping replays
    // the path in start-to-goal order.
    let mut stack = chain;
    let mut path = Vec::new();
    let budget = 4 * width * height;
    while let Some(top) = stack.pop() {
        if path.len() >= budget {
            return Err(PathError::Reconstruction);
        }
        path.push(top);
        for (dx, dy) in ORTHO {
            let (nx, ny) = (top.0 as i32 + dx, top.1 as i32 + dy);
            if nx < 0 || ny < 0 {
                continue;
            }
            let neighbor = (nx as usize, ny as usize);
            if neighbor.0 >= width || neighbor.1 >= height || neighbor == start {
                continue;
            }
            if let Some(record) = records[idx(neighbor)] {
                if record.parent == top {
                    stack.push(neighbor);
                    break;
                }
            }
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> impl Fn(Coord) -> bool {
        |_| true
    }

    fn chebyshev(a: Coord, b: Coord) -> usize {
        let dx = (a.0 as i32 - b.0 as i32).unsigned_abs() as usize;
        let dy = (a.1 as i32 - b.1 as i32).unsigned_abs() as usize;
        dx.max(dy)
    }

    #[test]
    fn adjacent_cells_give_two_node_path() {
        let path = find_path(10, 10, open_grid(), (3, 3), (4, 3))
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![(3, 3), (4, 3)]);
    }

    #[test]
    fn start_equals_goal_is_no_path() {
        assert_eq!(find_path(10, 10, open_grid(), (2, 2), (2, 2)), Ok(None));
    }

    #[test]
    fn unenterable_goal_is_no_path() {
        let blocked = |c: Coord| c != (5, 5);
        assert_eq!(find_path(10, 10, blocked, (1, 1), (5, 5)), Ok(None));
    }

    #[test]
    fn out_of_bounds_endpoints_are_no_path() {
        assert_eq!(find_path(10, 10, open_grid(), (0, 0), (10, 3)), Ok(None));
        assert_eq!(find_path(10, 10, open_grid(), (12, 0), (3, 3)), Ok(None));
    }

    #[test]
    fn enclosed_goal_terminates_with_no_path() {
        // Goal at (5, 5) ringed by blocked cells.
        let passable = |c: Coord| {
            let ring = chebyshev(c, (5, 5)) == 1;
            !ring
        };
        assert_eq!(find_path(20, 20, passable, (1, 1), (5, 5)), Ok(None));
    }

    #[test]
    fn path_runs_start_to_goal() {
        let path = find_path(20, 20, open_grid(), (2, 2), (15, 9))
            .unwrap()
            .unwrap();
        assert_eq!(path.first(), Some(&(2, 2)));
        assert_eq!(path.last(), Some(&(15, 9)));
    }

    #[test]
    fn path_steps_stay_adjacent() {
        let path = find_path(20, 20, open_grid(), (1, 1), (17, 4))
            .unwrap()
            .unwrap();
        for pair in path.windows(2) {
            assert!(chebyshev(pair[0], pair[1]) <= 1, "{:?}", pair);
        }
    }

    #[test]
    fn path_avoids_blocked_cells() {
        // Vertical barrier at x == 8 with a gap at y == 6.
        let passable = |c: Coord| c.0 != 8 || c.1 == 6;
        let path = find_path(20, 20, passable, (2, 2), (14, 2))
            .unwrap()
            .unwrap();
        for &node in &path {
            assert!(passable(node), "path entered blocked cell {:?}", node);
        }
        assert!(path.contains(&(8, 6)));
    }

    #[test]
    fn smoothing_keeps_diagonal_runs_orthogonally_walkable() {
        // A pure diagonal from (1, 1) to (8, 8) over open ground. After
        // smoothing, the visited set must connect start to goal using
        // orthogonal steps only.
        let path = find_path(12, 12, open_grid(), (1, 1), (8, 8))
            .unwrap()
            .unwrap();
        let mut frontier = vec![path[0]];
        let mut seen = vec![path[0]];
        while let Some(node) = frontier.pop() {
            for (dx, dy) in ORTHO {
                let next = (
                    (node.0 as i32 + dx) as usize,
                    (node.1 as i32 + dy) as usize,
                );
                if path.contains(&next) && !seen.contains(&next) {
                    seen.push(next);
                    frontier.push(next);
                }
            }
        }
        assert!(seen.contains(&(8, 8)), "goal not orthogonally reachable");
    }
}
