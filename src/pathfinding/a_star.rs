use itertools::Itertools;
use log::trace;

use super::{Path, PathFinder, SearchGraph, Visit};
use crate::basic::CellPos;

/// A* with unit step cost and a Manhattan heuristic.
///
/// The open set is a plain vector scanned linearly; ties on `f` go to the
/// lower `h`, remaining ties to the node that entered the open set first.
pub struct AStar;

impl AStar {
    fn reconstruct(graph: &SearchGraph, goal: usize) -> Path {
        let mut path = vec![];
        let mut current = goal;
        // the start node is the only one without a parent
        while let Some(parent) = graph.node(current).parent {
            path.push(graph.node(current).pos);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl PathFinder for AStar {
    fn find_path(&self, graph: &mut SearchGraph, start: CellPos, goal: CellPos) -> Path {
        graph.reset();

        let (start_idx, goal_idx) = match (graph.index(start), graph.index(goal)) {
            (Some(s), Some(g)) => (s, g),
            _ => return vec![],
        };

        {
            let node = graph.node_mut(start_idx);
            node.g_cost = 0;
            node.h_cost = SearchGraph::heuristic(start, goal);
            node.visit = Visit::Open;
        }
        let mut open = vec![start_idx];

        loop {
            let expand_idx = match open
                .iter()
                .position_min_by_key(|&&idx| {
                    let node = graph.node(idx);
                    (node.f_cost(), node.h_cost)
                }) {
                Some(i) => i,
                None => {
                    trace!("no path from {:?} to {:?}", start, goal);
                    return vec![];
                }
            };

            let current = open.remove(expand_idx);
            graph.node_mut(current).visit = Visit::Closed;

            if current == goal_idx {
                return Self::reconstruct(graph, goal_idx);
            }

            let candidate_g = graph.node(current).g_cost + 1;
            let neighbors = graph.neighbors(current).collect_vec();
            for n in neighbors {
                let node = graph.node_mut(n);
                if !node.walkable || node.visit == Visit::Closed {
                    continue;
                }

                if candidate_g < node.g_cost || node.visit != Visit::Open {
                    node.g_cost = candidate_g;
                    node.h_cost = SearchGraph::heuristic(node.pos, goal);
                    node.parent = Some(current);
                    if node.visit != Visit::Open {
                        node.visit = Visit::Open;
                        open.push(n);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::CellDim;
    use crate::grid::{CellContent, Grid};

    fn assert_valid(grid: &Grid, start: CellPos, path: &Path) {
        let mut prev = start;
        for &pos in path {
            assert_eq!(prev.manhattan_distance(pos), 1, "{:?} -> {:?}", prev, pos);
            assert_ne!(grid.get(pos), CellContent::Obstacle);
            prev = pos;
        }
    }

    #[test]
    fn open_grid_paths_are_manhattan_optimal() {
        let mut grid = Grid::seeded(7, 5, 0);
        let CellDim { x: w, y: h } = grid.dim();
        for (a, b) in [
            (CellPos::new(0, 0), CellPos::new(6, 4)),
            (CellPos::new(6, 4), CellPos::new(0, 0)),
            (CellPos::new(3, 2), CellPos::new(3, 0)),
            (CellPos::new(0, 4), CellPos::new(5, 1)),
            (CellPos::new(w - 1, 0), CellPos::new(0, h - 1)),
        ] {
            let path = grid.find_path(&AStar, a, b);
            assert_eq!(path.len(), a.manhattan_distance(b));
            assert_eq!(path.last(), Some(&b));
            assert_valid(&grid, a, &path);
        }
    }

    #[test]
    fn path_goes_around_a_wall() {
        let mut grid = Grid::seeded(5, 5, 0);
        for y in 0..4 {
            grid.set(CellPos::new(2, y), CellContent::Obstacle).unwrap();
        }
        let start = CellPos::new(0, 0);
        let goal = CellPos::new(4, 0);
        let path = grid.find_path(&AStar, start, goal);
        // down to row 4, across, back up
        assert_eq!(path.len(), 4 + 4 + 4);
        assert_eq!(path.last(), Some(&goal));
        assert_valid(&grid, start, &path);
    }

    #[test]
    fn walled_off_goal_has_no_path() {
        let mut grid = Grid::seeded(5, 5, 0);
        let goal = CellPos::new(4, 4);
        grid.set(CellPos::new(3, 4), CellContent::Obstacle).unwrap();
        grid.set(CellPos::new(4, 3), CellContent::Obstacle).unwrap();
        assert!(grid.find_path(&AStar, CellPos::new(0, 0), goal).is_empty());
    }

    #[test]
    fn snake_cells_block_the_search() {
        let mut grid = Grid::seeded(3, 1, 0);
        grid.set(CellPos::new(1, 0), CellContent::Snake).unwrap();
        assert!(grid.find_path(&AStar, CellPos::new(0, 0), CellPos::new(2, 0)).is_empty());
    }

    #[test]
    fn stale_state_does_not_leak_between_searches() {
        let mut grid = Grid::seeded(5, 5, 0);
        let first = grid.find_path(&AStar, CellPos::new(0, 0), CellPos::new(4, 4));
        assert_eq!(first.len(), 8);

        grid.set(CellPos::new(1, 0), CellContent::Obstacle).unwrap();
        grid.set(CellPos::new(0, 1), CellContent::Obstacle).unwrap();
        assert!(grid.find_path(&AStar, CellPos::new(0, 0), CellPos::new(4, 4)).is_empty());

        let third = grid.find_path(&AStar, CellPos::new(4, 4), CellPos::new(2, 2));
        assert_eq!(third.len(), 4);
        assert!(grid.graph().node(grid.graph().index(CellPos::new(0, 0)).unwrap()).parent.is_none());
    }

    // from the start, Right and Down have equal f and h and Right entered
    // the open set first; after that the lower-h rule prefers (2,0) over
    // the equally cheap (0,1)
    #[test]
    fn ties_are_deterministic() {
        let mut grid = Grid::seeded(3, 3, 0);
        let path = grid.find_path(&AStar, CellPos::new(0, 0), CellPos::new(2, 2));
        assert_eq!(
            path,
            vec![CellPos::new(1, 0), CellPos::new(2, 0), CellPos::new(2, 1), CellPos::new(2, 2)]
        );
        let again = grid.find_path(&AStar, CellPos::new(0, 0), CellPos::new(2, 2));
        assert_eq!(path, again);
    }
}
