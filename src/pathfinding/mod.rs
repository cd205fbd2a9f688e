mod a_star;

use crate::basic::{CellDim, CellPos, Dir};
use crate::grid::CellContent;

pub use a_star::AStar;

/// Cells to walk from (excluding) the start to (including) the goal
pub type Path = Vec<CellPos>;

pub trait PathFinder {
    /// An empty path means the goal is unreachable
    fn find_path(&self, graph: &mut SearchGraph, start: CellPos, goal: CellPos) -> Path;
}

#[derive(Clone, Debug, Default)]
pub enum Template {
    #[default]
    AStar,
}

impl Template {
    pub fn into_pathfinder(self) -> Box<dyn PathFinder + Send + Sync> {
        match self {
            Template::AStar => Box::new(AStar),
        }
    }
}

pub const INFINITE_COST: u32 = u32::MAX;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Visit {
    Unseen,
    Open,
    Closed,
}

/// Per-cell search bookkeeping; everything except `walkable` is scratch
/// state that only means something during a single search
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    pub pos: CellPos,
    pub walkable: bool,
    pub g_cost: u32,
    pub h_cost: u32,
    pub parent: Option<usize>,
    pub visit: Visit,
}

impl SearchNode {
    fn new(pos: CellPos) -> Self {
        Self {
            pos,
            walkable: true,
            g_cost: INFINITE_COST,
            h_cost: 0,
            parent: None,
            visit: Visit::Unseen,
        }
    }

    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }

    fn reset(&mut self) {
        self.g_cost = INFINITE_COST;
        self.h_cost = 0;
        self.parent = None;
        self.visit = Visit::Unseen;
    }
}

/// One node per grid cell, laid out in the same row-major order
pub struct SearchGraph {
    dim: CellDim,
    nodes: Vec<SearchNode>,
}

impl SearchGraph {
    pub fn new(dim: CellDim) -> Self {
        let nodes = (0..dim.cell_count())
            .map(|idx| SearchNode::new(CellPos::from_index(idx, dim)))
            .collect();
        Self { dim, nodes }
    }

    pub fn dim(&self) -> CellDim {
        self.dim
    }

    /// Recompute walkability after the cell at `pos` changed to `content`
    pub fn sync(&mut self, pos: CellPos, content: CellContent) {
        if let Some(idx) = self.index(pos) {
            self.nodes[idx].walkable = content.is_walkable();
        }
    }

    pub fn walkable(&self, pos: CellPos) -> bool {
        self.index(pos).map_or(false, |idx| self.nodes[idx].walkable)
    }

    pub fn index(&self, pos: CellPos) -> Option<usize> {
        pos.index_in(self.dim)
    }

    pub fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }

    /// Forget everything left over from the previous search
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(SearchNode::reset);
    }

    /// The in-bounds orthogonal neighbours, no wrapping
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let pos = self.nodes[idx].pos;
        Dir::iter().filter_map(move |dir| self.index(pos.translate(dir, 1)))
    }

    pub fn heuristic(a: CellPos, b: CellPos) -> u32 {
        a.manhattan_distance(b) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn corner_has_two_neighbors() {
        let graph = SearchGraph::new(CellDim::new(3, 3));
        let idx = graph.index(CellPos::new(0, 0)).unwrap();
        let neighbors = graph
            .neighbors(idx)
            .map(|n| graph.node(n).pos)
            .sorted()
            .collect_vec();
        assert_eq!(neighbors, vec![CellPos::new(1, 0), CellPos::new(0, 1)]);
    }

    #[test]
    fn centre_has_four_neighbors() {
        let graph = SearchGraph::new(CellDim::new(3, 3));
        let idx = graph.index(CellPos::new(1, 1)).unwrap();
        assert_eq!(graph.neighbors(idx).count(), 4);
    }

    #[test]
    fn heuristic_is_manhattan() {
        assert_eq!(SearchGraph::heuristic(CellPos::new(0, 0), CellPos::new(3, 4)), 7);
        assert_eq!(SearchGraph::heuristic(CellPos::new(5, 1), CellPos::new(2, 1)), 3);
    }

    #[test]
    fn sync_tracks_content() {
        let mut graph = SearchGraph::new(CellDim::new(2, 2));
        let pos = CellPos::new(1, 1);
        graph.sync(pos, CellContent::Obstacle);
        assert!(!graph.walkable(pos));
        graph.sync(pos, CellContent::Pill);
        assert!(graph.walkable(pos));
        graph.sync(pos, CellContent::Snake);
        assert!(!graph.walkable(pos));
        assert!(!graph.walkable(CellPos::new(2, 0)));
    }
}
