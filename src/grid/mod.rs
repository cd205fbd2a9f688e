//! The cell grid: single source of truth for what occupies each cell.
//!
//! Every write goes through [`Grid::set`], which also refreshes the
//! walkability of the matching search node, so the search graph can never
//! drift from occupancy.

use itertools::Itertools;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::basic::{CellDim, CellPos};
use crate::error::GridError;
use crate::pathfinding::{Path, PathFinder, SearchGraph};

pub mod spawn;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum CellContent {
    #[default]
    Empty,
    Obstacle,
    Snake,
    Pill,
    /// Render hint only, nothing in the simulation reads it
    Path,
}

impl CellContent {
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellContent::Obstacle | CellContent::Snake)
    }

    pub fn symbol(self) -> char {
        match self {
            CellContent::Empty => '.',
            CellContent::Obstacle => '#',
            CellContent::Snake => 'S',
            CellContent::Pill => '*',
            CellContent::Path => '+',
        }
    }
}

pub struct Grid {
    dim: CellDim,
    // row-major
    cells: Vec<CellContent>,
    graph: SearchGraph,
    rng: StdRng,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        let dim = CellDim::new(width as isize, height as isize);
        info!("grid initialized with size {}x{}", width, height);
        Self {
            dim,
            cells: vec![CellContent::Empty; dim.cell_count()],
            graph: SearchGraph::new(dim),
            rng,
        }
    }

    pub fn dim(&self) -> CellDim {
        self.dim
    }

    pub fn width(&self) -> usize {
        self.dim.x as usize
    }

    pub fn height(&self) -> usize {
        self.dim.y as usize
    }

    /// Out-of-bounds reads are `Obstacle`
    pub fn get(&self, pos: CellPos) -> CellContent {
        pos.index_in(self.dim)
            .map_or(CellContent::Obstacle, |idx| self.cells[idx])
    }

    /// Overwrites unconditionally; out-of-bounds writes are logged and rejected
    pub fn set(&mut self, pos: CellPos, content: CellContent) -> Result<(), GridError> {
        match pos.index_in(self.dim) {
            Some(idx) => {
                self.cells[idx] = content;
                self.graph.sync(pos, content);
                Ok(())
            }
            None => {
                let err = GridError::OutOfBounds { pos, dim: self.dim };
                warn!("{}", err);
                Err(err)
            }
        }
    }

    pub fn walkable(&self, pos: CellPos) -> bool {
        self.graph.walkable(pos)
    }

    /// Replace every cell holding `from` with `to`
    pub fn replace_all(&mut self, from: CellContent, to: CellContent) {
        for idx in 0..self.cells.len() {
            if self.cells[idx] == from {
                self.cells[idx] = to;
                self.graph.sync(CellPos::from_index(idx, self.dim), to);
            }
        }
    }

    /// Mark a uniformly chosen free cell as `Pill`. The board holds at most
    /// one pill, an existing one is returned as is.
    pub fn place_pill(&mut self) -> Result<CellPos, GridError> {
        if let Some(pos) = self.pill_position() {
            return Ok(pos);
        }
        let idx = spawn::random_empty_cell(&self.cells, &mut self.rng).ok_or(GridError::GridFull)?;
        let pos = CellPos::from_index(idx, self.dim);
        self.set(pos, CellContent::Pill)?;
        debug!("placed pill at {:?}", pos);
        Ok(pos)
    }

    /// There is never more than one pill, so the first match is the only one
    pub fn pill_position(&self) -> Option<CellPos> {
        self.cells
            .iter()
            .position(|c| *c == CellContent::Pill)
            .map(|idx| CellPos::from_index(idx, self.dim))
    }

    pub fn find_path(&mut self, pathfinder: &dyn PathFinder, start: CellPos, goal: CellPos) -> Path {
        pathfinder.find_path(&mut self.graph, start, goal)
    }

    pub fn graph(&self) -> &SearchGraph {
        &self.graph
    }

    /// Tag the `Empty` cells of `path` as `Path` for drawing
    pub fn mark_path<'a>(&mut self, path: impl IntoIterator<Item = &'a CellPos>) {
        for &pos in path {
            if self.get(pos) == CellContent::Empty {
                // in bounds, checked by get
                let _ = self.set(pos, CellContent::Path);
            }
        }
    }

    pub fn clear_path(&mut self) {
        self.replace_all(CellContent::Path, CellContent::Empty);
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellPos, CellContent)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, c)| (CellPos::from_index(idx, dim), *c))
    }

    pub fn render_ascii(&self) -> String {
        self.cells
            .chunks(self.width().max(1))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .join("\n")
    }
}
