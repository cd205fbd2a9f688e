use std::collections::VecDeque;

use log::{debug, info};
use static_assertions::assert_impl_all;

pub use builder::{Builder, BuilderError};

use crate::basic::{CellDim, CellPos, Dir, Position};
use crate::error::GridError;
use crate::grid::{CellContent, Grid};
use crate::pathfinding::{Path, PathFinder};

pub mod builder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Moving,
    GameOver,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Moved(Dir),
    /// No pill, or no path to it
    Stationary,
    /// This tick ended the game
    Crashed,
    /// The game had already ended, nothing happened
    Over,
}

pub(crate) struct Body {
    /// Head first
    pub(crate) segments: Vec<Position>,
    /// `queues[i]` buffers the positions segment `i` will take next, one
    /// queue per segment; `queues[0]` belongs to the head and stays empty
    pub(crate) queues: Vec<VecDeque<Position>>,
    /// Direction of the last move
    pub(crate) dir: Option<Dir>,
}

impl Body {
    fn advance(&mut self, new_head: Position, lag: usize) {
        self.segments[0] = new_head;
        self.queues[1].push_back(new_head);

        for i in 1..self.segments.len() {
            if self.queues[i].len() > lag {
                if let Some(pos) = self.queues[i].pop_front() {
                    self.segments[i] = pos;
                    if let Some(next) = self.queues.get_mut(i + 1) {
                        next.push_back(pos);
                    }
                }
            }
        }
    }
}

pub struct Snake {
    pub(crate) body: Body,
    state: State,
    /// Distance covered by one move, a fraction of a cell
    step: f32,
    /// Moves a segment waits before taking a buffered position
    lag: usize,
    pathfinder: Box<dyn PathFinder + Send + Sync>,
    path: Path,
}

assert_impl_all!(Snake: Send, Sync);

impl Snake {
    pub const MIN_LEN: usize = 2;

    pub fn head(&self) -> Position {
        self.body.segments[0]
    }

    pub fn head_cell(&self, board_dim: CellDim) -> CellPos {
        self.head().to_cell(board_dim)
    }

    pub fn body(&self) -> &[Position] {
        &self.body.segments
    }

    pub fn len(&self) -> usize {
        self.body.segments.len()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }

    /// The path computed on the last search
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mark the initial body on the grid
    pub fn spawn(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        self.sync_occupancy(grid)
    }

    pub fn tick(&mut self, grid: &mut Grid) -> Result<TickOutcome, GridError> {
        if self.is_game_over() {
            return Ok(TickOutcome::Over);
        }

        let board_dim = grid.dim();
        let dir = if self.head().is_cell_centre(board_dim) {
            match self.next_dir(grid) {
                Some(dir) => dir,
                None => return Ok(TickOutcome::Stationary),
            }
        } else {
            // mid-transition, finish entering the cell before searching again
            match self.body.dir {
                Some(dir) => dir,
                None => return Ok(TickOutcome::Stationary),
            }
        };

        self.move_dir(dir, grid)?;
        Ok(if self.is_game_over() {
            TickOutcome::Crashed
        } else {
            TickOutcome::Moved(dir)
        })
    }

    fn next_dir(&mut self, grid: &mut Grid) -> Option<Dir> {
        let goal = match grid.pill_position() {
            Some(goal) => goal,
            None => {
                self.path.clear();
                return None;
            }
        };
        let start = self.head_cell(grid.dim());
        self.path = grid.find_path(self.pathfinder.as_ref(), start, goal);
        debug!("path {:?} -> {:?}: {} steps", start, goal, self.path.len());
        self.path.first().and_then(|next| start.dir_to(*next))
    }

    pub fn move_dir(&mut self, dir: Dir, grid: &mut Grid) -> Result<(), GridError> {
        if self.is_game_over() {
            return Ok(());
        }

        let board_dim = grid.dim();
        let new_head = self.head().step(dir, self.step).snapped(board_dim);
        if !new_head.to_cell(board_dim).is_in(board_dim) {
            info!("snake left the grid at {:?}", new_head);
            self.game_over();
            return Ok(());
        }

        self.body.dir = Some(dir);
        self.body.advance(new_head, self.lag);
        self.sync_occupancy(grid)
    }

    /// Rewrite the snake's cells: clear the old ones, look at what the head
    /// ran into, mark the new ones, then grow if a pill was eaten
    pub fn sync_occupancy(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        let board_dim = grid.dim();
        grid.replace_all(CellContent::Snake, CellContent::Empty);

        let head_cell = self.head_cell(board_dim);
        let ate = match grid.get(head_cell) {
            CellContent::Pill => true,
            CellContent::Obstacle => {
                info!("snake crashed into an obstacle at {:?}", head_cell);
                self.game_over();
                false
            }
            _ => false,
        };

        for segment in &self.body.segments {
            let cell = segment.to_cell(board_dim);
            // a crashed head must not erase the obstacle it hit
            if grid.get(cell) != CellContent::Obstacle {
                grid.set(cell, CellContent::Snake)?;
            }
        }

        if ate {
            self.grow(grid)?;
        }
        Ok(())
    }

    /// Duplicate the tail and place the next pill
    pub fn grow(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        let tail = self.body.segments[self.len() - 1];
        self.body.segments.push(tail);
        self.body.queues.push(VecDeque::new());
        debug!("snake grew to {} segments", self.len());

        let tail_cell = tail.to_cell(grid.dim());
        if grid.get(tail_cell) != CellContent::Obstacle {
            grid.set(tail_cell, CellContent::Snake)?;
        }
        grid.place_pill()?;
        Ok(())
    }

    pub fn game_over(&mut self) {
        if !self.is_game_over() {
            info!("game over with {} segments", self.len());
            self.state = State::GameOver;
        }
    }
}
