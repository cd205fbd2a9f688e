//! The handle the outer loop and input code hold: one owner for the grid and
//! the snake, so nothing else can write to either in the middle of a tick.

use log::{debug, warn};
use static_assertions::assert_impl_all;

use crate::basic::{CellPos, Position};
use crate::config::Config;
use crate::error::{Context, Error, Result};
use crate::grid::{CellContent, Grid};
use crate::snake::{self, Snake, TickOutcome};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub ticks: usize,
    pub moves: usize,
    pub stationary_ticks: usize,
    pub pills_eaten: usize,
}

pub struct World {
    grid: Grid,
    snake: Snake,
    show_path: bool,
    stats: Stats,
}

assert_impl_all!(World: Send);

impl World {
    pub fn new(config: &Config) -> Result<Self> {
        let grid = match config.seed {
            Some(seed) => Grid::seeded(config.width, config.height, seed),
            None => Grid::new(config.width, config.height),
        };
        let snake = snake::Builder::default()
            .pos(Position::new(config.start.x, config.start.z))
            .steps_per_cell(config.steps_per_cell)
            .lag(config.lag())
            .build(grid.dim())?;

        let mut world = Self::with_parts(grid, snake).context("World::new")?;
        world.show_path = config.show_path;
        world.grid.place_pill()?;
        Ok(world)
    }

    /// Takes over an existing grid and snake, marks the snake's cells,
    /// places no pill
    pub fn with_parts(mut grid: Grid, mut snake: Snake) -> Result<Self> {
        snake.spawn(&mut grid)?;
        Ok(Self {
            grid,
            snake,
            show_path: false,
            stats: Stats::default(),
        })
    }

    pub fn set_show_path(&mut self, show_path: bool) {
        self.show_path = show_path;
        if !show_path {
            self.grid.clear_path();
        }
    }

    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.show_path {
            self.grid.clear_path();
        }

        let len_before = self.snake.len();
        let outcome = self.snake.tick(&mut self.grid);
        self.stats.pills_eaten += self.snake.len() - len_before;
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                // the snake moved and grew, only the next pill found no room
                self.stats.ticks += 1;
                self.stats.moves += 1;
                return Err(Error::from(e).context("World::tick"));
            }
        };
        self.stats.ticks += 1;

        match outcome {
            TickOutcome::Moved(_) | TickOutcome::Crashed => self.stats.moves += 1,
            TickOutcome::Stationary => self.stats.stationary_ticks += 1,
            TickOutcome::Over => {}
        }

        if self.show_path && !self.snake.is_game_over() {
            self.grid.mark_path(self.snake.path());
        }
        Ok(outcome)
    }

    /// Input entry point: flip the cell at `pos` between obstacle and not.
    /// Taking the pill moves it elsewhere, touching the snake ends the game.
    pub fn toggle_obstacle(&mut self, pos: CellPos) -> Result {
        if !pos.is_in(self.grid.dim()) {
            warn!("ignoring obstacle toggle outside of the grid at {:?}", pos);
            return Ok(());
        }

        match self.grid.get(pos) {
            CellContent::Obstacle => self.grid.set(pos, CellContent::Empty)?,
            CellContent::Pill => {
                self.grid.set(pos, CellContent::Obstacle)?;
                self.grid.place_pill()?;
            }
            CellContent::Snake => self.game_over(),
            CellContent::Empty | CellContent::Path => self.grid.set(pos, CellContent::Obstacle)?,
        }
        debug!("toggled {:?}, now {:?}", pos, self.grid.get(pos));
        Ok(())
    }

    pub fn game_over(&mut self) {
        self.snake.game_over();
    }

    pub fn is_game_over(&self) -> bool {
        self.snake.is_game_over()
    }

    pub fn body(&self) -> &[Position] {
        self.snake.body()
    }

    pub fn cell(&self, pos: CellPos) -> CellContent {
        self.grid.get(pos)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}
