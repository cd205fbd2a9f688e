//! grid_snake: an autonomous snake chasing pills across a grid with
//! user-placed obstacles.
//!
//! Rendering, windowing and input are left to the caller, which drives the
//! simulation through [`World`]: call [`World::tick`] once per frame, read
//! [`World::body`] and [`World::cell`] to draw, and forward clicks that were
//! mapped to a grid cell to [`World::toggle_obstacle`].
//!
//! # Example
//! ```
//! use grid_snake::{Config, World};
//! let config = Config { seed: Some(1), ..Config::default() };
//! let mut world = World::new(&config).unwrap();
//! world.tick().unwrap();
//! assert!(world.body().len() >= 2);
//! ```

#[macro_use]
extern crate derive_more;

pub mod basic;
pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod snake;
pub mod world;

pub use basic::{CellDim, CellPos, Dir, Position};
pub use config::Config;
pub use error::{Context, Error, ErrorKind, GridError, Result};
pub use grid::{CellContent, Grid};
pub use snake::{Snake, State, TickOutcome};
pub use world::{Stats, World};
