//! Failures the simulation can run into.
//!
//! Each layer keeps its own small error type ([`GridError`], the snake
//! [`BuilderError`](crate::snake::BuilderError), [`ConfigError`]); once one
//! leaves its module it becomes an [`Error`], which collects the names of the
//! calls it passed through so the driver can report where it happened.

use crate::basic::{CellDim, CellPos};
use crate::config::ConfigError;
use crate::snake;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("cell {pos:?} is outside of the {}x{} grid", .dim.x, .dim.y)]
    OutOfBounds { pos: CellPos, dim: CellDim },
    #[error("no free cell left for a pill")]
    GridFull,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    SnakeBuilder(#[from] snake::BuilderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[must_use]
pub struct Error {
    kind: ErrorKind,
    /// Innermost call first
    context: Vec<String>,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, context: vec![] }
    }
}

impl From<GridError> for Error {
    fn from(e: GridError) -> Self {
        ErrorKind::from(e).into()
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        ErrorKind::from(e).into()
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        ErrorKind::from(e).into()
    }
}

impl Error {
    pub fn context<S: ToString>(mut self, call: S) -> Self {
        self.context.push(call.to_string());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn grid_error(&self) -> Option<GridError> {
        match &self.kind {
            ErrorKind::Grid(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for call in &self.context {
            write!(f, "\n    in {}", call)?;
        }
        Ok(())
    }
}

// main returns this, so Debug is what ends up on stderr
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Adds a call name to the error of a [`Result`]
pub trait Context {
    fn context<S: ToString>(self, call: S) -> Self;
}

impl<T> Context for Result<T> {
    fn context<S: ToString>(self, call: S) -> Self {
        self.map_err(|e| e.context(call))
    }
}
