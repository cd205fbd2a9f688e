//! Configuration loader.
//!
//! * Looks for `grid_snake.toml` in the cwd unless overridden by `--config`.
//! * Every field has a default so the file is optional.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_PATH: &str = "grid_snake.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Start position in world coordinates (x/z plane)
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Start {
    pub x: f32,
    pub z: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid size in cells.
    pub width: usize,
    pub height: usize,
    /// Seed for pill placement, entropy when absent.
    pub seed: Option<u64>,
    pub start: Start,
    /// Moves needed to cross one cell.
    pub steps_per_cell: usize,
    /// Moves a body segment trails the one in front of it,
    /// one full cell when absent.
    pub lag_ticks: Option<usize>,
    /// Mark the computed path on the board.
    pub show_path: bool,
    /// Tick rate of the driver loop.
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seed: None,
            // centre of cell (10, 10) on the default grid
            start: Start { x: 0.5, z: 0.5 },
            steps_per_cell: 1,
            lag_ticks: None,
            show_path: false,
            fps: 10,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Load from a TOML file; a missing file gives the defaults, a broken
    /// one is reported and also gives the defaults.
    pub fn load(path: Option<&str>) -> Self {
        let p = path.unwrap_or(DEFAULT_PATH);
        if !Path::new(p).exists() {
            return Self::default();
        }
        Self::from_file(p).unwrap_or_else(|e| {
            warn!("{}: {}, using defaults", p, e);
            Self::default()
        })
    }

    pub fn lag(&self) -> usize {
        self.lag_ticks.unwrap_or(self.steps_per_cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_toml(
            r#"
            width = 8
            seed = 42
            steps_per_cell = 4
            start = { x = -0.5, z = 1.5 }
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.start, Start { x: -0.5, z: 1.5 });
        assert_eq!(config.lag(), 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(Config::from_toml("width = \"wide\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(Config::load(Some("definitely/not/here.toml")), Config::default());
    }
}
