// config.rs - Settings a driver hands to the engine

use std::time::Duration;

use crate::error::{AutomatonError, Result};
use crate::grid::Engine;
use crate::rule::Rule;

/// Initial grid size (cells per side).
pub const INITIAL_SIZE: usize = 10;
/// Side length of one rendered cell, in pixels. Only renderers read this.
pub const CELL_PIXELS: usize = 30;
/// Delay between two generations while running.
pub const STEP_INTERVAL_MS: u64 = 300;
pub const DEFAULT_RULE: &str = "00000011010011101100101100010000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub initial_size: usize,
    pub cell_pixels: usize,
    pub step_interval: Duration,
    /// State assumed for neighbours outside the grid.
    pub border: bool,
    /// 32-character `0`/`1` rule table.
    pub rule: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_size: INITIAL_SIZE,
            cell_pixels: CELL_PIXELS,
            step_interval: Duration::from_millis(STEP_INTERVAL_MS),
            border: false,
            rule: DEFAULT_RULE.to_string(),
        }
    }
}

impl Config {
    pub fn rule(&self) -> Result<Rule> {
        self.rule.parse()
    }

    /// A fresh engine of `initial_size` with the configured border value.
    pub fn engine(&self) -> Result<Engine> {
        Engine::with_border(self.initial_size, self.border)
    }
}

/// Border values arrive from drivers as 0 or 1.
pub fn parse_border(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(AutomatonError::InvalidBorderValue { value }),
    }
}
