//! Two-dimensional binary cellular automaton with a five-input rule table.
//!
//! - [`rule`]: the 32-entry lookup table over (self, up, down, left, right).
//! - [`grid`]: the [`Engine`]: owned N×N cell state and synchronous stepping.
//! - [`config`]: driver-facing defaults (size, cadence, border value, rule string).
//! - [`patterns`]: named seed shapes placed around the grid centre.
//! - [`history`]: short fingerprint history used to spot repeating generations.
//! - [`error`]: the crate's error type.
//!
//! The engine is purely synchronous. Timers, rendering and input belong to the
//! driver that owns an [`Engine`] and a [`Rule`].

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rule;

pub use config::Config;
pub use error::{AutomatonError, Result};
pub use grid::Engine;
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};
pub use rule::Rule;
