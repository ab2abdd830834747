// grid.rs - Square grid of binary cells and the synchronous step over it

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{debug, trace};
use rand::Rng;

use crate::error::{AutomatonError, Result};
use crate::patterns::Pattern;
use crate::rule::Rule;

/// N×N grid of cells plus the border value assumed for every off-grid neighbour.
///
/// Cells are stored row-major. `scratch` is the second buffer of the double
/// buffer used by [`Engine::step`]; it always has the same length as `cells`.
#[derive(Debug, Clone)]
pub struct Engine {
    size: usize,
    border: bool,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    generation: u64,
}

impl Engine {
    /// Creates an all-dead `size`×`size` grid with a dead border.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_border(size, false)
    }

    pub fn with_border(size: usize, border: bool) -> Result<Self> {
        let len = cell_count(size)?;
        Ok(Self {
            size,
            border,
            cells: vec![false; len],
            scratch: vec![false; len],
            generation: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn border(&self) -> bool {
        self.border
    }

    /// Changes the state assumed for neighbours outside the grid. Takes effect
    /// from the next step.
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Steps applied since the grid was last resized, cleared or seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discards all state and starts over with a dead `new_size`×`new_size` grid.
    ///
    /// A rejected size leaves the current grid untouched.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        let len = cell_count(new_size)?;
        debug!("resize {} -> {}", self.size, new_size);
        self.size = new_size;
        self.cells = vec![false; len];
        self.scratch = vec![false; len];
        self.generation = 0;
        Ok(())
    }

    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        row >= 0 && row < n && col >= 0 && col < n
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// State at `(row, col)`; off-grid coordinates read as the border value.
    #[inline]
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        if self.in_bounds(row, col) {
            self.cells[self.index_of(row as usize, col as usize)]
        } else {
            self.border
        }
    }

    /// 0/1 form of [`Engine::is_alive`], for renderers.
    pub fn cell_state(&self, row: isize, col: isize) -> u8 {
        self.is_alive(row, col) as u8
    }

    /// Flips one cell. Coordinates outside the grid are ignored.
    pub fn toggle_cell(&mut self, row: isize, col: isize) {
        if !self.in_bounds(row, col) {
            trace!("toggle ({row}, {col}) outside {0}x{0}, ignored", self.size);
            return;
        }
        let idx = self.index_of(row as usize, col as usize);
        self.cells[idx] = !self.cells[idx];
        trace!("toggle ({row}, {col}) -> {}", self.cells[idx] as u8);
    }

    pub fn invert_all(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
        debug!("inverted {} cells", self.cells.len());
    }

    /// Kills every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Fills the grid with live cells at probability `density` (clamped to 0..=1).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
        self.generation = 0;
        debug!("randomized {0}x{0} at density {density:.2}", self.size);
    }

    /// Clears the grid and draws `pattern` around the centre cell.
    /// Pattern cells that land outside the grid are dropped.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.clear();
        let centre = (self.size / 2) as isize;
        for &(dr, dc) in pattern.cells {
            let (row, col) = (centre + dr, centre + dc);
            if self.in_bounds(row, col) {
                let idx = self.index_of(row as usize, col as usize);
                self.cells[idx] = true;
            }
        }
        debug!("applied pattern {:?}", pattern.name);
    }

    /// Advances one generation.
    ///
    /// Every new cell is computed from the grid as it was before the call, then
    /// the buffers are swapped. Neighbours are read in the order the rule table
    /// expects: up `(i-1, j)`, down `(i+1, j)`, left `(i, j-1)`, right `(i, j+1)`.
    pub fn step(&mut self, rule: &Rule) {
        let mut next = std::mem::take(&mut self.scratch);
        let n = self.size as isize;

        for i in 0..n {
            for j in 0..n {
                let this = self.is_alive(i, j);
                let up = self.is_alive(i - 1, j);
                let down = self.is_alive(i + 1, j);
                let left = self.is_alive(i, j - 1);
                let right = self.is_alive(i, j + 1);
                next[self.index_of(i as usize, j as usize)] =
                    rule.evaluate(this, up, down, left, right);
            }
        }

        self.scratch = std::mem::replace(&mut self.cells, next);
        self.generation += 1;
        debug!("generation {}: {} live", self.generation, self.live_count());
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows top to bottom, each `size` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Hash of the size and every cell state.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.size.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

fn cell_count(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(AutomatonError::InvalidSize { size });
    }
    size.checked_mul(size).ok_or(AutomatonError::InvalidSize { size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_cells(engine: &Engine) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in engine.rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                if alive {
                    out.push((r, c));
                }
            }
        }
        out
    }

    #[test]
    fn test_new_grid_is_dead() {
        let engine = Engine::new(4).unwrap();
        assert_eq!(engine.size(), 4);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.border());
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.rows().count(), 4);
        assert!(engine.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            Engine::new(0).unwrap_err(),
            AutomatonError::InvalidSize { size: 0 }
        );
        assert!(matches!(
            Engine::new(usize::MAX),
            Err(AutomatonError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_in_bounds() {
        let engine = Engine::new(3).unwrap();
        assert!(engine.in_bounds(0, 0));
        assert!(engine.in_bounds(2, 2));
        assert!(!engine.in_bounds(-1, 0));
        assert!(!engine.in_bounds(0, -1));
        assert!(!engine.in_bounds(3, 0));
        assert!(!engine.in_bounds(0, 3));
    }

    #[test]
    fn test_toggle_cell() {
        let mut engine = Engine::new(3).unwrap();
        engine.toggle_cell(1, 2);
        assert_eq!(engine.cell_state(1, 2), 1);
        assert_eq!(alive_cells(&engine), vec![(1, 2)]);
        engine.toggle_cell(1, 2);
        assert_eq!(engine.cell_state(1, 2), 0);

        engine.toggle_cell(-1, 0);
        engine.toggle_cell(3, 1);
        engine.toggle_cell(0, 99);
        assert_eq!(engine.live_count(), 0);
    }

    #[test]
    fn test_off_grid_reads_border() {
        let mut engine = Engine::with_border(2, true).unwrap();
        assert_eq!(engine.cell_state(-1, 0), 1);
        assert_eq!(engine.cell_state(0, 2), 1);
        assert_eq!(engine.cell_state(0, 0), 0);
        engine.set_border(false);
        assert_eq!(engine.cell_state(-1, 0), 0);
    }

    #[test]
    fn test_invert_all() {
        let mut engine = Engine::new(3).unwrap();
        engine.toggle_cell(0, 0);
        engine.invert_all();
        assert_eq!(engine.live_count(), 8);
        assert_eq!(engine.cell_state(0, 0), 0);
        engine.invert_all();
        assert_eq!(alive_cells(&engine), vec![(0, 0)]);
    }

    #[test]
    fn test_resize_discards_state() {
        let mut engine = Engine::new(3).unwrap();
        engine.invert_all();
        engine.step(&"0".repeat(32).parse().unwrap());
        engine.invert_all();
        assert_eq!(engine.generation(), 1);

        engine.resize(5).unwrap();
        assert_eq!(engine.size(), 5);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.live_count(), 0);
    }

    #[test]
    fn test_rejected_resize_keeps_grid() {
        let mut engine = Engine::new(3).unwrap();
        engine.toggle_cell(1, 1);
        assert_eq!(
            engine.resize(0),
            Err(AutomatonError::InvalidSize { size: 0 })
        );
        assert_eq!(engine.size(), 3);
        assert_eq!(alive_cells(&engine), vec![(1, 1)]);
    }

    #[test]
    fn test_step_reads_old_grid_only() {
        // Next state = up neighbour (index bit 8), i.e. everything shifts down a row.
        let mut table = [0u8; 32];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = ((i & 8) != 0) as u8;
        }
        let rule = Rule::new(&table).unwrap();

        let mut engine = Engine::new(3).unwrap();
        engine.toggle_cell(0, 1);
        engine.step(&rule);
        assert_eq!(alive_cells(&engine), vec![(1, 1)]);
        engine.step(&rule);
        assert_eq!(alive_cells(&engine), vec![(2, 1)]);
        engine.step(&rule);
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_apply_pattern_centres_and_clips() {
        let mut engine = Engine::new(5).unwrap();
        engine.invert_all();
        engine.apply_pattern(&crate::patterns::PATTERNS[1]);
        assert_eq!(
            alive_cells(&engine),
            vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]
        );

        // Bar is five wide; a 2x2 grid keeps only what fits around (1, 1).
        engine.resize(2).unwrap();
        engine.apply_pattern(&crate::patterns::PATTERNS[2]);
        assert_eq!(alive_cells(&engine), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = Engine::new(6).unwrap();
        engine.randomize(&mut rng, 1.0);
        assert_eq!(engine.live_count(), 36);
        engine.randomize(&mut rng, 0.0);
        assert_eq!(engine.live_count(), 0);
        engine.randomize(&mut rng, 7.5);
        assert_eq!(engine.live_count(), 36);
    }

    #[test]
    fn test_fingerprint_tracks_state() {
        let mut engine = Engine::new(4).unwrap();
        let empty = engine.fingerprint();
        engine.toggle_cell(2, 3);
        assert_ne!(engine.fingerprint(), empty);
        engine.toggle_cell(2, 3);
        assert_eq!(engine.fingerprint(), empty);

        let other = Engine::new(5).unwrap();
        assert_ne!(other.fingerprint(), empty);
    }
}
