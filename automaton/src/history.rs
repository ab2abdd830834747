// history.rs - Remembers recent generations so drivers can stop on a repeat

use log::info;

use crate::grid::Engine;

const HISTORY_LEN: usize = 10;

/// Ring of the fingerprints of the last few observed generations.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the engine's current state. Returns true when the same state was
    /// seen within the last ten observations; the repeat is not recorded.
    pub fn observe(&mut self, engine: &Engine) -> bool {
        let current = engine.fingerprint();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current) {
            info!("generation {} repeats an earlier state", engine.generation());
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current;
        self.history_count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}
