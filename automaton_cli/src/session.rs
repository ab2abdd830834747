// session.rs - One engine, one rule, and the stop conditions of a headless run

use automaton::{CycleDetector, Engine, Rule};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The requested number of generations was reached.
    Limit,
    /// The grid repeated a recent state.
    Cycle,
}

pub struct Session {
    pub engine: Engine,
    rule: Rule,
    cycle: CycleDetector,
    /// 0 runs until interrupted.
    generations: u64,
    stop_on_cycle: bool,
}

impl Session {
    pub fn new(engine: Engine, rule: Rule, generations: u64, stop_on_cycle: bool) -> Self {
        let mut cycle = CycleDetector::new();
        cycle.observe(&engine);
        Self {
            engine,
            rule,
            cycle,
            generations,
            stop_on_cycle,
        }
    }

    /// Whether the generation limit is already met before stepping.
    pub fn finished(&self) -> bool {
        self.generations > 0 && self.engine.generation() >= self.generations
    }

    /// Applies one generation and reports whether the run should stop after it.
    pub fn tick(&mut self) -> Option<Stop> {
        self.engine.step(&self.rule);
        let repeated = self.cycle.observe(&self.engine);
        if self.stop_on_cycle && repeated {
            Some(Stop::Cycle)
        } else if self.finished() {
            Some(Stop::Limit)
        } else {
            None
        }
    }
}
