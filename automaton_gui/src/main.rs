// main.rs - Desktop driver for the automaton: owns the engine, the rule and the step cadence
// Drawing and input handling live in ui.rs

use eframe::egui;
use log::{info, warn};
use std::time::{Duration, Instant};

mod ui;

use automaton::{Config, CycleDetector, Engine, PATTERNS, Rule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = AutomatonApp::new(Config::default())?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct AutomatonApp {
    engine: Engine,
    rule: Rule,

    pub rule_text: String,     // Rule field contents, applied on demand
    pub pending_size: usize,   // Resize field contents
    pub cell_pixels: f32,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
    pub status: Option<String>,

    cycle: CycleDetector,
}

impl AutomatonApp {
    pub fn new(cfg: Config) -> automaton::Result<Self> {
        let rule = cfg.rule()?;
        let engine = cfg.engine()?;
        let mut cycle = CycleDetector::new();
        cycle.observe(&engine);

        Ok(Self {
            pending_size: engine.size(),
            engine,
            rule,
            rule_text: cfg.rule.clone(),
            cell_pixels: cfg.cell_pixels as f32,
            is_running: false,
            last_update: Instant::now(),
            update_interval: cfg.step_interval,
            selected_pattern: 0,
            status: None,
            cycle,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }
}

/// Operations the UI layer invokes on the driver
pub trait AutomatonInterface {
    fn update_generation(&mut self);
    fn toggle_cell(&mut self, row: isize, col: isize);
    fn inverse_all(&mut self);
    fn clear_grid(&mut self);
    fn randomize(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_resize(&mut self);
    fn apply_rule_text(&mut self);
    fn set_border(&mut self, border: bool);
    fn toggle_pause(&mut self);
}

impl AutomatonInterface for AutomatonApp {
    fn update_generation(&mut self) {
        self.engine.step(&self.rule);

        if self.cycle.observe(&self.engine) && self.is_running {
            self.is_running = false;
            self.status = Some(format!(
                "Paused: generation {} repeats an earlier state",
                self.engine.generation()
            ));
        }
    }

    fn toggle_cell(&mut self, row: isize, col: isize) {
        self.engine.toggle_cell(row, col);
        self.cycle.reset();
    }

    fn inverse_all(&mut self) {
        self.engine.invert_all();
        self.cycle.reset();
    }

    fn clear_grid(&mut self) {
        self.engine.clear();
        self.cycle.reset();
        self.status = None;
    }

    fn randomize(&mut self) {
        self.engine.randomize(&mut rand::rng(), 0.33);
        self.cycle.reset();
        self.status = None;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.engine.apply_pattern(pattern);
            self.cycle.reset();
            self.status = None;
        }
    }

    fn apply_resize(&mut self) {
        match self.engine.resize(self.pending_size) {
            Ok(()) => {
                info!("grid resized to {}", self.pending_size);
                self.cycle.reset();
                self.status = None;
            }
            Err(err) => {
                warn!("{err}");
                self.pending_size = self.engine.size();
                self.status = Some(err.to_string());
            }
        }
    }

    fn apply_rule_text(&mut self) {
        match self.rule_text.parse::<Rule>() {
            Ok(rule) => {
                info!("rule set to {rule}");
                self.rule = rule;
                self.cycle.reset();
                self.status = None;
            }
            Err(err) => {
                warn!("{err}");
                self.status = Some(err.to_string());
            }
        }
    }

    fn set_border(&mut self, border: bool) {
        self.engine.set_border(border);
        self.cycle.reset();
    }

    fn toggle_pause(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
            self.status = None;
        }
    }
}
