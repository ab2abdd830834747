// main.rs - Headless driver: steps the automaton on a fixed interval and prints each generation

mod render;
mod session;

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use automaton::{Config, Engine, config, patterns};

use crate::session::{Session, Stop};

#[derive(Parser, Debug)]
#[command(name = "automaton_cli")]
struct Args {
    // ---------------- grid / rule ----------------
    /// Cells per side of the square grid.
    #[arg(long, default_value_t = config::INITIAL_SIZE)]
    size: usize,

    /// State of every neighbour outside the grid: 0 or 1.
    #[arg(long, default_value_t = 0)]
    border: u8,

    /// 32-character 0/1 rule table, indexed by self*16 + up*8 + down*4 + left*2 + right.
    #[arg(long, default_value = config::DEFAULT_RULE)]
    rule: String,

    // ---------------- seeding ----------------
    /// Named start pattern (see automaton::patterns), placed around the centre.
    #[arg(long)]
    pattern: Option<String>,

    /// Fill randomly with this live-cell density (0.0..=1.0) instead of a pattern.
    #[arg(long, value_name = "density")]
    random: Option<f64>,

    /// RNG seed for --random. If omitted, a fresh seed is drawn.
    #[arg(long)]
    seed: Option<u64>,

    /// Flip a cell before the run, as `row,col`. Repeatable; off-grid cells are ignored.
    #[arg(long = "toggle", value_name = "row,col", value_parser = parse_coord)]
    toggles: Vec<(isize, isize)>,

    /// Invert the whole grid after seeding.
    #[arg(long)]
    invert: bool,

    // ---------------- scheduling ----------------
    /// Milliseconds between generations.
    #[arg(long, default_value_t = config::STEP_INTERVAL_MS)]
    interval_ms: u64,

    /// Stop after this many generations (0 runs until Ctrl-C).
    #[arg(long, default_value_t = 0)]
    generations: u64,

    /// Keep running when the grid repeats a recent state.
    #[arg(long)]
    no_stop_on_cycle: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        Ok(Config {
            initial_size: self.size,
            // tokio intervals must have a non-zero period
            step_interval: Duration::from_millis(self.interval_ms.max(1)),
            border: config::parse_border(self.border)?,
            rule: self.rule.clone(),
            ..Config::default()
        })
    }
}

fn parse_coord(s: &str) -> std::result::Result<(isize, isize), String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {s:?}"))?;
    let r = r.trim().parse::<isize>().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let c = c.trim().parse::<isize>().map_err(|e| format!("bad col {c:?}: {e}"))?;
    Ok((r, c))
}

fn seed_grid(engine: &mut Engine, args: &Args) -> Result<()> {
    if let Some(name) = &args.pattern {
        let pattern = patterns::find(name).ok_or_else(|| {
            let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
            anyhow!("unknown pattern {name:?}; known: {}", known.join(", "))
        })?;
        engine.apply_pattern(pattern);
    }

    if let Some(density) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        engine.randomize(&mut rng, density);
    }

    for &(row, col) in &args.toggles {
        engine.toggle_cell(row, col);
    }

    if args.invert {
        engine.invert_all();
    }
    Ok(())
}

fn print_generation(engine: &Engine) {
    println!("{}", render::status_line(engine));
    print!("{}", render::render(engine));
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = args.config()?;
    let rule = cfg.rule().context("invalid --rule")?;
    let mut engine = cfg.engine().context("invalid --size")?;
    seed_grid(&mut engine, &args)?;

    info!(
        "running {0}x{0} grid, rule {rule}, border {1}, every {2:?}",
        engine.size(),
        cfg.border as u8,
        cfg.step_interval
    );
    print_generation(&engine);

    let mut session = Session::new(engine, rule, args.generations, !args.no_stop_on_cycle);
    if session.finished() {
        return Ok(());
    }

    let mut ticker = tokio::time::interval(cfg.step_interval);
    // The first tick completes immediately; the initial grid was already shown.
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            res = &mut shutdown => {
                res.context("waiting for Ctrl-C")?;
                info!("interrupted at generation {}", session.engine.generation());
                break;
            }
        }

        let stop = session.tick();
        print_generation(&session.engine);
        match stop {
            Some(Stop::Cycle) => {
                info!("stopped: state repeats at generation {}", session.engine.generation());
                break;
            }
            Some(Stop::Limit) => {
                debug!("reached {} generations", args.generations);
                break;
            }
            None => {}
        }
    }
    Ok(())
}
