// render.rs - Text rendering of a grid for the terminal

use automaton::Engine;

pub const LIVE: char = '#';
pub const DEAD: char = '.';

pub fn render(engine: &Engine) -> String {
    let mut out = String::with_capacity((engine.size() + 1) * engine.size());
    for row in engine.rows() {
        out.extend(row.iter().map(|&alive| if alive { LIVE } else { DEAD }));
        out.push('\n');
    }
    out
}

pub fn status_line(engine: &Engine) -> String {
    let total = engine.size() * engine.size();
    let live = engine.live_count();
    format!(
        "generation {} | live {} / {} ({:.1}%)",
        engine.generation(),
        live,
        total,
        live as f64 / total as f64 * 100.0
    )
}
