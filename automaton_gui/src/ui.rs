// ui.rs - Window layout, canvas drawing and click handling for the automaton driver

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::{AutomatonApp, AutomatonInterface};
use automaton::PATTERNS;

const LIVE_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
const DEAD_COLOR: Color32 = Color32::WHITE;
const MAX_GRID_SIZE: usize = 200;

/// Maps a pointer position on the canvas to a (row, col) cell coordinate.
/// Positions left of or above the canvas give negative coordinates.
fn cell_at(origin: Pos2, cell: f32, pos: Pos2) -> (isize, isize) {
    let col = ((pos.x - origin.x) / cell).floor() as isize;
    let row = ((pos.y - origin.y) / cell).floor() as isize;
    (row, col)
}

impl eframe::App for AutomatonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-step while running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                ui.label("Size:");
                ui.add(egui::DragValue::new(&mut self.pending_size).clamp_range(1..=MAX_GRID_SIZE));
                if ui.button("Resize Grid").clicked() {
                    self.apply_resize();
                }

                if ui.button("Inverse All").clicked() {
                    self.inverse_all();
                }

                let button_text = if self.is_running { "Pause" } else { "Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_pause();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("Random").clicked() {
                    self.is_running = false;
                    self.randomize();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                let mut border = self.engine().border();
                if ui.checkbox(&mut border, "Live border").changed() {
                    self.set_border(border);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Rule:");
                ui.add(egui::TextEdit::singleline(&mut self.rule_text).desired_width(280.0));
                if ui.button("Apply Rule").clicked() {
                    self.apply_rule_text();
                }
            });

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead.");

            // Draw the grid, shrinking cells when the configured size would not fit
            let n = self.engine().size();
            let cell = self.cell_pixels.min(ui.available_width() / n as f32).max(1.0);
            let total_size = Vec2::splat(cell * n as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            for (row, cells) in self.engine().rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * cell, row as f32 * cell),
                        Vec2::splat(cell),
                    );
                    let color = if alive { LIVE_COLOR } else { DEAD_COLOR };
                    painter.rect_filled(rect, 0.0, color);
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK));
                }
            }

            // Clicks outside the grid fall through toggle_cell as no-ops
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (row, col) = cell_at(origin, cell, pos);
                    self.toggle_cell(row, col);
                }
            }

            ui.separator();

            let engine = self.engine();
            let total = n * n;
            let live = engine.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", engine.generation()));
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
            ui.label(format!("Active rule: {}", self.rule()));

            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status);
            }
        });

        // Keep stepping while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}
